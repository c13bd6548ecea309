use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The symbols a generated code is drawn from: upper case ASCII letters
/// followed by the decimal digits.
pub const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Shortest code that can be generated or stored.
pub const MIN_LENGTH: usize = 1;
/// Longest code that can be generated or stored.
pub const MAX_LENGTH: usize = u8::MAX as usize;

/// A generated code, 1-255 characters over [`ALPHABET`].
///
/// The code doubles as the natural key of the stored record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueCode(String);

impl UniqueCode {
    /// Creates a new `UniqueCode` after validating the input.
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `UniqueCode` without validation.
    ///
    /// Use this only for codes produced by a generator that draws from
    /// [`ALPHABET`].
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of characters in the code.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn validate(code: &str) -> Result<()> {
        if code.len() < MIN_LENGTH || code.len() > MAX_LENGTH {
            return Err(CoreError::InvalidLength(code.len() as i64));
        }

        if let Some(c) = code.bytes().find(|b| !ALPHABET.contains(b)) {
            return Err(CoreError::InvalidCode(format!(
                "'{}' is not one of A-Z or 0-9 in '{}'",
                c as char, code
            )));
        }

        Ok(())
    }
}

impl Display for UniqueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UniqueCode> for String {
    fn from(value: UniqueCode) -> Self {
        value.0
    }
}
