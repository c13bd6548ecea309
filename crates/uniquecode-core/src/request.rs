use serde::{Deserialize, Serialize};

/// Length applied when a request leaves `length` unset.
pub const DEFAULT_LENGTH: i64 = 8;

/// A request to create a new code.
///
/// Every field is optional. A `length` of `0` is treated the same as an
/// absent one. Any other integer is accepted on the wire and range checked
/// by the generator, so an out-of-range value surfaces as `InvalidLength`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUniqueCodeRequest {
    /// Who the code is issued to.
    pub used_by: Option<String>,
    /// Requested number of characters in the code.
    pub length: Option<i64>,
    /// Free-form reference recorded with the code.
    pub reference: Option<String>,
    /// Free-form description recorded with the code.
    pub description: Option<String>,
}

/// A request with its default length applied.
///
/// `length` is never `0` but is not yet known to be in `1..=255`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    pub used_by: Option<String>,
    pub length: i64,
    pub reference: Option<String>,
    pub description: Option<String>,
}

impl CreateUniqueCodeRequest {
    /// Applies [`DEFAULT_LENGTH`] when the length is absent or `0`.
    ///
    /// The metadata fields pass through untouched.
    pub fn normalize(self) -> NormalizedRequest {
        let length = match self.length {
            None | Some(0) => DEFAULT_LENGTH,
            Some(length) => length,
        };

        NormalizedRequest {
            used_by: self.used_by,
            length,
            reference: self.reference,
            description: self.description,
        }
    }
}
