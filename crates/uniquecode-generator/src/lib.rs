pub mod random;

pub use random::RandomCodeGenerator;

use uniquecode_core::error::Result;
use uniquecode_core::UniqueCode;

/// Trait for generating codes.
///
/// Implementations are pure generators that don't interact with storage,
/// and make no promise that two calls return different codes.
pub trait Generator: Send + Sync + 'static {
    /// Generates a code of exactly `length` characters.
    ///
    /// Returns `Err(InvalidLength)` when `length` is outside `1..=255`.
    fn generate(&self, length: usize) -> Result<UniqueCode>;
}
