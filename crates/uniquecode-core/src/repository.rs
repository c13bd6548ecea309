use crate::error::StorageError;
use crate::record::CodeRecord;
use async_trait::async_trait;

/// Name of the collection that holds issued codes.
pub const COLLECTION: &str = "UniqueCodes";

/// Write side of the key-value store that keeps issued codes.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Writes the record keyed by its code.
    ///
    /// The write is unconditional: an existing record with the same code is
    /// replaced rather than reported as a conflict.
    async fn put(&self, record: &CodeRecord) -> Result<(), StorageError>;
}
