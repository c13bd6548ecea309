use thiserror::Error;

/// Result type for core operations such as code generation.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("length must be between 1 and 255 inclusive, got {0}")]
    InvalidLength(i64),
    #[error("invalid code: {0}")]
    InvalidCode(String),
}

/// Errors raised while writing a record to the key-value store.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("record could not be encoded: {0}")]
    Encoding(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors reported to the caller of a create request.
///
/// Every variant is terminal for the current request.
#[derive(Debug, Clone, Error)]
pub enum UniqueCodeError {
    #[error("invalid length: {0}")]
    InvalidLength(String),
    #[error("invalid code: {0}")]
    InvalidCode(String),
    #[error("encoding failure: {0}")]
    Encoding(String),
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<CoreError> for UniqueCodeError {
    fn from(value: CoreError) -> Self {
        match value {
            err @ CoreError::InvalidLength(_) => Self::InvalidLength(err.to_string()),
            CoreError::InvalidCode(message) => Self::InvalidCode(message),
        }
    }
}

impl From<StorageError> for UniqueCodeError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::Encoding(message) => Self::Encoding(message),
            other => Self::Storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_message() {
        let err = CoreError::InvalidLength(0);
        assert_eq!(
            err.to_string(),
            "length must be between 1 and 255 inclusive, got 0"
        );
    }

    #[test]
    fn core_errors_keep_their_kind() {
        let err: UniqueCodeError = CoreError::InvalidLength(300).into();
        assert!(matches!(err, UniqueCodeError::InvalidLength(message) if message.ends_with("got 300")));

        let err: UniqueCodeError = CoreError::InvalidCode("'a' is not allowed".to_string()).into();
        assert!(matches!(err, UniqueCodeError::InvalidCode(message) if message == "'a' is not allowed"));
    }

    #[test]
    fn encoding_maps_to_encoding_failure() {
        let err: UniqueCodeError = StorageError::Encoding("bad".to_string()).into();
        assert!(matches!(err, UniqueCodeError::Encoding(message) if message == "bad"));
    }

    #[test]
    fn backend_errors_map_to_storage_failure() {
        let err: UniqueCodeError = StorageError::Timeout("put".to_string()).into();
        assert!(matches!(err, UniqueCodeError::Storage(_)));

        let err: UniqueCodeError = StorageError::Unavailable("down".to_string()).into();
        assert!(matches!(err, UniqueCodeError::Storage(message) if message.contains("down")));
    }
}
