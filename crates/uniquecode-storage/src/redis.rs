use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, trace, warn};
use uniquecode_core::{CodeRecord, Repository, StorageError, UniqueCode, COLLECTION};

/// A Redis-backed implementation of [`Repository`].
///
/// Each record is stored as a JSON string under `<prefix><code>`. The default
/// prefix is the collection name followed by a colon (`UniqueCodes:`).
#[derive(Debug, Clone)]
pub struct RedisRepository {
    conn: redis::aio::MultiplexedConnection,
    key_prefix: String,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StorageError {
    let message = format!("{operation}: {err}");
    if err.is_timeout() {
        StorageError::Timeout(message)
    } else if err.is_io_error() {
        StorageError::Unavailable(message)
    } else {
        StorageError::Operation(message)
    }
}

impl RedisRepository {
    /// Creates a repository on top of an existing connection.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self::with_prefix(conn, format!("{COLLECTION}:"))
    }

    /// Creates a repository with a custom key prefix.
    pub fn with_prefix(
        conn: redis::aio::MultiplexedConnection,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    /// Opens a multiplexed connection to `redis_url` and stores records under
    /// `key_prefix`.
    pub async fn connect(
        redis_url: &str,
        key_prefix: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| map_redis_error("invalid redis url", e))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error("failed to connect to Redis", e))?;
        Ok(Self::with_prefix(conn, key_prefix))
    }

    /// Generates the storage key for a code.
    pub fn record_key(&self, code: &UniqueCode) -> String {
        format!("{}{}", self.key_prefix, code.as_str())
    }
}

#[async_trait]
impl Repository for RedisRepository {
    async fn put(&self, record: &CodeRecord) -> Result<(), StorageError> {
        let key = self.record_key(&record.code);
        trace!(code = %record.code, "storing code record in Redis");

        let json = serde_json::to_string(record).map_err(|e| {
            warn!(code = %record.code, error = %e, "failed to encode code record");
            StorageError::Encoding(format!("failed to encode record: {e}"))
        })?;

        let mut conn = self.conn.clone();
        match conn.set::<_, _, ()>(&key, json).await {
            Ok(()) => {
                debug!(code = %record.code, key = %key, "stored code record in Redis");
                Ok(())
            }
            Err(e) => {
                warn!(code = %record.code, error = %e, "failed to store code record in Redis");
                Err(map_redis_error("failed to write value to Redis", e))
            }
        }
    }
}
