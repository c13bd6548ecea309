use testcontainers::TestcontainersError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TestInfraError>;

#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("redis container failed to start")]
    Start(#[source] TestcontainersError),

    /// The container is up but its mapped host or port could not be read.
    #[error("redis container address unavailable")]
    Address(#[source] TestcontainersError),

    #[error("redis url {url} was rejected")]
    Url {
        url: String,
        #[source]
        source: redis::RedisError,
    },

    #[error("redis not accepting connections after {attempts} attempts")]
    NotReady {
        attempts: u32,
        #[source]
        source: redis::RedisError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn not_ready_reports_attempts_and_cause() {
        let cause = redis::RedisError::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        let err = TestInfraError::NotReady {
            attempts: 10,
            source: cause,
        };

        assert_eq!(
            err.to_string(),
            "redis not accepting connections after 10 attempts"
        );
        assert!(err.source().is_some());
    }
}
