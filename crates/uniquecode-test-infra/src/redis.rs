use crate::error::{Result, TestInfraError};
use std::time::Duration;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage};

const REDIS_PORT: u16 = 6379;
const CONNECT_ATTEMPTS: u32 = 10;
const CONNECT_BACKOFF: Duration = Duration::from_millis(200);

/// A single Redis server running in a container.
///
/// The container is stopped when this value is dropped.
pub struct RedisServer {
    container: ContainerAsync<GenericImage>,
}

impl RedisServer {
    pub async fn start() -> Result<Self> {
        let container = GenericImage::new("redis", "8.6.0")
            .with_exposed_port(REDIS_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Ready to accept connections"))
            .start()
            .await
            .map_err(TestInfraError::Start)?;
        Ok(Self { container })
    }

    pub async fn host(&self) -> Result<String> {
        let host = self
            .container
            .get_host()
            .await
            .map_err(TestInfraError::Address)?
            .to_string();

        Ok(match host.as_str() {
            "localhost" => String::from("127.0.0.1"),
            _ => host,
        })
    }

    pub async fn port(&self) -> Result<u16> {
        self.container
            .get_host_port_ipv4(REDIS_PORT.tcp())
            .await
            .map_err(TestInfraError::Address)
    }

    /// Returns a `redis://host:port` URL for the server.
    pub async fn url(&self) -> Result<String> {
        Ok(format!("redis://{}:{}", self.host().await?, self.port().await?))
    }

    /// Opens a multiplexed connection, retrying while the server settles.
    pub async fn connection(&self) -> Result<redis::aio::MultiplexedConnection> {
        let url = self.url().await?;
        let client = redis::Client::open(url.as_str())
            .map_err(|source| TestInfraError::Url { url, source })?;

        let mut attempts = 1;
        loop {
            match client.get_multiplexed_async_connection().await {
                Ok(conn) => return Ok(conn),
                Err(source) if attempts >= CONNECT_ATTEMPTS => {
                    return Err(TestInfraError::NotReady { attempts, source });
                }
                Err(_) => {
                    attempts += 1;
                    tokio::time::sleep(CONNECT_BACKOFF).await;
                }
            }
        }
    }
}
