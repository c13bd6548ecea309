mod cli;

use crate::cli::{Command, StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};
use uniquecode_core::CodeIssuer;
use uniquecode_gateway::invoke::invoke;
use uniquecode_gateway::{App, AppState};
use uniquecode_generator::RandomCodeGenerator;
use uniquecode_service::UniqueCodeService;
use uniquecode_storage::{InMemoryRepository, RedisRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    uniquecode_telemetry::init(config.log_format.into())?;

    info!(storage_backend = %config.storage, "starting unique code gateway");

    let issuer: Arc<dyn CodeIssuer> = match config.storage {
        StorageBackendArg::InMemory => Arc::new(UniqueCodeService::new(
            InMemoryRepository::new(),
            RandomCodeGenerator::new(),
        )),
        StorageBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("redis url is required when storage backend is redis")?;
            let repository = RedisRepository::connect(redis_url, config.key_prefix).await?;
            Arc::new(UniqueCodeService::new(repository, RandomCodeGenerator::new()))
        }
    };

    match config.command {
        Command::Serve(args) => serve(args.listen_addr, issuer).await,
        Command::Invoke => {
            let mut input = String::new();
            tokio::io::stdin().read_to_string(&mut input).await?;
            let output = invoke(issuer.as_ref(), &input).await?;
            println!("{output}");
            Ok(())
        }
    }
}

async fn serve(listen_addr: SocketAddr, issuer: Arc<dyn CodeIssuer>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    axum::serve(listener, App::router(AppState::new(issuer)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down gateway server");
}
