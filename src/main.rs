use std::path::PathBuf;

use anyhow::Context;
use repository::StorageConfig;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct AppConfig {
    storage: Storage,
    server: Server,
}

#[derive(Debug, Deserialize)]
struct Storage {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Server {
    address: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config: AppConfig = util::load_config("Config.toml")?;

    // storage must be ready before a single request is accepted
    let repository = repository::init_repository(&StorageConfig {
        path: config.storage.path.clone(),
    })
    .await
    .context("failed to initialize storage")?;

    let router = api::serve(repository, config.storage.path);

    let listener = tokio::net::TcpListener::bind(&config.server.address)
        .await
        .with_context(|| {
            format!("failed to bind {}", config.server.address)
        })?;
    info!(address = %config.server.address, "listening");

    axum::serve(listener, router).await?;

    Ok(())
}
