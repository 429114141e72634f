use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use quizkit_server::config::{ServerConfig, StoreKind};
use quizkit_server::{AppState, router};
use quizkit_storage::{DocumentStore, MemoryStore, S3Store};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let store: Arc<dyn DocumentStore> = match config.store {
        StoreKind::S3 => {
            let client = quizkit_storage::client::build_client(
                config.region.clone(),
                config.s3_endpoint.clone(),
            )
            .await;
            Arc::new(S3Store::new(client, config.bucket.clone()))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Arc::new(MemoryStore::new())
        }
    };
    tracing::info!(store = store.name(), bucket = %config.bucket, "store ready");

    let app = router(AppState::new(store), config.static_dir.as_deref());

    if config.lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.address).await?;
    tracing::info!(address = %config.address, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
