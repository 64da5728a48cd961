use std::net::SocketAddr;
use std::sync::Arc;

use aerodesk_api::{app, AppState};
use aerodesk_store::app_config::Config;
use aerodesk_store::BackendClient;
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "aerodesk_api=debug,aerodesk_console=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(
        "Starting Aerodesk console on port {} (backend {})",
        config.server.port,
        config.backend.base_url
    );

    let backend = BackendClient::new(&config.backend.base_url);
    let app_state = AppState {
        backend: Arc::new(backend),
        backend_hint: config.console.backend_hint.clone(),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
