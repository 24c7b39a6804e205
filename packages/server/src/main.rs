use std::sync::Arc;

use anyhow::Context;
use common::RandomMetrics;
use tracing::{Level, info, warn};

use server::config::AppConfig;
use server::seed::seed_sample_data;
use server::state::AppState;
use server::{build_router, store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    let level = config.logging.level.parse::<Level>();
    tracing_subscriber::fmt()
        .with_max_level(*level.as_ref().unwrap_or(&Level::INFO))
        .init();
    if level.is_err() {
        warn!(level = %config.logging.level, "Unknown log level, using info");
    }

    let store = store::connect(&config.database)
        .await
        .context("Failed to open store")?;

    if config.seed.sample_data {
        seed_sample_data(store.as_ref())
            .await
            .context("Failed to seed sample data")?;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        store,
        metrics: Arc::new(RandomMetrics),
        config,
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);
    info!("Dashboard: http://{}/dashboard.html", addr);
    info!("API docs: http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutting down");
}
