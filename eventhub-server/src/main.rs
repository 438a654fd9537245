use std::net::SocketAddr;

use anyhow::{Context, Result};
use eventhub_core::Settings;
use eventhub_server::{AppState, build_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = settings.load_catalog()?;
    info!(events = catalog.len(), source = %catalog.source(), "catalog loaded");

    let addr: SocketAddr = settings
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", settings.bind))?;

    let app = build_router(AppState::new(catalog, &settings.currency));

    info!("eventhub-server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
