//! HTTP boundary for the fleet classification service

pub mod http;
pub mod telemetry;

pub use http::{build_router, AppState};
pub use telemetry::init_tracing;

use tokio::net::TcpListener;
use tracing::info;

use tanker_app::app::FleetService;
use tanker_app::config::Config;
use tanker_app::repository::open_repositories;
use tanker_types::Result;

/// Bind the configured address and serve until the process stops
pub async fn serve(config: Config) -> Result<()> {
    let repos = open_repositories(&config)?;
    let state = AppState::new(FleetService::new(repos, &config));
    let listener = TcpListener::bind(&config.bind).await?;
    info!(
        bind = %config.bind,
        store_dir = %config.store_dir()?.display(),
        "Fleet server listening"
    );
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
