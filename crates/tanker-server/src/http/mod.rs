//! Router, shared state and handlers

mod error;
mod handlers;
mod request_tracing;

pub use error::ApiError;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;

use tanker_app::app::FleetService;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub service: FleetService,
}

impl AppState {
    pub fn new(service: FleetService) -> Self {
        Self { service }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/summary-stats/:user_id", get(handlers::summary_stats))
        .route("/bucket-data/:user_id", get(handlers::bucket_data))
        .layer(from_fn(request_tracing::request_tracing_middleware))
        .with_state(state)
}
