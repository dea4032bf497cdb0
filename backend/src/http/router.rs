//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The page is same-origin; CORS only matters for external chart clients.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/sites", get(handlers::list_sites))
        .route("/dashboard", get(handlers::get_selected_dashboard))
        .route("/sites/{site}/dashboard", get(handlers::get_dashboard))
        .route("/sites/{site}/rose", get(handlers::get_rose))
        .route("/sites/{site}/timeseries", get(handlers::get_timeseries))
        .route("/sites/{site}/summary", get(handlers::get_summary));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::services::CleanedTable;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(CleanedTable::default(), DashboardConfig::default(), "0");
        let _router = create_router(state);
    }
}
