//! HTTP handlers for the dashboard API.
//!
//! Each handler reads the shared cleaned table and delegates to the service
//! layer. Every call is a full recompute for the requested site.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use tracing::debug;

use super::dto::{DashboardQuery, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{DashboardData, RoseData, SiteList, SiteSummary, TimeSeriesData};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const DASHBOARD_PAGE: &str = include_str!("../../static/dashboard.html");

// =============================================================================
// Page and health
// =============================================================================

/// GET /
///
/// Dashboard page: site dropdown plus the four charts.
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rows: state.table.len(),
        sites_with_data: state.table.sites().len(),
        dataset_checksum: state.dataset_checksum.to_string(),
    }))
}

// =============================================================================
// Site selector
// =============================================================================

/// GET /v1/sites
///
/// Dropdown options and the initial selection.
pub async fn list_sites(State(state): State<AppState>) -> HandlerResult<SiteList> {
    Ok(Json(SiteList {
        sites: state.config.sites.allowed.clone(),
        default_site: state.config.sites.default.clone(),
        sites_with_data: state.table.sites(),
    }))
}

// =============================================================================
// Chart endpoints
// =============================================================================

/// GET /v1/dashboard?site=...
///
/// All four charts for the selected site, or the default site when the
/// query omits one.
pub async fn get_selected_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> HandlerResult<DashboardData> {
    let site = match query.site {
        Some(site) if site.trim().is_empty() => {
            return Err(AppError::BadRequest("site must not be blank".to_string()));
        }
        Some(site) => site,
        None => state.config.sites.default.clone(),
    };
    Ok(Json(dashboard_for(&state, &site)))
}

/// GET /v1/sites/{site}/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(site): Path<String>,
) -> HandlerResult<DashboardData> {
    Ok(Json(dashboard_for(&state, &site)))
}

fn dashboard_for(state: &AppState, site: &str) -> DashboardData {
    let data = services::build_dashboard(&state.table, site, &state.config);
    debug!(
        site = %site,
        rose_rows = data.rose.len(),
        found = data.message.is_none(),
        "Recomputed dashboard"
    );
    data
}

/// GET /v1/sites/{site}/rose
pub async fn get_rose(
    State(state): State<AppState>,
    Path(site): Path<String>,
) -> HandlerResult<RoseData> {
    Ok(Json(services::rose_data(&state.table, &site, &state.config.bins)))
}

/// GET /v1/sites/{site}/timeseries
pub async fn get_timeseries(
    State(state): State<AppState>,
    Path(site): Path<String>,
) -> HandlerResult<TimeSeriesData> {
    Ok(Json(services::timeseries_data(&state.table, &site)))
}

/// GET /v1/sites/{site}/summary
pub async fn get_summary(
    State(state): State<AppState>,
    Path(site): Path<String>,
) -> HandlerResult<SiteSummary> {
    Ok(Json(services::site_summary(&state.table, &site)))
}

/// Fallback for unmatched paths.
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
