//! Data Transfer Objects for the HTTP API.
//!
//! Chart payloads live in [`crate::api`]; this module only holds the
//! request/response types specific to the HTTP layer.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /v1/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardQuery {
    /// Selected site (default: configured default site)
    #[serde(default)]
    pub site: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
    /// Rows in the cleaned table
    pub rows: usize,
    /// Allowed sites present in the data
    pub sites_with_data: usize,
    /// SHA-256 of the raw dataset
    pub dataset_checksum: String,
}
