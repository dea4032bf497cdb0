//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::services::CleanedTable;

/// Shared application state passed to all handlers.
///
/// Built once after the dataset is loaded and read-only from then on.
#[derive(Clone)]
pub struct AppState {
    /// Cleaned observations for all allowed sites
    pub table: Arc<CleanedTable>,
    /// Site allow-list, bin edges and server settings
    pub config: Arc<DashboardConfig>,
    /// SHA-256 of the raw CSV body
    pub dataset_checksum: Arc<str>,
}

impl AppState {
    /// Create a new application state from a loaded table.
    pub fn new(table: CleanedTable, config: DashboardConfig, dataset_checksum: impl Into<Arc<str>>) -> Self {
        Self {
            table: Arc::new(table),
            config: Arc::new(config),
            dataset_checksum: dataset_checksum.into(),
        }
    }
}
