use serde::{Deserialize, Serialize};

// =========================================================
// Site selector types
// =========================================================

/// Options for the site dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteList {
    /// Allow-list, in configured order.
    pub sites: Vec<String>,
    /// Initial selection.
    pub default_site: String,
    /// Allowed sites that actually have rows in the loaded dataset.
    pub sites_with_data: Vec<String>,
}
