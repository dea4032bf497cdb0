use serde::{Deserialize, Serialize};

use crate::models::Compass;

// =========================================================
// Wave rose types
// =========================================================

/// One (height bin, direction) cell of the wave rose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoseRow {
    /// Height interval label, e.g. `"1.5-2.0"`.
    pub height_bin: String,
    pub height_lower: f64,
    pub height_upper: f64,
    pub direction: Compass,
    pub count: usize,
    /// Share of the site's binned observations, in percent.
    pub percentage: f64,
}

/// Wave rose payload for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoseData {
    pub site: String,
    pub rows: Vec<RoseRow>,
    /// Observations that received a bin pair.
    pub total_count: usize,
}
