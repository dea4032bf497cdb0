use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =========================================================
// Site summary types
// =========================================================

/// Descriptive statistics over the non-missing values of one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Per-site overview shown next to the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSummary {
    pub site: String,
    pub observation_count: usize,
    pub first_timestamp: Option<NaiveDateTime>,
    pub last_timestamp: Option<NaiveDateTime>,
    pub significant_height: SeriesStats,
    pub max_height: SeriesStats,
    pub peak_period: SeriesStats,
    pub mean_period: SeriesStats,
    /// Compass sector with the most observations.
    pub dominant_direction: Option<crate::models::Compass>,
}
