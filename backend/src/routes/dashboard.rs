use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::rose::RoseRow;

// =========================================================
// Dashboard types
// =========================================================

/// Shown instead of the charts when the selected site has no data.
pub const SITE_NOT_FOUND_MESSAGE: &str = "Site does not exist in data. Check site name.";

/// A single sample of a line chart. `None` renders as a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: NaiveDateTime,
    pub value: Option<f64>,
}

/// One named trace of a line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub unit: String,
    pub points: Vec<SeriesPoint>,
}

/// Everything the dashboard draws for one site selection.
///
/// Each field replaces the corresponding chart wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub site: String,
    /// Polar frequency chart.
    pub rose: Vec<RoseRow>,
    /// Hsig and Hmax over time.
    pub height: Vec<LineSeries>,
    /// Tp and Tz over time.
    pub period: Vec<LineSeries>,
    /// Direction over time.
    pub direction: Vec<LineSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DashboardData {
    /// Empty charts with the site-not-found message.
    pub fn not_found(site: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            rose: vec![],
            height: vec![],
            period: vec![],
            direction: vec![],
            message: Some(SITE_NOT_FOUND_MESSAGE.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rose.is_empty()
            && self.height.is_empty()
            && self.period.is_empty()
            && self.direction.is_empty()
    }
}
