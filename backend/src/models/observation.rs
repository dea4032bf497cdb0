use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Value used by the buoy network to mean "no reading".
pub const MISSING_SENTINEL: f64 = -99.9;

/// Column names the ingestion boundary depends on.
pub const REQUIRED_COLUMNS: [&str; 7] = ["Site", "DateTime", "Hsig", "Hmax", "Tp", "Tz", "Direction"];

/// One CSV row, exactly as published.
///
/// This is the only place that knows the external column names. Extra
/// columns in the source (`SiteNumber`, `Latitude`, `SST`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Site")]
    pub site: String,
    #[serde(rename = "DateTime")]
    pub date_time: String,
    #[serde(rename = "Hsig")]
    pub hsig: Option<f64>,
    #[serde(rename = "Hmax")]
    pub hmax: Option<f64>,
    #[serde(rename = "Tp")]
    pub tp: Option<f64>,
    #[serde(rename = "Tz")]
    pub tz: Option<f64>,
    #[serde(rename = "Direction")]
    pub direction: Option<f64>,
}

/// A cleaned buoy reading.
///
/// `None` in a numeric field means the source had no reading (blank cell or
/// the [`MISSING_SENTINEL`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveObservation {
    pub site: String,
    /// Site-local time, no zone attached.
    pub timestamp: NaiveDateTime,
    /// Significant wave height (m).
    pub significant_height: Option<f64>,
    /// Maximum wave height (m).
    pub max_height: Option<f64>,
    /// Peak period (s).
    pub peak_period: Option<f64>,
    /// Zero-crossing mean period (s).
    pub mean_period: Option<f64>,
    /// Degrees true.
    pub direction: Option<f64>,
}

/// Map the sentinel and non-finite values to `None`.
pub fn clean_value(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && (v - MISSING_SENTINEL).abs() > 1e-6)
}
