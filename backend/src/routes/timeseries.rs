use serde::{Deserialize, Serialize};

use crate::models::WaveObservation;

// =========================================================
// Time series types
// =========================================================

/// Observations for one site, ascending by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesData {
    pub site: String,
    pub observations: Vec<WaveObservation>,
}
