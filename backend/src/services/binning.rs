//! Height and direction bucketing for the wave rose.

use crate::models::{Compass, HeightBin, HeightBins, WaveObservation};

/// Height bin for a significant height, if it falls inside the bin range.
pub fn bin_height(height: Option<f64>, bins: &HeightBins) -> Option<HeightBin> {
    height.and_then(|h| bins.locate(h))
}

/// Compass sector for a direction in degrees true.
pub fn bin_direction(direction: Option<f64>) -> Option<Compass> {
    direction.and_then(Compass::from_degrees)
}

/// Bin pair for one row, or `None` when either value is missing or out of
/// range. Such rows stay in the table for the time-series charts.
pub fn bin_row(row: &WaveObservation, bins: &HeightBins) -> Option<(HeightBin, Compass)> {
    let height = bin_height(row.significant_height, bins)?;
    let direction = bin_direction(row.direction)?;
    Some((height, direction))
}

/// Bin pair per row, aligned with `rows`.
pub fn bin_for_rose(rows: &[WaveObservation], bins: &HeightBins) -> Vec<Option<(HeightBin, Compass)>> {
    rows.iter().map(|row| bin_row(row, bins)).collect()
}
