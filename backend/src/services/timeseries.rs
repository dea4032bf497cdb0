use crate::api::TimeSeriesData;
use crate::models::WaveObservation;

use super::cleaning::CleanedTable;

/// Observations for `site`, ascending by timestamp.
///
/// The sort is stable, so rows sharing a timestamp keep their source order.
/// An unknown site gives an empty vector.
pub fn site_timeseries(table: &CleanedTable, site: &str) -> Vec<WaveObservation> {
    let mut rows: Vec<WaveObservation> = table.rows_for_site(site).cloned().collect();
    rows.sort_by_key(|r| r.timestamp);
    rows
}

pub fn timeseries_data(table: &CleanedTable, site: &str) -> TimeSeriesData {
    TimeSeriesData {
        site: site.to_string(),
        observations: site_timeseries(table, site),
    }
}
