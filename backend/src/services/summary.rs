use std::collections::HashMap;

use crate::api::{SeriesStats, SiteSummary};
use crate::models::{Compass, WaveObservation};

use super::binning::bin_direction;
use super::cleaning::CleanedTable;
use super::timeseries::site_timeseries;

/// Mean, median, population std-dev, min and max of `values`.
/// An empty slice gives all zeros.
pub fn compute_stats(values: &[f64]) -> SeriesStats {
    if values.is_empty() {
        return SeriesStats {
            count: 0,
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
        };
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    SeriesStats {
        count,
        mean,
        median,
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[count - 1],
    }
}

fn field_stats<F>(rows: &[WaveObservation], field: F) -> SeriesStats
where
    F: Fn(&WaveObservation) -> Option<f64>,
{
    let values: Vec<f64> = rows.iter().filter_map(field).collect();
    compute_stats(&values)
}

/// Most frequent compass sector; ties go to the sector nearest north.
fn dominant_direction(rows: &[WaveObservation]) -> Option<Compass> {
    let mut counts: HashMap<Compass, usize> = HashMap::new();
    for direction in rows.iter().filter_map(|r| bin_direction(r.direction)) {
        *counts.entry(direction).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by(|(da, ca), (db, cb)| ca.cmp(cb).then(db.cmp(da)))
        .map(|(direction, _)| direction)
}

/// Overview statistics for one site. Unknown sites give zero counts.
pub fn site_summary(table: &CleanedTable, site: &str) -> SiteSummary {
    let rows = site_timeseries(table, site);

    SiteSummary {
        site: site.to_string(),
        observation_count: rows.len(),
        first_timestamp: rows.first().map(|r| r.timestamp),
        last_timestamp: rows.last().map(|r| r.timestamp),
        significant_height: field_stats(&rows, |r| r.significant_height),
        max_height: field_stats(&rows, |r| r.max_height),
        peak_period: field_stats(&rows, |r| r.peak_period),
        mean_period: field_stats(&rows, |r| r.mean_period),
        dominant_direction: dominant_direction(&rows),
    }
}
