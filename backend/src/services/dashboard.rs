//! Site selection in, four chart datasets out.

use crate::api::{DashboardData, LineSeries, SeriesPoint};
use crate::config::DashboardConfig;
use crate::models::WaveObservation;

use super::cleaning::CleanedTable;
use super::rose::rose_aggregate;
use super::timeseries::site_timeseries;

fn line<F>(rows: &[WaveObservation], name: &str, unit: &str, field: F) -> LineSeries
where
    F: Fn(&WaveObservation) -> Option<f64>,
{
    LineSeries {
        name: name.to_string(),
        unit: unit.to_string(),
        points: rows
            .iter()
            .map(|r| SeriesPoint {
                timestamp: r.timestamp,
                value: field(r),
            })
            .collect(),
    }
}

/// Recompute every chart for `site` from the cleaned table.
///
/// A site outside the allow-list, or one with no rows, yields empty charts
/// and the site-not-found message instead of an error.
pub fn build_dashboard(table: &CleanedTable, site: &str, config: &DashboardConfig) -> DashboardData {
    if !config.sites.is_allowed(site) {
        return DashboardData::not_found(site);
    }

    let rows = site_timeseries(table, site);
    if rows.is_empty() {
        return DashboardData::not_found(site);
    }

    DashboardData {
        site: site.to_string(),
        rose: rose_aggregate(table, site, &config.bins),
        height: vec![
            line(&rows, "Hsig", "m", |r| r.significant_height),
            line(&rows, "Hmax", "m", |r| r.max_height),
        ],
        period: vec![
            line(&rows, "Tp", "s", |r| r.peak_period),
            line(&rows, "Tz", "s", |r| r.mean_period),
        ],
        direction: vec![line(&rows, "Direction", "deg", |r| r.direction)],
        message: None,
    }
}
