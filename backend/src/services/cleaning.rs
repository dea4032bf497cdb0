//! Raw-to-clean mapping for buoy records.

use chrono::NaiveDateTime;

use crate::error::{WaveError, WaveResult};
use crate::models::{clean_value, RawRecord, WaveObservation};

/// Timestamp layouts seen in the published dataset, tried in order.
const TIMESTAMP_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M",
];

/// Parse a site-local `DateTime` cell.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Cleaned observations restricted to the site allow-list.
///
/// Built once from the raw records and never mutated afterwards; every
/// request reads it through a shared reference. Row order follows the
/// source and is not sorted.
#[derive(Debug, Clone, Default)]
pub struct CleanedTable {
    rows: Vec<WaveObservation>,
    allowed: Vec<String>,
}

impl CleanedTable {
    pub fn rows(&self) -> &[WaveObservation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The allow-list this table was filtered against.
    pub fn allowed_sites(&self) -> &[String] {
        &self.allowed
    }

    /// Allowed sites that have at least one row, in allow-list order.
    pub fn sites(&self) -> Vec<String> {
        self.allowed
            .iter()
            .filter(|site| self.rows.iter().any(|r| &r.site == *site))
            .cloned()
            .collect()
    }

    /// Rows recorded at `site`, in table order.
    pub fn rows_for_site<'a>(&'a self, site: &'a str) -> impl Iterator<Item = &'a WaveObservation> + 'a {
        self.rows.iter().filter(move |r| r.site == site)
    }
}

/// Clean raw records and keep only allowed sites.
///
/// The missing-value sentinel becomes `None` in every numeric field. A row
/// whose timestamp cannot be parsed fails the whole load: the source layout
/// has changed and serving partial data would hide it.
pub fn load_and_clean(raw_rows: Vec<RawRecord>, allowed_sites: &[String]) -> WaveResult<CleanedTable> {
    let total = raw_rows.len();
    let mut rows = Vec::with_capacity(total);

    for (i, raw) in raw_rows.into_iter().enumerate() {
        if !allowed_sites.iter().any(|s| s == &raw.site) {
            continue;
        }

        let timestamp = parse_timestamp(&raw.date_time).ok_or_else(|| WaveError::InvalidTimestamp {
            // 1-based data row, header excluded.
            row: i + 1,
            value: raw.date_time.clone(),
        })?;

        rows.push(WaveObservation {
            site: raw.site,
            timestamp,
            significant_height: clean_value(raw.hsig),
            max_height: clean_value(raw.hmax),
            peak_period: clean_value(raw.tp),
            mean_period: clean_value(raw.tz),
            direction: clean_value(raw.direction),
        });
    }

    log::info!(
        "Cleaned table: kept {} of {} rows across {} allowed sites",
        rows.len(),
        total,
        allowed_sites.len()
    );

    Ok(CleanedTable {
        rows,
        allowed: allowed_sites.to_vec(),
    })
}
