use std::collections::BTreeMap;

use crate::api::{RoseData, RoseRow};
use crate::models::{Compass, HeightBins};

use super::binning::bin_row;
use super::cleaning::CleanedTable;

/// Frequency table of (height bin, direction) pairs for one site.
///
/// Percentages are relative to the site's observations that received a bin
/// pair, so the emitted rows sum to 100. Pairs with no observations are not
/// emitted. Unknown sites and sites with nothing binnable yield an empty
/// vector. Rows are ordered by height bin, then clockwise from north.
pub fn rose_aggregate(table: &CleanedTable, site: &str, bins: &HeightBins) -> Vec<RoseRow> {
    let mut counts: BTreeMap<(usize, Compass), usize> = BTreeMap::new();
    for row in table.rows_for_site(site) {
        if let Some((height, direction)) = bin_row(row, bins) {
            *counts.entry((height.index, direction)).or_insert(0) += 1;
        }
    }

    let total: usize = counts.values().sum();
    if total == 0 {
        return vec![];
    }

    counts
        .into_iter()
        .filter_map(|((index, direction), count)| {
            let bin = bins.bin(index)?;
            Some(RoseRow {
                height_bin: bin.label(),
                height_lower: bin.lower,
                height_upper: bin.upper,
                direction,
                count,
                percentage: 100.0 * count as f64 / total as f64,
            })
        })
        .collect()
}

/// [`rose_aggregate`] with the site name and binned total attached.
pub fn rose_data(table: &CleanedTable, site: &str, bins: &HeightBins) -> RoseData {
    let rows = rose_aggregate(table, site, bins);
    let total_count = rows.iter().map(|r| r.count).sum();
    RoseData {
        site: site.to_string(),
        rows,
        total_count,
    }
}
