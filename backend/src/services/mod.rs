//! Wave data aggregation.
//!
//! Pure functions over the immutable [`CleanedTable`]: nothing here performs
//! I/O or keeps state between calls, so every site selection is a full
//! recompute.

pub mod binning;
pub mod cleaning;
pub mod dashboard;
pub mod rose;
pub mod summary;
pub mod timeseries;

#[cfg(test)]
mod dashboard_tests;

pub use binning::{bin_direction, bin_for_rose, bin_height, bin_row};
pub use cleaning::{load_and_clean, parse_timestamp, CleanedTable};
pub use dashboard::build_dashboard;
pub use rose::{rose_aggregate, rose_data};
pub use summary::{compute_stats, site_summary};
pub use timeseries::{site_timeseries, timeseries_data};
