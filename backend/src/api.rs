//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types served over HTTP.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::dashboard::LineSeries;
pub use crate::routes::dashboard::SeriesPoint;
pub use crate::routes::dashboard::SITE_NOT_FOUND_MESSAGE;
pub use crate::routes::rose::RoseData;
pub use crate::routes::rose::RoseRow;
pub use crate::routes::sites::SiteList;
pub use crate::routes::summary::SeriesStats;
pub use crate::routes::summary::SiteSummary;
pub use crate::routes::timeseries::TimeSeriesData;

pub use crate::models::{Compass, HeightBin, HeightBins, WaveObservation};
