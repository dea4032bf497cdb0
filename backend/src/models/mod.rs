//! Typed records and bin definitions shared by ingestion, services and the
//! HTTP layer.

pub mod bins;
pub mod observation;

pub use bins::{Compass, HeightBin, HeightBins, SECTOR_WIDTH_DEG};
pub use observation::{clean_value, RawRecord, WaveObservation, MISSING_SENTINEL, REQUIRED_COLUMNS};
