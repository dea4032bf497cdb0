//! Ingestion boundary: the only code that touches the external CSV layout.

pub mod csv_reader;
pub mod source;

pub use csv_reader::{parse_csv, parse_csv_bytes};
pub use source::{source_for, FileSource, HttpSource, LoadedDataset, WaveSource};
