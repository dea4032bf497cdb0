//! # Wave Rose
//!
//! Buoy wave dashboard backend.
//!
//! Loads a public wave-buoy CSV once at startup, cleans it into an immutable
//! table, and serves per-site aggregates for a small web dashboard: a polar
//! "wave rose" of significant height by compass direction plus line charts
//! of height, period and direction over time.
//!
//! ## Architecture
//!
//! - [`ingest`]: CSV decoding and data sources (HTTP or local file)
//! - [`models`]: typed records and bin definitions
//! - [`services`]: cleaning, binning, rose aggregation, time series, summaries
//! - [`routes`]: response types per chart/endpoint, re-exported from [`api`]
//! - [`config`]: TOML configuration with built-in defaults
//! - [`http`]: Axum server and dashboard page
//!
//! ## Data flow
//!
//! ```text
//! CSV ──► RawRecord ──► load_and_clean ──► CleanedTable (immutable)
//!                                              │
//!                      ┌───────────────────────┴──────────────┐
//!                      ▼                                      ▼
//!              rose_aggregate (binned %)           site_timeseries (sorted)
//! ```

pub mod api;
pub mod checksum;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{WaveError, WaveResult};
