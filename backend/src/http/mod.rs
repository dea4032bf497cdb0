//! HTTP server module for the dashboard backend.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - dashboard page, JSON chart endpoints                   │
//! │  - CORS, compression, tracing, error bodies               │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │  &CleanedTable (shared, read-only)
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - rose aggregation, time series, summaries               │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
