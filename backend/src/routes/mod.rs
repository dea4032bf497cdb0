//! Response types, one module per chart or endpoint.

pub mod dashboard;
pub mod rose;
pub mod sites;
pub mod summary;
pub mod timeseries;
