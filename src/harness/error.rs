//! Error types for the benchmark harness.
//!
//! Only setup can fail. Accuracy mismatches and zero-length timings are data
//! and live in [`crate::harness::SizeReport`], not here.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Cannot allocate workspace for n={max_size}: {elements} f64 elements do not fit in memory")]
    Allocation {
        max_size: usize,
        elements: usize,
        #[source]
        source: Option<TryReserveError>,
    },

    #[error("Failed to read configuration file '{path}': {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration validation error for field '{field}': {message}")]
    InvalidConfig { field: String, message: String },
}

pub type BenchResult<T> = Result<T, BenchError>;
