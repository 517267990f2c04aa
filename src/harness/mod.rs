//! Benchmark harness: everything around the kernel call.
//!
//! The driver walks the size sweep. For each size it fills `A`, `x`, `y`
//! with uniform random values, snapshots them, times exactly one call to the
//! candidate kernel, recomputes the result with the reference routine on the
//! snapshots, and compares the two `y` vectors.
//!
//! - `config`: size sweep, tolerance, peak bandwidth (JSON with defaults)
//! - `workspace`: single allocation split into the six working arrays
//! - `fill`: uniform `[-1, 1]` input generation
//! - `accuracy`: absolute-tolerance comparison
//! - `metrics`: MFLOP/s and bandwidth utilization
//! - `driver`: the sweep itself

pub mod accuracy;
pub mod config;
pub mod driver;
pub mod error;
pub mod fill;
pub mod metrics;
pub mod workspace;

pub use accuracy::{Mismatch, check_accuracy, first_mismatch};
pub use config::{BenchConfig, ConfigLoader};
pub use driver::{BenchmarkDriver, SizeReport};
pub use error::{BenchError, BenchResult};
pub use fill::RandomFiller;
pub use metrics::Measurement;
pub use workspace::Workspace;
