//! Throughput and bandwidth accounting for one timed kernel call.

use std::time::Duration;

/// Size of one matrix/vector element in bytes.
const ELEMENT_BYTES: f64 = std::mem::size_of::<f64>() as f64;

/// Derived statistics for one problem size.
///
/// `mflops` and `bandwidth_pct` are `None` when the clock reported a zero
/// duration: the measurement is indeterminate rather than infinitely fast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub size: usize,
    pub elapsed: Duration,
    pub mflops: Option<f64>,
    pub bandwidth_pct: Option<f64>,
}

impl Measurement {
    pub fn new(size: usize, elapsed: Duration, peak_bandwidth_gbps: f64) -> Self {
        let secs = elapsed.as_secs_f64();
        let determinate = secs > 0.0;

        Self {
            size,
            elapsed,
            mflops: determinate.then(|| mflops(size, secs)),
            bandwidth_pct: determinate
                .then(|| bandwidth_utilization_pct(size, secs, peak_bandwidth_gbps)),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn is_indeterminate(&self) -> bool {
        self.mflops.is_none()
    }
}

/// Floating-point operations in one `n × n` dgemv: a multiply and an add per
/// matrix element.
pub fn flop_count(n: usize) -> f64 {
    2.0 * (n as f64) * (n as f64)
}

/// Millions of floating-point operations per second.
pub fn mflops(n: usize, elapsed_secs: f64) -> f64 {
    flop_count(n) / elapsed_secs / 1e6
}

/// Estimated bytes moved: a single length-`n` vector.
///
/// Matrix reads are deliberately left out, so this undercounts real traffic.
pub fn traffic_bytes(n: usize) -> f64 {
    n as f64 * ELEMENT_BYTES
}

/// Achieved bandwidth as a percentage of the configured peak (GB/s).
pub fn bandwidth_utilization_pct(n: usize, elapsed_secs: f64, peak_bandwidth_gbps: f64) -> f64 {
    let achieved_gbps = traffic_bytes(n) / (elapsed_secs * 1e9);
    achieved_gbps / peak_bandwidth_gbps * 100.0
}
