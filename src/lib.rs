//! Matrix-vector multiply-accumulate kernels and the harness that times them.
//!
//! Every kernel here computes `y += A * x` for a square, row-major `A`
//! (a BLAS `dgemv` with `alpha = beta = 1`). The harness runs one kernel over
//! a sweep of sizes, times it, and checks its output against a trusted
//! reference computed from the same inputs.
//!
//! ## Usage
//!
//! ```
//! use dgemv::dgemv;
//!
//! let n = 256;
//! let a = vec![1.0f64; n * n];
//! let x = vec![1.0f64; n];
//! let mut y = vec![0.0f64; n];
//!
//! dgemv(n, &a, &x, &mut y);
//! assert_eq!(y[0], 256.0);
//! ```
//!
//! Running a small sweep:
//!
//! ```
//! use dgemv::harness::{BenchConfig, BenchmarkDriver};
//! use dgemv::kernels::ScalarKernel;
//!
//! let config = BenchConfig { sizes: vec![16, 16, 33], ..BenchConfig::default() };
//! let mut driver = BenchmarkDriver::new(ScalarKernel, config).unwrap();
//!
//! for report in driver.run() {
//!     assert!(report.passed());
//! }
//! ```
//!
//! ## What's inside
//!
//! - Scalar, 4-way unrolled, and AVX2/FMA kernels
//! - `matrixmultiply`-backed reference plus a naive triple loop for tests
//! - Single-allocation workspace, seeded or entropy-backed input generation
//! - MFLOP/s and bandwidth accounting with zero-time guarding

pub mod harness;
pub mod kernels;
pub mod matrix;

pub use kernels::{Avx2Kernel, DgemvKernel, ScalarKernel, SelectedKernel, UnrolledKernel};
pub use matrix::naive::dgemv_naive;
pub use matrix::reference::reference_dgemv;

/// Matrix-vector multiply-accumulate: y += A * x
///
/// Picks the fastest available kernel for your CPU (AVX2 > unrolled).
/// `A` is n×n row-major, `x` and `y` have n elements.
///
/// # Panics
///
/// Panics if the slice sizes don't match n.
pub fn dgemv(n: usize, a: &[f64], x: &[f64], y: &mut [f64]) {
    Avx2Kernel.dgemv(n, a, x, y);
}
