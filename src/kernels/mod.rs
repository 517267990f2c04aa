//! Candidate dgemv kernels.
//!
//! Every kernel computes `y += A * x` for a square, row-major `A` and is
//! interchangeable behind [`DgemvKernel`]. They differ only in how each row's
//! dot product is accumulated:
//!
//! - `scalar`: one running sum per row, the plain textbook loop
//! - `unrolled`: four independent accumulators, portable, auto-vectorizes well
//! - `avx2`: 4-wide AVX2/FMA accumulation with a horizontal reduction
//!
//! The benchmark binary times exactly one of them, picked at build time
//! through [`SelectedKernel`].

pub mod avx2;
pub mod scalar;
pub mod unrolled;

pub use avx2::Avx2Kernel;
pub use scalar::ScalarKernel;
pub use unrolled::UnrolledKernel;

/// A matrix-vector multiply-accumulate routine: `y += A * x`.
///
/// `A` is `n × n`, row-major. `x` and `y` hold `n` elements. Implementations
/// must leave `A` and `x` untouched (the signature enforces it) and must cover
/// every row and column, including the tail when `n` is not a multiple of the
/// kernel's internal width. `n == 0` is a no-op.
///
/// # Panics
///
/// Implementations panic if the slice lengths don't match `n`.
pub trait DgemvKernel {
    /// Short name used in benchmark output.
    fn name(&self) -> &'static str;

    /// One-line description printed before a sweep.
    fn description(&self) -> &'static str;

    fn dgemv(&self, n: usize, a: &[f64], x: &[f64], y: &mut [f64]);
}

/// Kernel timed by the benchmark binary.
#[cfg(feature = "kernel-scalar")]
pub type SelectedKernel = ScalarKernel;

/// Kernel timed by the benchmark binary.
#[cfg(all(feature = "kernel-unrolled", not(feature = "kernel-scalar")))]
pub type SelectedKernel = UnrolledKernel;

/// Kernel timed by the benchmark binary.
#[cfg(not(any(feature = "kernel-scalar", feature = "kernel-unrolled")))]
pub type SelectedKernel = Avx2Kernel;

pub(crate) fn assert_dims(n: usize, a: &[f64], x: &[f64], y: &[f64]) {
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(x.len(), n, "x: expected {} elements", n);
    assert_eq!(y.len(), n, "y: expected {} elements", n);
}
