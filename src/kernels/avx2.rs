//! AVX2/FMA dgemv with horizontal reduction.

use super::unrolled::dot_unrolled;
use super::{DgemvKernel, assert_dims};

/// Vectorized dgemv: 4 f64 lanes per instruction.
///
/// For each row, columns are consumed four at a time with
/// `acc = fma(A[i, j..j+4], x[j..j+4], acc)`. The four lanes are summed once
/// per row, then any leftover columns (`n % 4`) are added by a scalar tail.
///
/// Picks the AVX2 path at runtime and falls back to the portable unrolled
/// kernel when the CPU lacks AVX2 or FMA (or on non-x86_64 targets).
#[derive(Debug, Default, Clone, Copy)]
pub struct Avx2Kernel;

impl Avx2Kernel {
    /// True if this CPU will run the intrinsic path.
    pub fn is_available() -> bool {
        #[cfg(target_arch = "x86_64")]
        {
            is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            false
        }
    }
}

impl DgemvKernel for Avx2Kernel {
    fn name(&self) -> &'static str {
        "avx2"
    }

    fn description(&self) -> &'static str {
        "Vectorized implementation of matrix-vector multiply."
    }

    fn dgemv(&self, n: usize, a: &[f64], x: &[f64], y: &mut [f64]) {
        assert_dims(n, a, x, y);
        if n == 0 {
            return;
        }

        #[cfg(target_arch = "x86_64")]
        {
            if Self::is_available() {
                // SAFETY: features checked above, slice lengths checked by assert_dims.
                unsafe { dgemv_avx2(n, a, x, y) };
                return;
            }
        }

        for (row, yi) in a.chunks_exact(n).zip(y.iter_mut()) {
            *yi += dot_unrolled(row, x);
        }
    }
}

/// Computes `y += A * x` using 256-bit FMA.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 and FMA
/// - `a.len() == n * n`, `x.len() == n`, `y.len() == n`
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn dgemv_avx2(n: usize, a: &[f64], x: &[f64], y: &mut [f64]) {
    use std::arch::x86_64::*;

    let n_main = (n / 4) * 4;
    let xp = x.as_ptr();

    for i in 0..n {
        let row = a.as_ptr().add(i * n);
        let mut acc = _mm256_setzero_pd();

        for j in (0..n_main).step_by(4) {
            let a_vec = _mm256_loadu_pd(row.add(j));
            let x_vec = _mm256_loadu_pd(xp.add(j));
            acc = _mm256_fmadd_pd(a_vec, x_vec, acc);
        }

        // Fold 4 lanes: (lo + hi) then the two remaining halves
        let lo = _mm256_castpd256_pd128(acc);
        let hi = _mm256_extractf128_pd::<1>(acc);
        let pair = _mm_add_pd(lo, hi);
        let swapped = _mm_unpackhi_pd(pair, pair);
        let mut sum = _mm_cvtsd_f64(_mm_add_sd(pair, swapped));

        for j in n_main..n {
            sum += *row.add(j) * *xp.add(j);
        }

        y[i] += sum;
    }
}

#[cfg(all(test, target_arch = "x86_64"))]
mod tests {
    use super::*;

    #[test]
    fn test_avx2_remainder_columns() {
        if !Avx2Kernel::is_available() {
            println!("Skipping - AVX2 not available");
            return;
        }

        // n = 6: one full 4-lane group plus two tail columns per row
        let n = 6;
        let a: Vec<f64> = (0..n * n).map(|i| (i % 7) as f64).collect();
        let x: Vec<f64> = (0..n).map(|i| (i + 1) as f64).collect();
        let mut y = vec![0.5; n];

        unsafe { dgemv_avx2(n, &a, &x, &mut y) };

        for i in 0..n {
            let mut expected = 0.5;
            for j in 0..n {
                expected += a[i * n + j] * x[j];
            }
            assert!(
                (y[i] - expected).abs() < 1e-10,
                "Mismatch at {}: got {}, expected {}",
                i,
                y[i],
                expected
            );
        }
    }
}
