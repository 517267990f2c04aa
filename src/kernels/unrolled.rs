//! Portable 4-way unrolled dgemv.

use super::{DgemvKernel, assert_dims};

/// Number of independent accumulators per row.
pub const WIDTH: usize = 4;

/// Row dot products split across four independent partial sums.
///
/// Breaking the dependency chain on a single accumulator lets the compiler
/// keep four additions in flight (and usually emit packed SIMD for them).
/// Columns past the last full group of four are folded in by a scalar tail.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnrolledKernel;

impl DgemvKernel for UnrolledKernel {
    fn name(&self) -> &'static str {
        "unrolled"
    }

    fn description(&self) -> &'static str {
        "Unrolled implementation of matrix-vector multiply (4 partial sums per row)."
    }

    fn dgemv(&self, n: usize, a: &[f64], x: &[f64], y: &mut [f64]) {
        assert_dims(n, a, x, y);
        if n == 0 {
            return;
        }

        for (row, yi) in a.chunks_exact(n).zip(y.iter_mut()) {
            *yi += dot_unrolled(row, x);
        }
    }
}

/// Dot product of two equal-length slices with four partial sums.
#[inline]
pub(crate) fn dot_unrolled(row: &[f64], x: &[f64]) -> f64 {
    let mut acc = [0.0f64; WIDTH];

    let row_chunks = row.chunks_exact(WIDTH);
    let x_chunks = x.chunks_exact(WIDTH);
    let row_tail = row_chunks.remainder();
    let x_tail = x_chunks.remainder();

    for (r, v) in row_chunks.zip(x_chunks) {
        acc[0] += r[0] * v[0];
        acc[1] += r[1] * v[1];
        acc[2] += r[2] * v[2];
        acc[3] += r[3] * v[3];
    }

    let mut sum = (acc[0] + acc[1]) + (acc[2] + acc[3]);
    for (r, v) in row_tail.iter().zip(x_tail) {
        sum += r * v;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_unrolled_with_tail() {
        // 7 = one full group of four plus a tail of three
        let row: Vec<f64> = (1..=7).map(|i| i as f64).collect();
        let x = vec![1.0; 7];
        assert_eq!(dot_unrolled(&row, &x), 28.0);
    }

    #[test]
    fn test_unrolled_shorter_than_width() {
        let a = vec![2.0, 0.0, 0.0, 3.0];
        let x = vec![1.0, 1.0];
        let mut y = vec![0.0, 0.0];

        UnrolledKernel.dgemv(2, &a, &x, &mut y);

        assert_eq!(y, vec![2.0, 3.0]);
    }
}
