//! Scalar dgemv: one running sum per row.

use super::{DgemvKernel, assert_dims};

/// Basic row-by-row dgemv.
///
/// Each row of `A` is walked left to right and dotted with `x` into a single
/// accumulator, which is then added to `y[i]`. Row-major storage makes the
/// inner loop a unit-stride read of both `A` and `x`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScalarKernel;

impl DgemvKernel for ScalarKernel {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn description(&self) -> &'static str {
        "Basic implementation of matrix-vector multiply."
    }

    fn dgemv(&self, n: usize, a: &[f64], x: &[f64], y: &mut [f64]) {
        assert_dims(n, a, x, y);

        for (row, yi) in a.chunks_exact(n.max(1)).zip(y.iter_mut()) {
            let mut sum = 0.0;
            for j in 0..n {
                sum += row[j] * x[j];
            }
            *yi += sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_2x2() {
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let x = vec![5.0, 6.0];
        let mut y = vec![1.0, 1.0];

        ScalarKernel.dgemv(2, &a, &x, &mut y);

        assert_eq!(y, vec![18.0, 40.0]);
    }

    #[test]
    fn test_scalar_empty() {
        let mut y: Vec<f64> = Vec::new();
        ScalarKernel.dgemv(0, &[], &[], &mut y);
        assert!(y.is_empty());
    }
}
