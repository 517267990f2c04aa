/// Naive matrix-vector multiply-accumulate: `y += A * x`.
///
/// The textbook loop over every `(i, j)` pair, one multiply-add at a time
/// straight into `y[i]`. Slow, obviously correct, and shares no code with
/// the kernels it validates.
///
/// Use this as a correctness baseline, not for performance.
///
/// # Arguments
///
/// * `n` - Order of the square matrix
/// * `a` - Matrix A (n × n), row-major
/// * `x` - Vector x (n)
/// * `y` - Vector y (n), accumulated into (y += A * x)
pub fn dgemv_naive(n: usize, a: &[f64], x: &[f64], y: &mut [f64]) {
    for i in 0..n {
        for j in 0..n {
            y[i] += a[i * n + j] * x[j];
        }
    }
}
