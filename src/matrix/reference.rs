//! Trusted reference dgemv backed by `matrixmultiply`.

/// Reference matrix-vector multiply-accumulate: `y = 1.0 * A * x + 1.0 * y`.
///
/// Runs the product as an `n × n` by `n × 1` GEMM through
/// `matrixmultiply::dgemm` with `beta = 1`, so `y` accumulates exactly like
/// a BLAS `dgemv` with unit strides. `A` is row-major.
///
/// # Panics
///
/// Panics if the slice sizes don't match `n`.
pub fn reference_dgemv(n: usize, a: &[f64], x: &[f64], y: &mut [f64]) {
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(x.len(), n, "x: expected {} elements", n);
    assert_eq!(y.len(), n, "y: expected {} elements", n);

    if n == 0 {
        return;
    }

    let (alpha, beta) = (1.0, 1.0);
    let lda = n as isize;

    // SAFETY: A is n×n with row stride n, x is n×1 and y is n×1 with unit
    // stride; lengths were checked above and y doesn't alias A or x.
    unsafe {
        matrixmultiply::dgemm(
            // m, k, n
            n,
            n,
            1,
            alpha,
            // A: row-major n×n
            a.as_ptr(),
            lda,
            1,
            // x as a column vector
            x.as_ptr(),
            1,
            1,
            beta,
            // y as a column vector
            y.as_mut_ptr(),
            1,
            1,
        );
    }
}
