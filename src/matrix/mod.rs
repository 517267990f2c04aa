//! Baseline dgemv routines used to verify the candidate kernels.
//!
//! Neither of these is ever timed. `reference` goes through an external
//! BLAS-style library; `naive` is a plain triple loop kept independent of
//! every kernel in `crate::kernels` so tests don't share code with the thing
//! they check.

pub mod naive;
pub mod reference;
