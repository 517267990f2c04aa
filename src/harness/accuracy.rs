//! Element-wise comparison against the reference result.

/// First element where two result vectors disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub expected: f64,
    pub actual: f64,
}

impl Mismatch {
    pub fn diff(&self) -> f64 {
        (self.expected - self.actual).abs()
    }
}

/// Returns the first index where `|expected - actual| > tolerance`.
///
/// The tolerance is absolute: a difference exactly equal to it passes.
/// NaN on either side never compares within tolerance, so it is reported.
/// If the lengths differ, the first index past the shorter slice is reported
/// with NaN standing in for the missing value.
pub fn first_mismatch(expected: &[f64], actual: &[f64], tolerance: f64) -> Option<Mismatch> {
    for (index, (&e, &a)) in expected.iter().zip(actual).enumerate() {
        let within = (e - a).abs() <= tolerance;
        if !within {
            return Some(Mismatch {
                index,
                expected: e,
                actual: a,
            });
        }
    }

    if expected.len() != actual.len() {
        let index = expected.len().min(actual.len());
        return Some(Mismatch {
            index,
            expected: expected.get(index).copied().unwrap_or(f64::NAN),
            actual: actual.get(index).copied().unwrap_or(f64::NAN),
        });
    }

    None
}

/// True when every element of `actual` is within `tolerance` of `expected`.
pub fn check_accuracy(expected: &[f64], actual: &[f64], tolerance: f64) -> bool {
    first_mismatch(expected, actual, tolerance).is_none()
}
