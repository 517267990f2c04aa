//! One preallocated buffer carved into the six arrays a sweep needs.

use super::error::{BenchError, BenchResult};
use log::debug;

/// Backing storage for `A`, `A_copy`, `x`, `x_copy`, `y`, `y_copy`.
///
/// Sized once for the largest problem in the sweep: two `max × max` matrices
/// followed by four length-`max` vectors. Smaller problems use a prefix of
/// each region, so nothing is reallocated between sizes.
#[derive(Debug)]
pub struct Workspace {
    buf: Vec<f64>,
    max_size: usize,
}

/// Disjoint mutable views of a [`Workspace`] for one problem size `n`.
#[derive(Debug)]
pub struct Views<'a> {
    pub a: &'a mut [f64],
    pub a_copy: &'a mut [f64],
    pub x: &'a mut [f64],
    pub x_copy: &'a mut [f64],
    pub y: &'a mut [f64],
    pub y_copy: &'a mut [f64],
}

impl Workspace {
    /// Number of f64 elements needed for problems up to `max_size`.
    pub fn elements_for(max_size: usize) -> Option<usize> {
        let matrix = max_size.checked_mul(max_size)?;
        let matrices = matrix.checked_mul(2)?;
        let vectors = max_size.checked_mul(4)?;
        matrices.checked_add(vectors)
    }

    /// Allocates the whole region up front.
    ///
    /// Fails with [`BenchError::Allocation`] instead of aborting when the
    /// request overflows or the allocator refuses it.
    pub fn new(max_size: usize) -> BenchResult<Self> {
        let elements = Self::elements_for(max_size).ok_or(BenchError::Allocation {
            max_size,
            elements: usize::MAX,
            source: None,
        })?;

        let mut buf = Vec::new();
        buf.try_reserve_exact(elements)
            .map_err(|e| BenchError::Allocation {
                max_size,
                elements,
                source: Some(e),
            })?;
        buf.resize(elements, 0.0);

        debug!(
            "Workspace: {} f64 elements ({:.1} MiB) for max n={}",
            elements,
            (elements * std::mem::size_of::<f64>()) as f64 / (1024.0 * 1024.0),
            max_size
        );

        Ok(Self { buf, max_size })
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Total element count of the backing buffer.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Splits the buffer into the six arrays for a problem of order `n`.
    ///
    /// Region offsets depend only on `max_size`, so each array stays at the
    /// same address for every `n` in the sweep.
    ///
    /// # Panics
    ///
    /// Panics if `n > max_size`.
    pub fn views(&mut self, n: usize) -> Views<'_> {
        assert!(
            n <= self.max_size,
            "problem size {} exceeds workspace capacity {}",
            n,
            self.max_size
        );

        let mat = self.max_size * self.max_size;
        let vec = self.max_size;

        let (a, rest) = self.buf.split_at_mut(mat);
        let (a_copy, rest) = rest.split_at_mut(mat);
        let (x, rest) = rest.split_at_mut(vec);
        let (x_copy, rest) = rest.split_at_mut(vec);
        let (y, y_copy) = rest.split_at_mut(vec);

        Views {
            a: &mut a[..n * n],
            a_copy: &mut a_copy[..n * n],
            x: &mut x[..n],
            x_copy: &mut x_copy[..n],
            y: &mut y[..n],
            y_copy: &mut y_copy[..n],
        }
    }
}

impl Views<'_> {
    /// Copies `A`, `x`, `y` into their snapshot regions bit for bit.
    pub fn snapshot(&mut self) {
        self.a_copy.copy_from_slice(self.a);
        self.x_copy.copy_from_slice(self.x);
        self.y_copy.copy_from_slice(self.y);
    }
}
