//! Hermitian-conjugate-style transposed access without copying
//!
//! Reads at `(t1, t2)` resolve to the raw element at `(t2, t1)`, with the
//! equal-time jump applied on the diagonal. Writes store to the raw element
//! at `(t2, t1)` unconditionally: the correction layer lives entirely on the
//! read side, so writes populate storage which corrected reads interpret.

use super::ContourMatrix;
use keldysh_contour::TimeGridPoint;
use num_complex::Complex;
use num_traits::Zero;
use std::ops::Sub;

/// Read-only transposed view of a [`ContourMatrix`]
pub struct Transpose<'m, 'g, T = Complex<f64>> {
    matrix: &'m ContourMatrix<'g, T>,
}

impl<T> Transpose<'_, '_, T>
where
    T: Copy + Zero + Sub<Output = T>,
{
    /// Transposed physical element: raw `(t2, t1)`, jump-corrected on the
    /// diagonal
    pub fn get(&self, t1: &TimeGridPoint, t2: &TimeGridPoint) -> T {
        let raw = self.matrix.get_raw(t2, t1);
        if t1.idx == t2.idx {
            raw + self.matrix.jump()
        } else {
            raw
        }
    }
}

/// Read/write transposed view of a [`ContourMatrix`]
pub struct TransposeMut<'m, 'g, T = Complex<f64>> {
    matrix: &'m mut ContourMatrix<'g, T>,
}

impl<T> TransposeMut<'_, '_, T>
where
    T: Copy + Zero + Sub<Output = T>,
{
    /// Transposed physical element: raw `(t2, t1)`, jump-corrected on the
    /// diagonal
    pub fn get(&self, t1: &TimeGridPoint, t2: &TimeGridPoint) -> T {
        let raw = self.matrix.get_raw(t2, t1);
        if t1.idx == t2.idx {
            raw + self.matrix.jump()
        } else {
            raw
        }
    }

    /// Store `value` at the transposed position `(t2, t1)`; diagonal writes
    /// are not auto-corrected
    pub fn set(&mut self, t1: &TimeGridPoint, t2: &TimeGridPoint, value: T) {
        self.matrix.set(t2, t1, value);
    }
}

impl<'g, T> ContourMatrix<'g, T>
where
    T: Copy + Zero,
{
    /// A read-only transposed view of this matrix
    pub fn transpose(&self) -> Transpose<'_, 'g, T> {
        Transpose { matrix: self }
    }

    /// A read/write transposed view of this matrix
    pub fn transpose_mut(&mut self) -> TransposeMut<'_, 'g, T> {
        TransposeMut { matrix: self }
    }
}
