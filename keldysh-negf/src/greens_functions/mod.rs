// Copyright 2025 the keldysh-negf developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Contour Green's functions
//!
//! A [`ContourMatrix`] stores a two-time correlator `G(t1, t2)` densely over
//! every ordered pair of contour points. The raw storage is deliberately
//! uncorrected: on the equal-time diagonal the contour-ordered correlator is
//! discontinuous where the two real-time branches meet, and the physically
//! correct value differs from the stored one by the [`ContourMatrix::jump`]
//! term. Physical reads go through [`ContourMatrix::get`]; construction and
//! storage-level algorithms use the raw accessors.

/// Extraction of the named physical components
mod components;

/// Memoisation for time-translation-invariant kernels
mod kernel;

/// Hermitian-conjugate-style transposed views
mod transpose;

pub use components::{Component, ComponentData};
pub use kernel::TimeInvariantKernel;
pub use transpose::{Transpose, TransposeMut};

use crate::error::GreensFunctionError;
use keldysh_contour::{Branch, TimeGrid, TimeGridPoint};
use ndarray::Array2;
use num_complex::Complex;
use num_traits::Zero;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A two-time Green's function stored over every ordered pair of contour
/// points
///
/// `data[[i, j]]` is the raw element for the pair of grid points with linear
/// indices `(i, j)`. The grid is held by shared reference and travels with
/// the matrix through every elementwise operation.
#[derive(Clone, Debug)]
pub struct ContourMatrix<'g, T = Complex<f64>> {
    data: Array2<T>,
    grid: &'g TimeGrid,
}

impl<'g, T> ContourMatrix<'g, T>
where
    T: Copy + Zero,
{
    /// An empty (zero-filled) Green's function over `grid`
    pub fn new(grid: &'g TimeGrid) -> Self {
        Self {
            data: Array2::zeros((grid.len(), grid.len())),
            grid,
        }
    }

    /// Wrap an externally calculated matrix over `grid`
    pub fn from_raw(grid: &'g TimeGrid, data: Array2<T>) -> Result<Self, GreensFunctionError> {
        let (rows, cols) = data.dim();
        if rows != grid.len() || cols != grid.len() {
            return Err(GreensFunctionError::DimensionMismatch {
                rows,
                cols,
                expected: grid.len(),
            });
        }
        Ok(Self { data, grid })
    }

    /// The grid whose points index this matrix
    pub fn grid(&self) -> &'g TimeGrid {
        self.grid
    }

    /// The raw dense storage
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Raw element for the pair `(t1, t2)`, never jump-corrected
    pub fn get_raw(&self, t1: &TimeGridPoint, t2: &TimeGridPoint) -> T {
        self.data[[t1.idx, t2.idx]]
    }

    /// Write the raw element for `(t1, t2)`; writes never apply the
    /// jump correction
    pub fn set(&mut self, t1: &TimeGridPoint, t2: &TimeGridPoint, value: T) {
        self.data[[t1.idx, t2.idx]] = value;
    }

    /// A new matrix over the same grid built by mapping every raw element
    pub fn map<S, F>(&self, f: F) -> ContourMatrix<'g, S>
    where
        S: Copy + Zero,
        F: Fn(&T) -> S,
    {
        ContourMatrix {
            data: self.data.map(f),
            grid: self.grid,
        }
    }
}

impl<'g, T> ContourMatrix<'g, T>
where
    T: Copy + Zero + Sub<Output = T>,
{
    /// The discontinuity of the contour-ordered correlator across the
    /// initial-time fold: `raw(t0+, t0-) - raw(t0+, t0+)`, with `t0+` the
    /// first forward point and `t0-` the last backward point.
    ///
    /// The sign and branch convention follows Stefanucci & van Leeuwen; the
    /// backward branch supplies the upper limit at the fold.
    pub fn jump(&self) -> T {
        let (fold_plus, _) = self.grid.branch_bounds(Branch::Forward);
        let (_, fold_minus) = self.grid.branch_bounds(Branch::Backward);
        self.get_raw(fold_plus, fold_minus) - self.get_raw(fold_plus, fold_plus)
    }

    /// Physical element for the pair `(t1, t2)`: the raw element, plus the
    /// jump correction when the two contour indices coincide
    pub fn get(&self, t1: &TimeGridPoint, t2: &TimeGridPoint) -> T {
        let raw = self.get_raw(t1, t2);
        if t1.idx == t2.idx {
            raw + self.jump()
        } else {
            raw
        }
    }
}

impl<'g> ContourMatrix<'g> {
    /// Evaluate `kernel` over every ordered pair of contour points
    ///
    /// With `lower` set, pairs with `t1.idx < t2.idx` are skipped and remain
    /// zero, leaving a matrix which is lower triangular in the linear contour
    /// index.
    pub fn from_kernel<F>(grid: &'g TimeGrid, mut kernel: F, lower: bool) -> Self
    where
        F: FnMut(&TimeGridPoint, &TimeGridPoint) -> Complex<f64>,
    {
        let mut matrix = Self::new(grid);
        for t1 in grid.points() {
            for t2 in grid.points() {
                if lower && t1.idx < t2.idx {
                    continue;
                }
                matrix.data[[t1.idx, t2.idx]] = kernel(t1, t2);
            }
        }
        matrix
    }

    /// As [`ContourMatrix::from_kernel`], memoising a kernel which depends on
    /// its arguments only through the time difference and the contour
    /// ordering
    ///
    /// Valid for equilibrium correlators; a kernel which sees the individual
    /// identities of both points silently collapses distinct values onto one
    /// cache entry.
    pub fn from_time_invariant_kernel<F>(grid: &'g TimeGrid, kernel: F, lower: bool) -> Self
    where
        F: FnMut(&TimeGridPoint, &TimeGridPoint) -> Complex<f64>,
    {
        let mut adapter = TimeInvariantKernel::new(grid, kernel);
        let matrix = Self::from_kernel(grid, |t1, t2| adapter.evaluate(t1, t2), lower);
        tracing::debug!(
            distinct = adapter.entries(),
            hits = adapter.hits(),
            "time-invariant kernel construction"
        );
        matrix
    }
}

/// Dense-array capability for generic numeric code over contour-indexed
/// storage
///
/// Generic dense-matrix algorithms are written against this explicit
/// interface: linear size, flat element access and similar-storage
/// construction which carries the grid of the source forward.
pub trait ContourArray<'g, T> {
    /// Number of stored elements
    fn size(&self) -> usize;
    /// Element at flat (row-major) position `index`
    fn get_linear(&self, index: usize) -> T;
    /// Overwrite the element at flat (row-major) position `index`
    fn set_linear(&mut self, index: usize, value: T);
    /// Zero-filled storage of identical shape over the same grid, with a new
    /// element type
    fn similar<S: Copy + Zero>(&self) -> ContourMatrix<'g, S>;
}

impl<'g, T> ContourArray<'g, T> for ContourMatrix<'g, T>
where
    T: Copy + Zero,
{
    fn size(&self) -> usize {
        self.data.len()
    }

    fn get_linear(&self, index: usize) -> T {
        let cols = self.data.ncols();
        self.data[[index / cols, index % cols]]
    }

    fn set_linear(&mut self, index: usize, value: T) {
        let cols = self.data.ncols();
        self.data[[index / cols, index % cols]] = value;
    }

    fn similar<S: Copy + Zero>(&self) -> ContourMatrix<'g, S> {
        ContourMatrix {
            data: Array2::zeros(self.data.dim()),
            grid: self.grid,
        }
    }
}

impl<T> Index<(usize, usize)> for ContourMatrix<'_, T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[[row, col]]
    }
}

impl<T> IndexMut<(usize, usize)> for ContourMatrix<'_, T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[[row, col]]
    }
}

// Elementwise arithmetic carries the grid of the left operand onto the
// output, so generic numeric code sees ordinary dense-array behaviour.
impl<'a, 'g, T> Add<&'a ContourMatrix<'g, T>> for &'a ContourMatrix<'g, T>
where
    T: Copy + Zero,
{
    type Output = ContourMatrix<'g, T>;

    fn add(self, rhs: &'a ContourMatrix<'g, T>) -> Self::Output {
        ContourMatrix {
            data: &self.data + &rhs.data,
            grid: self.grid,
        }
    }
}

impl<'a, 'g, T> Sub<&'a ContourMatrix<'g, T>> for &'a ContourMatrix<'g, T>
where
    T: Copy + Zero + Sub<Output = T>,
{
    type Output = ContourMatrix<'g, T>;

    fn sub(self, rhs: &'a ContourMatrix<'g, T>) -> Self::Output {
        ContourMatrix {
            data: &self.data - &rhs.data,
            grid: self.grid,
        }
    }
}

impl<'g> Mul<Complex<f64>> for &ContourMatrix<'g> {
    type Output = ContourMatrix<'g>;

    fn mul(self, rhs: Complex<f64>) -> Self::Output {
        ContourMatrix {
            data: &self.data * rhs,
            grid: self.grid,
        }
    }
}
