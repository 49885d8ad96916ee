//! Extraction of the named physical components
//!
//! The contour-indexed storage folds every branch pairing into one matrix;
//! observables work on the conventional components instead. Each component
//! is a branch-pair restriction lifted into an ordinary dense array, ordered
//! by real time on any backward-branch axis.

use super::ContourMatrix;
use crate::error::GreensFunctionError;
use keldysh_contour::{Branch, TimeGrid, TimeGridPoint};
use ndarray::{Array1, Array2};
use num_complex::Complex;
use std::str::FromStr;

/// The physical components of a contour-ordered two-time function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// `G^>`: the backward-forward branch pairing
    Greater,
    /// `G^<`: the forward-backward branch pairing
    Lesser,
    /// `G^M`: the first column of the imaginary-imaginary pairing
    Matsubara,
    /// `G^R = θ(t - t') (G^> - G^<)`
    Retarded,
}

impl FromStr for Component {
    type Err = GreensFunctionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "greater" => Ok(Self::Greater),
            "lesser" => Ok(Self::Lesser),
            "matsubara" => Ok(Self::Matsubara),
            "retarded" => Ok(Self::Retarded),
            other => Err(GreensFunctionError::UnrecognisedComponent(
                other.to_string(),
            )),
        }
    }
}

/// A component lifted out of contour-indexed storage into an ordinary dense
/// array
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentData {
    /// Two-time components
    Matrix(Array2<Complex<f64>>),
    /// Single-time components
    Vector(Array1<Complex<f64>>),
}

fn real_time_ordered(grid: &TimeGrid, branch: Branch) -> Vec<TimeGridPoint> {
    match branch {
        Branch::Backward => grid.reversed_branch_points(branch).copied().collect(),
        _ => grid.branch_points(branch).to_vec(),
    }
}

impl<'g> ContourMatrix<'g> {
    /// Physical elements for every pairing of points drawn from two branches
    ///
    /// A backward-branch axis is traversed in reversed contour order, so the
    /// returned matrix is ordered by real time on that axis.
    ///
    /// # Panics
    /// Panics when either branch carries no points on this contour.
    pub fn branch_pair(&self, rows: Branch, cols: Branch) -> Array2<Complex<f64>> {
        assert!(
            self.grid().branch_len(rows) != 0,
            "the contour carries no {:?} branch",
            rows
        );
        assert!(
            self.grid().branch_len(cols) != 0,
            "the contour carries no {:?} branch",
            cols
        );
        let row_points = real_time_ordered(self.grid(), rows);
        let col_points = real_time_ordered(self.grid(), cols);
        let mut output = Array2::zeros((row_points.len(), col_points.len()));
        for (i, t1) in row_points.iter().enumerate() {
            for (j, t2) in col_points.iter().enumerate() {
                output[[i, j]] = self.get(t1, t2);
            }
        }
        output
    }

    /// `G^>(t, t')`
    pub fn greater(&self) -> Array2<Complex<f64>> {
        self.branch_pair(Branch::Backward, Branch::Forward)
    }

    /// `G^<(t, t')`
    pub fn lesser(&self) -> Array2<Complex<f64>> {
        self.branch_pair(Branch::Forward, Branch::Backward)
    }

    /// `G^M(τ)`: the first column of the imaginary-imaginary pairing
    pub fn matsubara(&self) -> Array1<Complex<f64>> {
        self.branch_pair(Branch::Imaginary, Branch::Imaginary)
            .column(0)
            .to_owned()
    }

    /// `G^R(t, t') = θ(t - t') (G^> - G^<)`: zero strictly above the
    /// real-time diagonal
    pub fn retarded(&self) -> Array2<Complex<f64>> {
        let mut retarded = self.greater() - self.lesser();
        for ((i, j), element) in retarded.indexed_iter_mut() {
            if i < j {
                *element = Complex::new(0_f64, 0_f64);
            }
        }
        retarded
    }

    /// Total mapping from component tag to extracted data
    pub fn component(&self, component: Component) -> ComponentData {
        match component {
            Component::Greater => ComponentData::Matrix(self.greater()),
            Component::Lesser => ComponentData::Matrix(self.lesser()),
            Component::Matsubara => ComponentData::Vector(self.matsubara()),
            Component::Retarded => ComponentData::Matrix(self.retarded()),
        }
    }

    /// Component lookup by name, for callers driven by external input
    pub fn named_component(&self, name: &str) -> Result<ComponentData, GreensFunctionError> {
        Ok(self.component(name.parse()?))
    }
}
