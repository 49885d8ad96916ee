#![allow(dead_code)]

//! Discretisation of the three-branch Kadanoff-Baym contour.
//!
//! The contour runs forward along the real-time axis from `0` to `t_max`,
//! back again to `0`, and finally down the imaginary axis to `-iβ`. This
//! crate supplies the ordered point collection, the Heaviside contour
//! ordering predicate and trapezoidal quadrature along the contour; the
//! Green's function algebra built on top lives in the `keldysh-negf` crate.

mod branch;
mod grid;
mod quadrature;

pub use branch::*;
pub use grid::*;
pub use quadrature::*;
