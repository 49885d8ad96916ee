// Copyright 2025 the keldysh-negf developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Keldysh-negf is a two-time contour Green's function core for
//! nonequilibrium quantum many-body simulations
//!
//! # Overview
//! A contour Green's function `G(t1, t2)` is a complex matrix indexed by
//! pairs of points on the Kadanoff-Baym contour: a forward real-time branch,
//! a backward real-time branch and an imaginary-time branch. The contour
//! discretisation itself is supplied by the `keldysh-contour` crate; this
//! crate owns the indexing algebra over the folded representation, the
//! equal-time discontinuity correction, the extraction of the physical
//! components (greater, lesser, Matsubara, retarded) and the observables
//! derived from them: the time-dependent occupation, the equilibrium
//! spectral function and the auxiliary current spectrum.
//!
//! The stored matrix element and the physically correct value differ on the
//! equal-time diagonal by a jump determined by the branch boundaries of the
//! contour, see [`greens_functions::ContourMatrix::jump`]. Raw storage and
//! jump-corrected access are kept strictly apart throughout.

#![warn(missing_docs)]
#![allow(dead_code)]

/// Calculation configuration read from disk
pub mod configuration;

/// Error handling
mod error;

/// The contour-indexed Green's function container, its views and components
pub mod greens_functions;

/// Computes quantities of interest from Greens functions, such as the
/// occupation number and spectral functions
pub mod postprocessor;

pub use error::GreensFunctionError;
pub use greens_functions::{
    Component, ComponentData, ContourArray, ContourMatrix, TimeInvariantKernel, Transpose,
    TransposeMut,
};
