// Copyright 2025 the keldysh-negf developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Postprocessor
//!
//! Computes physical observables from a contour Green's function: the
//! occupation number along the real-time axis, the equilibrium spectral
//! function and the auxiliary current spectrum. All quadrature is delegated
//! to `keldysh-contour`; this module only supplies integrands.

use crate::greens_functions::ContourMatrix;
use itertools::izip;
use keldysh_contour::{integrate, trapezoid, Branch, TimeGrid, TimeGridPoint};
use ndarray::{Array1, Array2};
use num_complex::Complex;
use std::f64::consts::PI;

impl ContourMatrix<'_> {
    /// The occupation number at each real time: `-i diag(G^<)`
    pub fn density(&self) -> Array1<Complex<f64>> {
        let lesser = self.lesser();
        lesser.diag().mapv(|value| Complex::new(0_f64, -1_f64) * value)
    }

    /// The equilibrium spectral function at each requested frequency
    ///
    /// `A(ω) = Im[-1/π ∫ dt G^R(t, 0) e^{iωt}]`, a trapezoidal transform of
    /// the first retarded column over the actual (possibly non-uniform)
    /// real-time grid.
    #[tracing::instrument(name = "Equilibrium spectral function", skip_all)]
    pub fn equilibrium_spectrum(&self, frequencies: &[f64]) -> Array1<f64> {
        let retarded = self.retarded();
        let response = retarded.column(0);
        let times = self.grid().real_times();
        assert_eq!(
            response.len(),
            times.len(),
            "the retarded component rows must match the real-time axis"
        );

        frequencies
            .iter()
            .map(|&omega| {
                let samples: Vec<Complex<f64>> = izip!(times.iter(), response.iter())
                    .map(|(&time, &value)| value * Complex::new(0_f64, omega * time).exp())
                    .collect();
                (trapezoid(&times, &samples) * (-1_f64 / PI)).im
            })
            .collect()
    }

    /// The auxiliary current spectrum at a single frequency
    ///
    /// For every matched pair `(t+, t-)`, with `t+` running along the forward
    /// branch and `t-` along the reversed backward branch so the pairing is
    /// symmetric about the fold, two contour integrals from `t+` to `t-` are
    /// combined into `(I_e - I_f) / 2π`. The result is one complex value per
    /// pair, indexed along the real-time axis.
    #[tracing::instrument(name = "Auxiliary current spectrum", skip_all)]
    pub fn aux_spectrum(&self, omega: f64) -> Array1<Complex<f64>> {
        let grid = self.grid();
        let forward = grid.branch_points(Branch::Forward);
        let backward: Vec<TimeGridPoint> = grid
            .reversed_branch_points(Branch::Backward)
            .copied()
            .collect();

        izip!(forward, &backward)
            .map(|(t_plus, t_minus)| {
                let emission = 2_f64
                    * integrate(grid, t_plus, t_minus, |t| {
                        step_kernel(grid, omega, t_plus, t, 0_f64) * self.get(t, t_minus)
                    });
                let absorption = -2_f64
                    * integrate(grid, t_plus, t_minus, |t| {
                        self.get(t_plus, t) * step_kernel(grid, omega, t, t_minus, 1_f64)
                    });
                (emission - absorption) / (2_f64 * PI)
            })
            .collect()
    }

    /// The auxiliary current spectrum at each requested frequency, one row
    /// per frequency
    pub fn aux_spectrum_multi(&self, frequencies: &[f64]) -> Array2<Complex<f64>> {
        let pairs = self
            .grid()
            .branch_len(Branch::Forward)
            .min(self.grid().branch_len(Branch::Backward));
        let mut output = Array2::zeros((frequencies.len(), pairs));
        for (row, &omega) in frequencies.iter().enumerate() {
            output.row_mut(row).assign(&self.aux_spectrum(omega));
        }
        output
    }
}

/// `-i (θ(a, b) - offset) e^{-iω(a.val - b.val)}`: the step-function kernel
/// entering both auxiliary-spectrum integrands
fn step_kernel(
    grid: &TimeGrid,
    omega: f64,
    a: &TimeGridPoint,
    b: &TimeGridPoint,
    offset: f64,
) -> Complex<f64> {
    let step = if grid.theta(a, b) { 1_f64 } else { 0_f64 };
    Complex::new(0_f64, -(step - offset)) * (Complex::new(0_f64, -omega) * (a.val - b.val)).exp()
}
