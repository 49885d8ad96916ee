//! Trapezoidal quadrature along the contour
//!
//! The integration measure is the complex contour time itself, so backward
//! segments contribute with negative real `dt` and imaginary segments with
//! `-i dτ` without any special casing at the branch junctions.

use crate::{TimeGrid, TimeGridPoint};
use num_complex::Complex;
use num_traits::Zero;

/// Trapezoidal quadrature of `integrand` along the contour between the grid
/// points `from` and `to`.
///
/// When `from` lies later on the contour than `to` the integral over the
/// reversed range is returned with negated sign; coincident endpoints give
/// zero.
pub fn integrate<F>(
    grid: &TimeGrid,
    from: &TimeGridPoint,
    to: &TimeGridPoint,
    mut integrand: F,
) -> Complex<f64>
where
    F: FnMut(&TimeGridPoint) -> Complex<f64>,
{
    if from.idx == to.idx {
        return Complex::zero();
    }
    if from.idx > to.idx {
        return -integrate(grid, to, from, integrand);
    }

    let segment = &grid.points()[from.idx..=to.idx];
    let mut total = Complex::zero();
    let mut previous_point = segment[0];
    let mut previous_value = integrand(&segment[0]);
    for point in &segment[1..] {
        let value = integrand(point);
        total += (previous_value + value) * (point.val - previous_point.val) * 0.5;
        previous_point = *point;
        previous_value = value;
    }
    total
}

/// Trapezoidal quadrature of pre-evaluated `samples` over a (possibly
/// non-uniform) real-time axis
pub fn trapezoid(times: &[f64], samples: &[Complex<f64>]) -> Complex<f64> {
    assert_eq!(
        times.len(),
        samples.len(),
        "one sample is needed per time point"
    );
    times
        .windows(2)
        .zip(samples.windows(2))
        .map(|(time, sample)| (sample[0] + sample[1]) * (time[1] - time[0]) * 0.5)
        .sum()
}

#[cfg(test)]
mod test {
    use super::{integrate, trapezoid};
    use crate::{Branch, TimeGrid};
    use approx::assert_relative_eq;
    use num_complex::Complex;

    #[test]
    fn linear_integrand_is_exact_on_the_forward_branch() {
        let grid = TimeGrid::new(1.0, 11, 0.0, 0);
        let (from, to) = grid.branch_bounds(Branch::Forward);
        let result = integrate(&grid, from, to, |point| point.val);
        assert_relative_eq!(result.re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(result.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_integrand_over_the_whole_contour_is_the_endpoint_difference() {
        let grid = TimeGrid::new(1.0, 5, 2.0, 5);
        let points = grid.points();
        let result = integrate(&grid, &points[0], &points[points.len() - 1], |_| {
            Complex::new(1.0, 0.0)
        });
        // the real-time excursion cancels, leaving the imaginary descent
        assert_relative_eq!(result.re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.im, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn reversing_the_endpoints_negates_the_integral() {
        let grid = TimeGrid::new(2.0, 7, 1.0, 3);
        let points = grid.points();
        let forwards = integrate(&grid, &points[1], &points[8], |point| point.val * point.val);
        let backwards = integrate(&grid, &points[8], &points[1], |point| point.val * point.val);
        assert_relative_eq!(forwards.re, -backwards.re, epsilon = 1e-12);
        assert_relative_eq!(forwards.im, -backwards.im, epsilon = 1e-12);
    }

    #[test]
    fn coincident_endpoints_integrate_to_zero() {
        let grid = TimeGrid::new(1.0, 3, 0.0, 0);
        let points = grid.points();
        let result = integrate(&grid, &points[2], &points[2], |_| Complex::new(4.0, 2.0));
        assert_relative_eq!(result.re, 0.0);
        assert_relative_eq!(result.im, 0.0);
    }

    #[test]
    fn real_axis_trapezoid_handles_non_uniform_spacing() {
        let times = [0.0, 0.1, 0.4, 1.0];
        let samples: Vec<Complex<f64>> =
            times.iter().map(|&t| Complex::new(2.0 * t, 0.0)).collect();
        let result = trapezoid(&times, &samples);
        assert_relative_eq!(result.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(result.im, 0.0);
    }
}
