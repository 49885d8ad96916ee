use crate::Branch;
use num_complex::Complex;
use std::ops::Range;

/// A single point on the discretised contour
///
/// The linear index `idx` addresses storage in contour order, the complex
/// `val` is the physical contour time: real on the two real-time branches
/// and `-iτ` on the imaginary branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGridPoint {
    /// Position of the point in contour (storage) order
    pub idx: usize,
    /// The branch the point sits on
    pub branch: Branch,
    /// The physical contour time
    pub val: Complex<f64>,
}

impl TimeGridPoint {
    /// The real-time value of the point, meaningful on the real-time branches
    pub fn real_time(&self) -> f64 {
        self.val.re
    }
}

/// An ordered collection of contour points with branch metadata
///
/// Points are stored in contour order: the forward branch, then the backward
/// branch, then the imaginary branch. The causal ordering of the contour
/// therefore coincides with the storage order, which is what the Heaviside
/// predicate [`TimeGrid::theta`] relies on.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    points: Vec<TimeGridPoint>,
    n_forward: usize,
    n_backward: usize,
    n_imaginary: usize,
}

impl TimeGrid {
    /// A uniformly spaced contour with `n_real` points on each real-time
    /// branch up to `maximum_time`, and `n_imaginary` points on the imaginary
    /// branch down to `-i * inverse_temperature`
    pub fn new(
        maximum_time: f64,
        n_real: usize,
        inverse_temperature: f64,
        n_imaginary: usize,
    ) -> Self {
        assert!(n_real > 1, "each real-time branch needs at least two points");
        let dt = maximum_time / (n_real - 1) as f64;
        let forward = (0..n_real).map(|k| k as f64 * dt).collect::<Vec<_>>();
        let backward = (0..n_real)
            .map(|k| maximum_time - k as f64 * dt)
            .collect::<Vec<_>>();
        let dtau = if n_imaginary > 1 {
            inverse_temperature / (n_imaginary - 1) as f64
        } else {
            0_f64
        };
        let imaginary = (0..n_imaginary).map(|k| k as f64 * dtau).collect::<Vec<_>>();
        Self::from_branches(&forward, &backward, &imaginary)
    }

    /// A contour from explicit per-branch sequences: real times for the two
    /// real-time branches (the backward sequence in contour order, so
    /// descending), and imaginary times `τ` for the imaginary branch
    pub fn from_branches(forward: &[f64], backward: &[f64], imaginary: &[f64]) -> Self {
        let mut points = Vec::with_capacity(forward.len() + backward.len() + imaginary.len());
        let mut idx = 0_usize;
        for &time in forward {
            points.push(TimeGridPoint {
                idx,
                branch: Branch::Forward,
                val: Complex::new(time, 0_f64),
            });
            idx += 1;
        }
        for &time in backward {
            points.push(TimeGridPoint {
                idx,
                branch: Branch::Backward,
                val: Complex::new(time, 0_f64),
            });
            idx += 1;
        }
        for &tau in imaginary {
            points.push(TimeGridPoint {
                idx,
                branch: Branch::Imaginary,
                val: Complex::new(0_f64, -tau),
            });
            idx += 1;
        }
        Self {
            points,
            n_forward: forward.len(),
            n_backward: backward.len(),
            n_imaginary: imaginary.len(),
        }
    }

    /// Total number of points on the contour
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the contour holds no points at all
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in contour order
    pub fn points(&self) -> &[TimeGridPoint] {
        &self.points
    }

    fn branch_range(&self, branch: Branch) -> Range<usize> {
        match branch {
            Branch::Forward => 0..self.n_forward,
            Branch::Backward => self.n_forward..self.n_forward + self.n_backward,
            Branch::Imaginary => self.n_forward + self.n_backward..self.points.len(),
        }
    }

    /// Number of points on one branch
    pub fn branch_len(&self, branch: Branch) -> usize {
        self.branch_range(branch).len()
    }

    /// Points of one branch, in contour order
    pub fn branch_points(&self, branch: Branch) -> &[TimeGridPoint] {
        &self.points[self.branch_range(branch)]
    }

    /// Points of one branch in reversed contour order; on the backward branch
    /// this is ascending real time
    pub fn reversed_branch_points(
        &self,
        branch: Branch,
    ) -> impl Iterator<Item = &TimeGridPoint> {
        self.branch_points(branch).iter().rev()
    }

    /// The first and last point of a branch in contour order
    ///
    /// # Panics
    /// Panics when the branch carries no points; asking for a branch the
    /// contour does not have is caller misuse.
    pub fn branch_bounds(&self, branch: Branch) -> (&TimeGridPoint, &TimeGridPoint) {
        let points = self.branch_points(branch);
        assert!(
            !points.is_empty(),
            "the contour carries no {:?} branch",
            branch
        );
        (&points[0], &points[points.len() - 1])
    }

    /// The Heaviside contour-ordering predicate: true iff `t1` is
    /// not-later-than `t2` along the contour
    pub fn theta(&self, t1: &TimeGridPoint, t2: &TimeGridPoint) -> bool {
        t1.idx <= t2.idx
    }

    /// The real-time subsequence of the contour, taken from the forward branch
    pub fn real_times(&self) -> Vec<f64> {
        self.branch_points(Branch::Forward)
            .iter()
            .map(TimeGridPoint::real_time)
            .collect()
    }

    /// Smallest non-zero distance between consecutive contour points
    ///
    /// The fold between the real-time branches and the junction with the
    /// imaginary branch contribute zero-length steps, which are skipped.
    pub fn minimum_step(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[1].val - pair[0].val).norm())
            .filter(|step| *step > 0_f64)
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod test {
    use super::{Branch, TimeGrid};
    use approx::assert_relative_eq;

    #[test]
    fn branches_are_laid_out_in_contour_order() {
        let grid = TimeGrid::new(1.0, 3, 2.0, 4);
        assert_eq!(grid.len(), 10);
        assert_eq!(grid.branch_len(Branch::Forward), 3);
        assert_eq!(grid.branch_len(Branch::Backward), 3);
        assert_eq!(grid.branch_len(Branch::Imaginary), 4);
        for (expected, point) in grid.points().iter().enumerate() {
            assert_eq!(point.idx, expected);
        }

        let forward = grid.branch_points(Branch::Forward);
        assert_relative_eq!(forward[0].real_time(), 0.0);
        assert_relative_eq!(forward[2].real_time(), 1.0);
        let backward = grid.branch_points(Branch::Backward);
        assert_relative_eq!(backward[0].real_time(), 1.0);
        assert_relative_eq!(backward[2].real_time(), 0.0);
        let imaginary = grid.branch_points(Branch::Imaginary);
        assert_relative_eq!(imaginary[3].val.im, -2.0);
        assert_relative_eq!(imaginary[3].val.re, 0.0);
    }

    #[test]
    fn theta_follows_the_contour_not_the_real_time() {
        let grid = TimeGrid::new(1.0, 3, 2.0, 2);
        let forward = grid.branch_points(Branch::Forward);
        let backward = grid.branch_points(Branch::Backward);
        // t = 1 on the forward branch precedes t = 0 on the backward branch
        assert!(grid.theta(&forward[2], &backward[2]));
        assert!(!grid.theta(&backward[2], &forward[2]));
        // equal points are not-later-than themselves
        assert!(grid.theta(&forward[1], &forward[1]));
    }

    #[test]
    fn branch_bounds_are_the_contour_endpoints_of_the_branch() {
        let grid = TimeGrid::new(2.0, 5, 1.0, 3);
        let (first, last) = grid.branch_bounds(Branch::Backward);
        assert_relative_eq!(first.real_time(), 2.0);
        assert_relative_eq!(last.real_time(), 0.0);
        assert_eq!(first.idx, 5);
        assert_eq!(last.idx, 9);
    }

    #[test]
    #[should_panic(expected = "no Imaginary branch")]
    fn bounds_of_an_absent_branch_panic() {
        let grid = TimeGrid::new(1.0, 3, 0.0, 0);
        let _ = grid.branch_bounds(Branch::Imaginary);
    }

    #[test]
    fn minimum_step_skips_the_zero_length_fold() {
        // real step 0.5, imaginary step 0.25, fold steps have zero length
        let grid = TimeGrid::new(1.0, 3, 0.5, 3);
        assert_relative_eq!(grid.minimum_step(), 0.25);
    }

    #[test]
    fn reversed_backward_points_ascend_in_real_time() {
        let grid = TimeGrid::new(1.0, 3, 0.0, 0);
        let times: Vec<f64> = grid
            .reversed_branch_points(Branch::Backward)
            .map(|point| point.real_time())
            .collect();
        assert_relative_eq!(times[0], 0.0);
        assert_relative_eq!(times[1], 0.5);
        assert_relative_eq!(times[2], 1.0);
    }
}
