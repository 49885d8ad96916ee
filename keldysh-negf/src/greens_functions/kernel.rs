//! Memoisation for time-translation-invariant kernels
//!
//! In equilibrium a correlator depends on its two contour arguments only
//! through the time difference and the Heaviside contour ordering, so
//! evaluating it over the full O(N²) set of ordered pairs revisits a small
//! set of distinct values. The adapter caches each value under the quantised
//! time difference and the ordering flag.

use keldysh_contour::{TimeGrid, TimeGridPoint};
use num_complex::Complex;
use std::collections::HashMap;

/// A memoising wrapper around a time-translation-invariant kernel
///
/// The cache key quantises the complex time difference component-wise to a
/// tenth of the smallest grid step, collapsing numerically near-equal
/// differences onto one entry while keeping distinct discretisation steps
/// apart. Entries are inserted once and never evicted; the cache lives with
/// the adapter, not with any matrix built from it.
pub struct TimeInvariantKernel<'g, F> {
    grid: &'g TimeGrid,
    kernel: F,
    cache: HashMap<(i64, i64, bool), Complex<f64>>,
    resolution: f64,
    hits: usize,
}

impl<'g, F> TimeInvariantKernel<'g, F>
where
    F: FnMut(&TimeGridPoint, &TimeGridPoint) -> Complex<f64>,
{
    /// Wrap `kernel` for evaluation over `grid`
    pub fn new(grid: &'g TimeGrid, kernel: F) -> Self {
        Self {
            grid,
            kernel,
            cache: HashMap::new(),
            resolution: grid.minimum_step() / 10_f64,
            hits: 0,
        }
    }

    /// Evaluate the kernel at `(t1, t2)`, reusing any value already computed
    /// for the same quantised time difference and contour ordering
    pub fn evaluate(&mut self, t1: &TimeGridPoint, t2: &TimeGridPoint) -> Complex<f64> {
        let difference = t1.val - t2.val;
        let key = (
            (difference.re / self.resolution).round() as i64,
            (difference.im / self.resolution).round() as i64,
            self.grid.theta(t1, t2),
        );
        if let Some(&value) = self.cache.get(&key) {
            self.hits += 1;
            return value;
        }
        let value = (self.kernel)(t1, t2);
        self.cache.insert(key, value);
        value
    }

    /// Number of evaluations served from the cache
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of distinct quantised keys evaluated so far
    pub fn entries(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod test {
    use super::TimeInvariantKernel;
    use keldysh_contour::TimeGrid;
    use num_complex::Complex;

    #[test]
    fn repeated_time_differences_hit_the_cache() {
        let grid = TimeGrid::new(1.0, 10, 0.0, 0);
        let mut adapter = TimeInvariantKernel::new(&grid, |t1, t2| {
            (Complex::new(0.0, -1.0) * (t1.val - t2.val)).exp()
        });
        for t1 in grid.points() {
            for t2 in grid.points() {
                adapter.evaluate(t1, t2);
            }
        }
        assert!(adapter.hits() > 0);
        assert_eq!(adapter.hits() + adapter.entries(), grid.len() * grid.len());
        // every pair on a uniform folded grid repeats some time difference
        assert!(adapter.entries() < grid.len() * grid.len());
    }

    #[test]
    fn ordering_distinguishes_pairs_with_equal_time_difference() {
        let grid = TimeGrid::new(1.0, 4, 0.0, 0);
        let mut adapter = TimeInvariantKernel::new(&grid, |t1, t2| {
            if grid.theta(t1, t2) {
                Complex::new(1.0, 0.0)
            } else {
                Complex::new(-1.0, 0.0)
            }
        });
        let points = grid.points();
        // t = 1/3 and t = 2/3 on opposite real-time branches, both orderings
        let early = &points[1];
        let late_backward = &points[5];
        assert_eq!(
            adapter.evaluate(early, late_backward),
            Complex::new(1.0, 0.0)
        );
        assert_eq!(
            adapter.evaluate(late_backward, early),
            Complex::new(-1.0, 0.0)
        );
    }
}
