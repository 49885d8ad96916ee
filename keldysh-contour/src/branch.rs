/// The three segments of the L-shaped Kadanoff-Baym contour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Forward real-time branch, running from `0` to `t_max`
    Forward,
    /// Backward real-time branch, running from `t_max` to `0`
    Backward,
    /// Imaginary branch, running from `0` to `-iβ`
    Imaginary,
}
