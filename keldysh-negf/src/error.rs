use miette::Diagnostic;

/// General error for contour Green's function construction and component
/// access problems
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum GreensFunctionError {
    /// A named component lookup did not match any contour component
    #[error("unrecognised component name: {0}")]
    UnrecognisedComponent(String),
    /// An externally supplied matrix does not match the contour dimension
    #[error("a {rows}x{cols} matrix cannot wrap a contour of {expected} points")]
    DimensionMismatch {
        /// Rows of the supplied matrix
        rows: usize,
        /// Columns of the supplied matrix
        cols: usize,
        /// Number of points on the contour
        expected: usize,
    },
    /// Failure to read or deserialise the calculation configuration
    #[error(transparent)]
    Configuration(#[from] ::config::ConfigError),
}
