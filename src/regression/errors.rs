//! regression::errors — failures of the least-squares polynomial fit.
//!
//! Purpose
//! -------
//! Report malformed regression inputs (length mismatches, too few points,
//! non-finite values) and numerically degenerate designs through a small
//! cloneable enum, [`RegressionError`], with result alias
//! [`RegressionResult`].
//!
//! Conventions
//! -----------
//! - Callers in other subtrees convert these errors into their own error
//!   type (e.g. `DiffusionError::DegenerateFit`) at the boundary.

pub type RegressionResult<T> = Result<T, RegressionError>;

/// RegressionError — error conditions for [`polyfit`](super::polyfit::polyfit).
///
/// Variants
/// --------
/// - `LengthMismatch { x_len, y_len }`
///   The abscissa and ordinate slices differ in length.
/// - `TooFewPoints { len, degree }`
///   Fewer than `degree + 1` points, so the coefficients are not identified.
/// - `NonFiniteInput { index, value }`
///   An x or y value is NaN or ±∞.
/// - `SingularDesign`
///   The Vandermonde design matrix is rank deficient (e.g. all x equal).
/// - `SolveFailed(reason)`
///   The SVD back-substitution reported a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    LengthMismatch { x_len: usize, y_len: usize },
    TooFewPoints { len: usize, degree: usize },
    NonFiniteInput { index: usize, value: f64 },
    SingularDesign,
    SolveFailed(String),
}

impl std::error::Error for RegressionError {}

impl std::fmt::Display for RegressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegressionError::LengthMismatch { x_len, y_len } => {
                write!(f, "x has {x_len} values but y has {y_len}.")
            }
            RegressionError::TooFewPoints { len, degree } => {
                write!(f, "Degree {degree} fit needs at least {} points; got {len}.", degree + 1)
            }
            RegressionError::NonFiniteInput { index, value } => {
                write!(f, "Input at index {index} is non-finite: {value}")
            }
            RegressionError::SingularDesign => {
                write!(f, "Design matrix is rank deficient; x values are not distinct enough.")
            }
            RegressionError::SolveFailed(reason) => write!(f, "Least-squares solve failed: {reason}"),
        }
    }
}
