//! diffusion::errors — error type shared by the walk, MSD, and fit stages.
//!
//! Purpose
//! -------
//! Provide a single error enum and result alias for the random-walk
//! diffusion pipeline, so that every stage reports failures through the
//! same surface and callers (including the CLI) can present them uniformly.
//!
//! Key behaviors
//! -------------
//! - Define [`DiffusionError`] and [`DiffusionResult`] as the canonical error
//!   and result types for [`generate_walk`](crate::diffusion::walk::generate_walk),
//!   [`estimate_msd`](crate::diffusion::msd::estimate_msd), and
//!   [`fit_diffusion`](crate::diffusion::fit::fit_diffusion).
//! - Group variants into two coarse [`ErrorKind`]s: invalid arguments
//!   (bad counts, lags, or shapes) and domain errors (values for which the
//!   log-log fit is undefined).
//! - Attach human-readable `Display` messages that embed the offending
//!   value so that logs and CLI output are meaningful on their own.
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors are raised where the invalid value is first used and are never
//!   recovered internally; every computation is a deterministic function of
//!   its inputs, so retrying without changing them has no effect.
//! - `DiffusionError` values are small and cheap to clone.
//!
//! Conventions
//! -----------
//! - Indices are 0-based; lags are 1-based step counts.
//! - Messages are phrased in terms of domain constraints
//!   ("1 ≤ max_lag < N", "MSD must be > 0") rather than implementation details.
//!
//! Testing notes
//! -------------
//! - Unit tests below verify payload embedding in `Display` and the
//!   variant-to-kind mapping.

use crate::regression::errors::RegressionError;

/// Result alias for diffusion-pipeline operations that may produce
/// [`DiffusionError`].
pub type DiffusionResult<T> = Result<T, DiffusionError>;

/// Coarse classification of [`DiffusionError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A count, lag, or shape argument is out of range.
    InvalidArgument,
    /// A value lies outside the domain of the log-log fit.
    DomainError,
}

/// Unified error type for the random-walk diffusion pipeline.
///
/// Covers argument validation for walk generation and MSD estimation, shape
/// checks on the (lag, MSD) series handed to the fitter, and domain failures
/// of the log transform and the regression itself.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffusionError {
    // ---- Invalid arguments ----
    /// Step count must be at least 1.
    InvalidSteps { steps: usize },

    /// A trajectory needs at least one point.
    EmptyTrajectory,

    /// x and y coordinate arrays differ in length.
    CoordinateLengthMismatch { x_len: usize, y_len: usize },

    /// A coordinate is NaN/±inf.
    NonFiniteCoordinate { index: usize, value: f64 },

    /// Resolved max lag violates 1 ≤ max_lag < N.
    InvalidMaxLag { max_lag: usize, len: usize },

    /// Lag and MSD series have different lengths.
    SeriesLengthMismatch { lags: usize, msd: usize },

    /// The fit needs at least two (lag, MSD) points.
    InsufficientPoints { len: usize },

    /// Lags must be ≥ 1.
    InvalidLag { index: usize, lag: usize },

    // ---- Domain errors ----
    /// MSD value is ≤ 0 or non-finite, so ln(MSD) is undefined.
    NonPositiveMsd { index: usize, value: f64 },

    /// The least-squares solve failed on the log-transformed data.
    DegenerateFit { reason: String },
}

impl DiffusionError {
    /// Classify this error as an invalid argument or a domain error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DiffusionError::InvalidSteps { .. }
            | DiffusionError::EmptyTrajectory
            | DiffusionError::CoordinateLengthMismatch { .. }
            | DiffusionError::NonFiniteCoordinate { .. }
            | DiffusionError::InvalidMaxLag { .. }
            | DiffusionError::SeriesLengthMismatch { .. }
            | DiffusionError::InsufficientPoints { .. }
            | DiffusionError::InvalidLag { .. } => ErrorKind::InvalidArgument,
            DiffusionError::NonPositiveMsd { .. } | DiffusionError::DegenerateFit { .. } => {
                ErrorKind::DomainError
            }
        }
    }
}

impl std::error::Error for DiffusionError {}

impl std::fmt::Display for DiffusionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Invalid arguments ----
            DiffusionError::InvalidSteps { steps } => {
                write!(f, "Invalid step count: {steps}. Must be at least 1.")
            }
            DiffusionError::EmptyTrajectory => {
                write!(f, "Trajectory is empty.")
            }
            DiffusionError::CoordinateLengthMismatch { x_len, y_len } => {
                write!(f, "Coordinate length mismatch: x has {x_len} points, y has {y_len}.")
            }
            DiffusionError::NonFiniteCoordinate { index, value } => {
                write!(f, "Coordinate at index {index} is non-finite: {value}")
            }
            DiffusionError::InvalidMaxLag { max_lag, len } => {
                write!(f, "Invalid max lag: {max_lag}. Must satisfy 1 ≤ max_lag < N (N = {len}).")
            }
            DiffusionError::SeriesLengthMismatch { lags, msd } => {
                write!(f, "Series length mismatch: {lags} lags but {msd} MSD values.")
            }
            DiffusionError::InsufficientPoints { len } => {
                write!(f, "Need at least 2 (lag, MSD) points for a log-log fit; got {len}.")
            }
            DiffusionError::InvalidLag { index, lag } => {
                write!(f, "Lag at index {index} is {lag}. Lags must be ≥ 1.")
            }
            // ---- Domain errors ----
            DiffusionError::NonPositiveMsd { index, value } => {
                write!(
                    f,
                    "MSD at index {index} is {value}. MSD must be finite and > 0 for a log-log fit."
                )
            }
            DiffusionError::DegenerateFit { reason } => {
                write!(f, "Log-log regression failed: {reason}")
            }
        }
    }
}

impl From<RegressionError> for DiffusionError {
    fn from(err: RegressionError) -> Self {
        DiffusionError::DegenerateFit { reason: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Payload embedding in `Display` messages.
    // - The mapping from variants to `ErrorKind`.
    // - Conversion of regression failures into `DegenerateFit`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidMaxLag` reports both the lag and the series length.
    //
    // Given
    // -----
    // - `DiffusionError::InvalidMaxLag { max_lag: 7, len: 4 }`.
    //
    // Expect
    // ------
    // - The message contains "7" and "N = 4".
    fn invalid_max_lag_includes_payload_in_display() {
        // Arrange
        let err = DiffusionError::InvalidMaxLag { max_lag: 7, len: 4 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('7'), "message should include the lag.\nGot: {msg}");
        assert!(msg.contains("N = 4"), "message should include N.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `NonPositiveMsd` reports the offending index and value.
    //
    // Given
    // -----
    // - `DiffusionError::NonPositiveMsd { index: 3, value: 0.0 }`.
    //
    // Expect
    // ------
    // - The message contains "index 3" and "0".
    fn non_positive_msd_includes_index_and_value() {
        // Arrange
        let err = DiffusionError::NonPositiveMsd { index: 3, value: 0.0 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("index 3"), "Got: {msg}");
        assert!(msg.contains('0'), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure argument and domain variants are classified correctly.
    //
    // Given
    // -----
    // - One representative of each group.
    //
    // Expect
    // ------
    // - Argument checks map to `InvalidArgument`, MSD/regression failures
    //   map to `DomainError`.
    fn kind_separates_argument_and_domain_errors() {
        assert_eq!(DiffusionError::InvalidSteps { steps: 0 }.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            DiffusionError::InvalidMaxLag { max_lag: 0, len: 1 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            DiffusionError::NonPositiveMsd { index: 0, value: 0.0 }.kind(),
            ErrorKind::DomainError
        );
        assert_eq!(
            DiffusionError::DegenerateFit { reason: "singular".to_string() }.kind(),
            ErrorKind::DomainError
        );
    }

    #[test]
    // Purpose
    // -------
    // Check that a regression failure becomes `DegenerateFit` and keeps its
    // message.
    //
    // Given
    // -----
    // - `RegressionError::SingularDesign`.
    //
    // Expect
    // ------
    // - The converted error is `DegenerateFit` and its message embeds the
    //   regression message.
    fn regression_error_converts_to_degenerate_fit() {
        // Arrange
        let inner = RegressionError::SingularDesign;

        // Act
        let err: DiffusionError = inner.clone().into();

        // Assert
        match &err {
            DiffusionError::DegenerateFit { reason } => assert_eq!(reason, &inner.to_string()),
            other => panic!("expected DegenerateFit, got {other:?}"),
        }
    }
}
