//! diffusion::validation — shared input guards for the pipeline stages.
//!
//! Purpose
//! -------
//! Centralize the argument checks of the walk generator, MSD estimator, and
//! diffusion fitter so that each stage validates its inputs once, up front,
//! and reports violations as structured [`DiffusionError`] values.
//!
//! Invariants & assumptions
//! ------------------------
//! - Step counts must be ≥ 1.
//! - Lag windows must satisfy `1 ≤ max_lag < N`; the default `N / 2` is
//!   resolved here, so an N = 1 trajectory has no admissible default.
//! - Fit inputs must be equal-length, contain at least 2 points, have lags
//!   ≥ 1 and MSD values that are finite and > 0.
//!
//! Conventions
//! -----------
//! - Pure functions with no allocation beyond error construction.
//! - Shape problems are `InvalidArgument`; MSD values outside the log domain
//!   are `DomainError` (see [`ErrorKind`](crate::diffusion::errors::ErrorKind)).
//!
//! Testing notes
//! -------------
//! - Unit tests exercise every branch, including the N = 1 default window.
use crate::diffusion::errors::{DiffusionError, DiffusionResult};

/// Reject step counts below 1.
pub fn validate_steps(steps: usize) -> DiffusionResult<()> {
    if steps < 1 {
        return Err(DiffusionError::InvalidSteps { steps });
    }
    Ok(())
}

/// Resolve the MSD lag window for a trajectory of length `len`.
///
/// Parameters
/// ----------
/// - `len`: `usize`
///   Trajectory length N.
/// - `max_lag`: `Option<usize>`
///   Requested largest lag; `None` selects `N / 2`.
///
/// Returns
/// -------
/// `DiffusionResult<usize>`
///   The resolved `max_lag`, guaranteed to satisfy `1 ≤ max_lag < N`.
///
/// Errors
/// ------
/// - `DiffusionError::InvalidMaxLag` when the resolved value is 0 or ≥ N.
///   For N = 1 the default resolves to 0 and is rejected rather than
///   clamped, since no displacement pair exists.
///
/// Examples
/// --------
/// ```rust
/// # use random_walk_msd::diffusion::validation::resolve_max_lag;
/// assert_eq!(resolve_max_lag(10, None).unwrap(), 5);
/// assert_eq!(resolve_max_lag(10, Some(9)).unwrap(), 9);
/// assert!(resolve_max_lag(10, Some(10)).is_err());
/// assert!(resolve_max_lag(1, None).is_err());
/// ```
pub fn resolve_max_lag(len: usize, max_lag: Option<usize>) -> DiffusionResult<usize> {
    let resolved = max_lag.unwrap_or(len / 2);
    if resolved < 1 || resolved >= len {
        return Err(DiffusionError::InvalidMaxLag { max_lag: resolved, len });
    }
    Ok(resolved)
}

/// Validate a (lag, MSD) series before the log-log fit.
///
/// Errors
/// ------
/// - `DiffusionError::SeriesLengthMismatch` if the lengths differ.
/// - `DiffusionError::InsufficientPoints` if fewer than 2 points.
/// - `DiffusionError::InvalidLag` if a lag is 0.
/// - `DiffusionError::NonPositiveMsd` if an MSD value is ≤ 0, NaN, or ±inf.
pub fn validate_fit_series(lags: &[usize], msd: &[f64]) -> DiffusionResult<()> {
    if lags.len() != msd.len() {
        return Err(DiffusionError::SeriesLengthMismatch { lags: lags.len(), msd: msd.len() });
    }
    if lags.len() < 2 {
        return Err(DiffusionError::InsufficientPoints { len: lags.len() });
    }
    if let Some(index) = lags.iter().position(|&lag| lag == 0) {
        return Err(DiffusionError::InvalidLag { index, lag: lags[index] });
    }
    for (index, &value) in msd.iter().enumerate() {
        if !(value.is_finite() && value > 0.0) {
            return Err(DiffusionError::NonPositiveMsd { index, value });
        }
    }
    Ok(())
}
