//! diffusion::msd — time-averaged mean squared displacement.
//!
//! Purpose
//! -------
//! Estimate the mean squared displacement (MSD) of a single trajectory for
//! every lag `1..=max_lag`, the standard single-trajectory time-average
//! estimator used to characterize diffusive motion.
//!
//! Key behaviors
//! -------------
//! - Resolve the lag window (default `N / 2`) and reject windows with no
//!   displacement pairs.
//! - For each lag L, average `(x[i+L] − x[i])² + (y[i+L] − y[i])²` over all
//!   `i ∈ [0, N − L − 1]`, using overlapping windows with equal weights.
//! - Return lags and MSD values together as an [`MsdCurve`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `1 ≤ max_lag < N`; lags up to `N − 1` are allowed even though the
//!   largest lags average over very few pairs (a single pair at `N − 1`).
//! - `lags == [1, 2, …, max_lag]` and `msd.len() == lags.len()`.
//! - MSD values are sums of squares and therefore ≥ 0; exact zeros are
//!   legitimate (e.g. a walk that revisits its offset).
//!
//! Performance
//! -----------
//! - O(N × max_lag) time, O(max_lag) extra memory.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the hand-computable unit-step line, the default
//!   window, single-sample lags, purity, and window rejection.
use crate::diffusion::errors::DiffusionResult;
use crate::diffusion::trajectory::Trajectory;
use crate::diffusion::validation::resolve_max_lag;
use log::debug;
use ndarray::{ArrayView1, s};

/// MsdCurve — lag series and matching MSD values.
///
/// Fields
/// ------
/// - `lags`: `Vec<usize>`
///   Contiguous lags `1..=max_lag`.
/// - `msd`: `Vec<f64>`
///   `msd[k]` is the MSD at lag `lags[k]`; non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct MsdCurve {
    lags: Vec<usize>,
    msd: Vec<f64>,
}

impl MsdCurve {
    /// Time lags, strictly increasing from 1.
    pub fn lags(&self) -> &[usize] {
        &self.lags
    }

    /// MSD values, one per lag.
    pub fn msd(&self) -> &[f64] {
        &self.msd
    }

    /// Largest lag in the curve.
    pub fn max_lag(&self) -> usize {
        self.lags.len()
    }

    /// Number of (lag, MSD) points.
    pub fn len(&self) -> usize {
        self.lags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lags.is_empty()
    }

    /// Iterate over `(lag, msd)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.lags.iter().copied().zip(self.msd.iter().copied())
    }

    /// Consume the curve into its lag and MSD series.
    pub fn into_parts(self) -> (Vec<usize>, Vec<f64>) {
        (self.lags, self.msd)
    }
}

/// Estimate the MSD curve of `trajectory` for lags `1..=max_lag`.
///
/// Parameters
/// ----------
/// - `trajectory`: `&Trajectory`
///   Path of length N.
/// - `max_lag`: `Option<usize>`
///   Largest lag. `None` selects `N / 2`.
///
/// Returns
/// -------
/// `DiffusionResult<MsdCurve>`
///   Lags `[1, …, max_lag]` with
///   `msd[L−1] = (1 / (N − L)) Σᵢ ‖P[i+L] − P[i]‖²`.
///
/// Errors
/// ------
/// - `DiffusionError::InvalidMaxLag` if the resolved `max_lag` is 0 or
///   ≥ N. This includes the default window of a one-point trajectory.
///
/// Examples
/// --------
/// ```rust
/// use random_walk_msd::diffusion::{Trajectory, estimate_msd};
///
/// let traj = Trajectory::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]).unwrap();
/// let curve = estimate_msd(&traj, Some(2)).unwrap();
/// assert_eq!(curve.lags(), &[1, 2]);
/// assert_eq!(curve.msd(), &[1.0, 4.0]);
/// ```
pub fn estimate_msd(trajectory: &Trajectory, max_lag: Option<usize>) -> DiffusionResult<MsdCurve> {
    let n = trajectory.len();
    let max_lag = resolve_max_lag(n, max_lag)?;

    let x = trajectory.x().view();
    let y = trajectory.y().view();
    let lags: Vec<usize> = (1..=max_lag).collect();
    let msd: Vec<f64> = lags.iter().map(|&lag| calc_msd_at_lag(x, y, lag)).collect();

    debug!(
        "estimated MSD over {max_lag} lags (N = {n}): msd[1] = {:.4}, msd[{max_lag}] = {:.4}",
        msd[0],
        msd[max_lag - 1]
    );
    Ok(MsdCurve { lags, msd })
}

/// Mean of ‖P[i+lag] − P[i]‖² over `i = 0..N−lag`.
///
/// Panics if `lag == 0` or `lag >= x.len()`; callers resolve the window
/// through [`resolve_max_lag`] first.
#[inline]
fn calc_msd_at_lag(x: ArrayView1<f64>, y: ArrayView1<f64>, lag: usize) -> f64 {
    let pairs = x.len() - lag;
    let sum_sq: f64 = x
        .slice(s![lag..])
        .iter()
        .zip(x.iter())
        .zip(y.slice(s![lag..]).iter().zip(y.iter()))
        .map(|((x_ahead, x_now), (y_ahead, y_now))| {
            let dx = x_ahead - x_now;
            let dy = y_ahead - y_now;
            dx * dx + dy * dy
        })
        .sum();
    sum_sq / pairs as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diffusion::errors::{DiffusionError, ErrorKind};
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact MSD on hand-computable trajectories.
    // - Shape of the lag series for default and explicit windows.
    // - Non-negativity and purity.
    // - Rejection of empty windows, including the N = 1 default.
    //
    // They intentionally DO NOT cover:
    // - Statistical accuracy on random walks (see the integration tests).
    // -------------------------------------------------------------------------

    fn unit_step_line() -> Trajectory {
        Trajectory::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Hand-computable MSD for a constant unit x-step.
    //
    // Given
    // -----
    // - (0,0), (1,0), (2,0), (3,0) and max_lag = 2.
    //
    // Expect
    // ------
    // - lags [1, 2]; MSD [mean(1,1,1), mean(4,4)] = [1.0, 4.0].
    fn estimate_msd_unit_step_line_matches_hand_values() {
        // Act
        let curve = estimate_msd(&unit_step_line(), Some(2)).expect("valid window");

        // Assert
        assert_eq!(curve.lags(), &[1, 2]);
        assert_eq!(curve.msd(), &[1.0, 4.0]);
    }

    #[test]
    // Purpose
    // -------
    // Lags up to N − 1 are allowed and the last one averages a single pair.
    //
    // Given
    // -----
    // - The unit-step line with max_lag = 3 = N − 1.
    //
    // Expect
    // ------
    // - MSD at lag 3 equals the single displacement² = 9.
    fn estimate_msd_allows_single_sample_lag() {
        let curve = estimate_msd(&unit_step_line(), Some(3)).expect("N − 1 is admissible");
        assert_eq!(curve.lags(), &[1, 2, 3]);
        assert_eq!(curve.msd()[2], 9.0);
    }

    #[test]
    // Purpose
    // -------
    // Default window is N / 2 and the series lengths agree.
    //
    // Given
    // -----
    // - A diagonal walk of 11 points with steps (1, 1).
    //
    // Expect
    // ------
    // - max_lag = 5, lags [1..=5], msd[L−1] = 2 L².
    fn estimate_msd_default_window_is_half_length() {
        // Arrange
        let points: Vec<(f64, f64)> = (0..11).map(|i| (i as f64, i as f64)).collect();
        let traj = Trajectory::from_points(&points).unwrap();

        // Act
        let curve = estimate_msd(&traj, None).unwrap();

        // Assert
        assert_eq!(curve.max_lag(), 5);
        assert_eq!(curve.lags(), &[1, 2, 3, 4, 5]);
        assert_eq!(curve.msd().len(), curve.lags().len());
        for (lag, value) in curve.iter() {
            assert_relative_eq!(value, 2.0 * (lag * lag) as f64, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // A walk that returns to its offset yields a legitimate zero MSD.
    //
    // Given
    // -----
    // - (1,1), (2,1), (1,1), (2,1), (1,1) and max_lag = 2.
    //
    // Expect
    // ------
    // - MSD [1.0, 0.0]; all values non-negative.
    fn estimate_msd_returning_walk_has_zero_msd_at_period() {
        let traj =
            Trajectory::from_points(&[(1.0, 1.0), (2.0, 1.0), (1.0, 1.0), (2.0, 1.0), (1.0, 1.0)])
                .unwrap();
        let curve = estimate_msd(&traj, Some(2)).unwrap();
        assert_eq!(curve.msd(), &[1.0, 0.0]);
        assert!(curve.msd().iter().all(|&m| m >= 0.0));
    }

    #[test]
    // Purpose
    // -------
    // Repeated calls on the same input are bit-identical.
    fn estimate_msd_is_pure() {
        let traj = Trajectory::from_points(&[(0.3, -1.2), (1.7, 0.4), (-0.2, 2.2), (0.9, 0.1)])
            .unwrap();
        let a = estimate_msd(&traj, Some(3)).unwrap();
        let b = estimate_msd(&traj, Some(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    // Purpose
    // -------
    // Empty averaging windows are invalid arguments.
    //
    // Given
    // -----
    // - max_lag = N on a 4-point line, and the default on a 1-point path.
    //
    // Expect
    // ------
    // - `InvalidMaxLag` for both.
    fn estimate_msd_rejects_lag_at_or_beyond_length() {
        let err = estimate_msd(&unit_step_line(), Some(4)).expect_err("lag = N has no pairs");
        assert_eq!(err, DiffusionError::InvalidMaxLag { max_lag: 4, len: 4 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let single = Trajectory::from_points(&[(0.5, 0.5)]).unwrap();
        assert_eq!(
            estimate_msd(&single, None),
            Err(DiffusionError::InvalidMaxLag { max_lag: 0, len: 1 })
        );
    }
}
