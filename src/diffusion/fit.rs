//! diffusion::fit — diffusion coefficient from a log-log MSD fit.
//!
//! Purpose
//! -------
//! Recover the power-law MSD(t) ≈ A·t^α from an MSD curve by ordinary least
//! squares on `ln(MSD)` against `ln(lag)`, and convert the intercept into a
//! 2D diffusion coefficient under MSD ≈ 4·D·t.
//!
//! Key behaviors
//! -------------
//! - Validate the series (equal length, ≥ 2 points, lags ≥ 1, MSD > 0) so
//!   that a zero MSD is reported as a domain error instead of turning into
//!   `-inf` inside the regression.
//! - Delegate the degree-1 fit to [`polyfit`](crate::regression::polyfit).
//! - Report `D = exp(intercept) / 4` together with the slope α, which is
//!   informational: α ≈ 1 is normal diffusion, α < 1 sub-diffusive, α > 1
//!   super-diffusive.
//!
//! Invariants & assumptions
//! ------------------------
//! - The fit is a deterministic function of its inputs.
//! - The slope is never validated; [`DiffusionRegime`] only labels it.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the exact `msd = lag²` case, exact linear diffusion,
//!   zero-MSD rejection, fitted-line prediction, and regime labels.
use crate::diffusion::errors::DiffusionResult;
use crate::diffusion::msd::MsdCurve;
use crate::diffusion::validation::validate_fit_series;
use crate::regression::polyfit;
use log::debug;

/// Lower and upper slope bounds of the `Normal` regime.
const NORMAL_SLOPE_BAND: (f64, f64) = (0.9, 1.1);

/// FitResult — outcome of the log-log MSD regression.
///
/// Fields
/// ------
/// - `slope`: `f64`
///   Exponent α of MSD ∝ lag^α.
/// - `intercept`: `f64`
///   Intercept of the fitted line in log space, `ln A`.
/// - `diffusion_coefficient`: `f64`
///   `exp(intercept) / 4`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitResult {
    slope: f64,
    intercept: f64,
    diffusion_coefficient: f64,
}

impl FitResult {
    fn from_line(slope: f64, intercept: f64) -> Self {
        FitResult { slope, intercept, diffusion_coefficient: intercept.exp() / 4.0 }
    }

    /// Log-log slope α.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Log-space intercept ln A.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// 2D diffusion coefficient `exp(intercept) / 4`.
    pub fn diffusion_coefficient(&self) -> f64 {
        self.diffusion_coefficient
    }

    /// Fitted MSD at `lag`: `exp(intercept) · lag^slope`.
    pub fn predict(&self, lag: f64) -> f64 {
        (self.intercept + self.slope * lag.ln()).exp()
    }

    /// Informational label for the slope.
    pub fn regime(&self) -> DiffusionRegime {
        DiffusionRegime::from_slope(self.slope)
    }
}

/// DiffusionRegime — coarse classification of the log-log slope.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DiffusionRegime {
    /// α < 0.9
    SubDiffusive,
    /// 0.9 ≤ α ≤ 1.1
    Normal,
    /// α > 1.1
    SuperDiffusive,
}

impl DiffusionRegime {
    pub fn from_slope(slope: f64) -> Self {
        let (lo, hi) = NORMAL_SLOPE_BAND;
        if slope < lo {
            DiffusionRegime::SubDiffusive
        } else if slope > hi {
            DiffusionRegime::SuperDiffusive
        } else {
            DiffusionRegime::Normal
        }
    }
}

impl std::fmt::Display for DiffusionRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffusionRegime::SubDiffusive => write!(f, "sub-diffusive"),
            DiffusionRegime::Normal => write!(f, "normal"),
            DiffusionRegime::SuperDiffusive => write!(f, "super-diffusive"),
        }
    }
}

/// Fit `ln(msd) = slope · ln(lag) + intercept` by ordinary least squares.
///
/// Parameters
/// ----------
/// - `lags`: `&[usize]`
///   Time lags, each ≥ 1.
/// - `msd`: `&[f64]`
///   MSD values, same length as `lags`, each finite and > 0.
///
/// Returns
/// -------
/// `DiffusionResult<FitResult>`
///   Slope, log-space intercept, and `D = exp(intercept) / 4`.
///
/// Errors
/// ------
/// - `InvalidArgument` kinds: `SeriesLengthMismatch`, `InsufficientPoints`,
///   `InvalidLag`.
/// - `DomainError` kinds: `NonPositiveMsd` for MSD ≤ 0 or non-finite;
///   `DegenerateFit` if the regression itself fails (e.g. all lags equal).
///
/// Examples
/// --------
/// ```rust
/// use random_walk_msd::diffusion::fit_diffusion;
///
/// let fit = fit_diffusion(&[1, 2], &[1.0, 4.0]).unwrap();
/// assert!((fit.slope() - 2.0).abs() < 1e-12);
/// assert!((fit.diffusion_coefficient() - 0.25).abs() < 1e-12);
/// ```
pub fn fit_diffusion(lags: &[usize], msd: &[f64]) -> DiffusionResult<FitResult> {
    validate_fit_series(lags, msd)?;

    let log_lags: Vec<f64> = lags.iter().map(|&lag| (lag as f64).ln()).collect();
    let log_msd: Vec<f64> = msd.iter().map(|m| m.ln()).collect();

    let line = polyfit(&log_lags, &log_msd, 1)?;
    let coeffs = line.coefficients();
    let fit = FitResult::from_line(coeffs[0], coeffs[1]);

    debug!(
        "log-log fit over {} lags: slope = {:.4}, intercept = {:.4}, D = {:.4}",
        lags.len(),
        fit.slope,
        fit.intercept,
        fit.diffusion_coefficient
    );
    Ok(fit)
}

/// Fit an [`MsdCurve`] produced by [`estimate_msd`](crate::diffusion::msd::estimate_msd).
pub fn fit_curve(curve: &MsdCurve) -> DiffusionResult<FitResult> {
    fit_diffusion(curve.lags(), curve.msd())
}
