//! report — console summary and plotting handoff for an analysis.
//!
//! Purpose
//! -------
//! Turn a [`DiffusionAnalysis`] into what presentation code consumes: the
//! two console lines printed by the CLI, and plain point lists for the
//! trajectory panel ([`TrajectoryView`]) and the log-log panel
//! ([`LogLogView`]). Nothing here performs I/O except [`write_summary`],
//! which writes to a caller-provided sink.
//!
//! Conventions
//! -----------
//! - Numbers in the console summary are rounded to two decimals.
//! - The fitted line is sampled at the analysed lags via
//!   [`FitResult::predict`].
use crate::diffusion::analysis::DiffusionAnalysis;
use crate::diffusion::fit::FitResult;
use crate::diffusion::msd::MsdCurve;
use crate::diffusion::trajectory::Trajectory;
use std::io::Write;

/// The two summary lines: diffusion coefficient and log-log slope.
pub fn summary_lines(fit: &FitResult) -> [String; 2] {
    [
        format!("Diffusion Coefficient: {:.2}", fit.diffusion_coefficient()),
        format!("Slope of log-log MSD plot: {:.2}", fit.slope()),
    ]
}

/// Write [`summary_lines`] to `out`, one per line.
pub fn write_summary<W: Write>(out: &mut W, fit: &FitResult) -> std::io::Result<()> {
    for line in summary_lines(fit) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// TrajectoryView — points of the walk with its endpoints singled out.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryView {
    pub path: Vec<(f64, f64)>,
    pub start: (f64, f64),
    pub end: (f64, f64),
}

impl TrajectoryView {
    pub fn new(trajectory: &Trajectory) -> Self {
        TrajectoryView {
            path: trajectory.points().collect(),
            start: trajectory.start(),
            end: trajectory.end(),
        }
    }

    /// Axis-aligned bounds `((x_min, x_max), (y_min, y_max))` of the path.
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let init = ((f64::INFINITY, f64::NEG_INFINITY), (f64::INFINITY, f64::NEG_INFINITY));
        self.path.iter().fold(init, |((x_lo, x_hi), (y_lo, y_hi)), &(x, y)| {
            ((x_lo.min(x), x_hi.max(x)), (y_lo.min(y), y_hi.max(y)))
        })
    }
}

/// LogLogView — MSD scatter and fitted power law for a log-log chart.
///
/// Fields
/// ------
/// - `observed`: `(lag, msd)` pairs as estimated.
/// - `fitted`: `(lag, fit.predict(lag))` at the same lags.
/// - `label`: legend text for the fitted line, e.g. `Linear Fit (Slope=0.98)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogLogView {
    pub observed: Vec<(f64, f64)>,
    pub fitted: Vec<(f64, f64)>,
    pub label: String,
}

impl LogLogView {
    pub fn new(curve: &MsdCurve, fit: &FitResult) -> Self {
        let observed: Vec<(f64, f64)> =
            curve.iter().map(|(lag, msd)| (lag as f64, msd)).collect();
        let fitted = observed.iter().map(|&(lag, _)| (lag, fit.predict(lag))).collect();
        LogLogView { observed, fitted, label: format!("Linear Fit (Slope={:.2})", fit.slope()) }
    }
}

/// Both plotting views of one analysis.
pub fn views(analysis: &DiffusionAnalysis) -> (TrajectoryView, LogLogView) {
    (
        TrajectoryView::new(analysis.trajectory()),
        LogLogView::new(analysis.curve(), analysis.fit()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diffusion::fit::fit_diffusion;

    fn line_analysis() -> DiffusionAnalysis {
        let traj =
            Trajectory::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]).unwrap();
        DiffusionAnalysis::from_trajectory(traj, Some(2)).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Summary lines use the fixed labels and two decimals.
    //
    // Given
    // -----
    // - The exact msd = lag² fit (D = 0.25, slope = 2).
    //
    // Expect
    // ------
    // - "Diffusion Coefficient: 0.25" and "Slope of log-log MSD plot: 2.00".
    fn summary_lines_are_rounded_to_two_decimals() {
        // Arrange
        let fit = fit_diffusion(&[1, 2], &[1.0, 4.0]).unwrap();

        // Act
        let mut buf = Vec::new();
        write_summary(&mut buf, &fit).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // Assert
        assert_eq!(text, "Diffusion Coefficient: 0.25\nSlope of log-log MSD plot: 2.00\n");
    }

    #[test]
    // Purpose
    // -------
    // Views expose endpoints, bounds, and a fitted line through the data.
    //
    // Given
    // -----
    // - The unit-step line analysis (exact power law).
    //
    // Expect
    // ------
    // - start (0,0), end (3,0), bounds ((0,3),(0,0)); fitted ≈ observed.
    fn views_expose_endpoints_and_fitted_line() {
        // Act
        let (traj_view, loglog) = views(&line_analysis());

        // Assert
        assert_eq!(traj_view.start, (0.0, 0.0));
        assert_eq!(traj_view.end, (3.0, 0.0));
        assert_eq!(traj_view.bounds(), ((0.0, 3.0), (0.0, 0.0)));
        assert_eq!(loglog.observed, vec![(1.0, 1.0), (2.0, 4.0)]);
        for (&(_, observed), &(_, fitted)) in loglog.observed.iter().zip(&loglog.fitted) {
            assert!((observed - fitted).abs() < 1e-9);
        }
        assert_eq!(loglog.label, "Linear Fit (Slope=2.00)");
    }
}
