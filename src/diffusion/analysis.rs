//! diffusion::analysis — walk → MSD → fit in one call.
//!
//! [`DiffusionAnalysis`] runs the three stages in sequence and keeps every
//! intermediate result, so presentation code can plot the walk, the MSD
//! curve, and the fitted line from a single value. Each stage either
//! completes or returns its error; there are no partial results.
use crate::diffusion::errors::DiffusionResult;
use crate::diffusion::fit::{FitResult, fit_curve};
use crate::diffusion::msd::{MsdCurve, estimate_msd};
use crate::diffusion::options::AnalysisOptions;
use crate::diffusion::trajectory::Trajectory;
use crate::diffusion::validation::validate_steps;
use crate::diffusion::walk::generate_walk;
use log::debug;

/// DiffusionAnalysis — trajectory, MSD curve, and log-log fit of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffusionAnalysis {
    trajectory: Trajectory,
    curve: MsdCurve,
    fit: FitResult,
}

impl DiffusionAnalysis {
    /// Generate a `steps`-point walk under `opts` and analyze it.
    ///
    /// # Errors
    /// - `InvalidSteps` if `steps == 0`.
    /// - `InvalidMaxLag` if the lag window is empty for this walk length
    ///   (in particular `steps == 1` with the default window).
    /// - `NonPositiveMsd` / `DegenerateFit` from the log-log fit.
    pub fn run(steps: usize, opts: &AnalysisOptions) -> DiffusionResult<Self> {
        validate_steps(steps)?;
        debug!("running diffusion analysis: steps = {steps}, options = {opts:?}");
        let mut rng = opts.walk.rng();
        let trajectory = generate_walk(steps, &mut rng)?;
        DiffusionAnalysis::from_trajectory(trajectory, opts.max_lag)
    }

    /// Analyze an existing trajectory (deterministic stages only).
    pub fn from_trajectory(trajectory: Trajectory, max_lag: Option<usize>) -> DiffusionResult<Self> {
        let curve = estimate_msd(&trajectory, max_lag)?;
        let fit = fit_curve(&curve)?;
        Ok(DiffusionAnalysis { trajectory, curve, fit })
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn curve(&self) -> &MsdCurve {
        &self.curve
    }

    pub fn fit(&self) -> &FitResult {
        &self.fit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diffusion::errors::DiffusionError;
    use crate::diffusion::options::WalkOptions;

    #[test]
    // Purpose
    // -------
    // A seeded run is reproducible end to end.
    //
    // Given
    // -----
    // - Two runs with seed 5, 200 steps, default window.
    //
    // Expect
    // ------
    // - Equal analyses; curve has 100 lags.
    fn run_is_reproducible_with_seed() {
        let opts = AnalysisOptions::new(WalkOptions::seeded(5), None);
        let a = DiffusionAnalysis::run(200, &opts).expect("seeded run");
        let b = DiffusionAnalysis::run(200, &opts).expect("seeded run");
        assert_eq!(a, b);
        assert_eq!(a.curve().max_lag(), 100);
        assert_eq!(a.trajectory().len(), 200);
    }

    #[test]
    // Purpose
    // -------
    // Degenerate step counts fail with invalid-argument errors.
    //
    // Expect
    // ------
    // - steps = 0 → `InvalidSteps`; steps = 1 → `InvalidMaxLag` (default
    //   window N / 2 = 0).
    fn run_rejects_degenerate_step_counts() {
        let opts = AnalysisOptions::new(WalkOptions::seeded(1), None);
        assert_eq!(
            DiffusionAnalysis::run(0, &opts),
            Err(DiffusionError::InvalidSteps { steps: 0 })
        );
        assert_eq!(
            DiffusionAnalysis::run(1, &opts),
            Err(DiffusionError::InvalidMaxLag { max_lag: 0, len: 1 })
        );
    }

    #[test]
    // Purpose
    // -------
    // `from_trajectory` chains MSD and fit on literal data.
    //
    // Given
    // -----
    // - The unit-step line of 4 points with max_lag = 2.
    //
    // Expect
    // ------
    // - MSD [1, 4] and slope 2.
    fn from_trajectory_runs_deterministic_stages() {
        let traj =
            Trajectory::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]).unwrap();
        let analysis = DiffusionAnalysis::from_trajectory(traj, Some(2)).unwrap();
        assert_eq!(analysis.curve().msd(), &[1.0, 4.0]);
        assert!((analysis.fit().slope() - 2.0).abs() < 1e-12);
    }
}
