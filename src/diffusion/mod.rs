//! diffusion — 2D random walks and their diffusion coefficient.
//!
//! Purpose
//! -------
//! Collect the numerical pipeline of the crate: Gaussian random-walk
//! generation, time-averaged mean squared displacement (MSD) estimation, and
//! a log-log least-squares fit that turns the MSD curve into a diffusion
//! coefficient and scaling exponent.
//!
//! Key behaviors
//! -------------
//! - [`generate_walk`] / [`RandomWalk`] build a [`Trajectory`] from i.i.d.
//!   N(0, 1) increments drawn from an injected random source.
//! - [`estimate_msd`] computes an [`MsdCurve`] over lags `1..=max_lag`
//!   (default `N / 2`).
//! - [`fit_diffusion`] regresses `ln(MSD)` on `ln(lag)` and reports a
//!   [`FitResult`] with `D = exp(intercept) / 4`.
//! - [`DiffusionAnalysis`] chains the three stages under
//!   [`AnalysisOptions`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Every value is created once and only read downstream.
//! - Stages validate their inputs via [`validation`] and return
//!   [`DiffusionResult`]; they never panic on user input.
//! - No process-global random state: reproducibility comes from
//!   [`WalkOptions::seed`].
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use random_walk_msd::diffusion::prelude::*;
//!
//!   let opts = AnalysisOptions::new(WalkOptions::seeded(1), None);
//!   let analysis = DiffusionAnalysis::run(1000, &opts).unwrap();
//!   println!("D = {:.2}", analysis.fit().diffusion_coefficient());
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each stage; `tests/integration_diffusion_pipeline.rs`
//!   checks statistical recovery of D ≈ 0.5 and slope ≈ 1 on long walks.

pub mod analysis;
pub mod errors;
pub mod fit;
pub mod msd;
pub mod options;
pub mod trajectory;
pub mod validation;
pub mod walk;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::analysis::DiffusionAnalysis;
pub use self::errors::{DiffusionError, DiffusionResult, ErrorKind};
pub use self::fit::{DiffusionRegime, FitResult, fit_curve, fit_diffusion};
pub use self::msd::{MsdCurve, estimate_msd};
pub use self::options::{AnalysisOptions, WalkOptions};
pub use self::trajectory::Trajectory;
pub use self::walk::{RandomWalk, generate_walk};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::analysis::DiffusionAnalysis;
    pub use super::errors::{DiffusionError, DiffusionResult};
    pub use super::fit::{FitResult, fit_diffusion};
    pub use super::msd::{MsdCurve, estimate_msd};
    pub use super::options::{AnalysisOptions, WalkOptions};
    pub use super::trajectory::Trajectory;
    pub use super::walk::generate_walk;
}
