//! diffusion::options — configuration for walk generation and analysis runs.
//!
//! Purpose
//! -------
//! Collect the few knobs of the pipeline in plain data carriers so that call
//! sites pass explicit options instead of ad-hoc arguments: the RNG seed for
//! walk generation ([`WalkOptions`]) and the lag window of the MSD estimator
//! ([`AnalysisOptions`]).
//!
//! Key behaviors
//! -------------
//! - [`WalkOptions::rng`] turns the seed into an explicit, injectable
//!   `StdRng`: `Some(seed)` gives reproducible walks, `None` draws the seed
//!   from system entropy.
//! - [`AnalysisOptions`] bundles walk options with an optional `max_lag`;
//!   `None` means the estimator default `N / 2`.
//!
//! Invariants & assumptions
//! ------------------------
//! - These structs describe intent only; range checks on `max_lag` happen in
//!   the MSD estimator, where the trajectory length is known.
//! - No process-global random state is read or written here.
//!
//! Testing notes
//! -------------
//! - Unit tests check constructors/defaults and that equal seeds yield equal
//!   random streams.
use rand::SeedableRng;
use rand::rngs::StdRng;

/// WalkOptions — random-source configuration for walk generation.
///
/// Fields
/// ------
/// - `seed`: `Option<u64>`
///   `Some(seed)` yields reproducible walks; `None` seeds from entropy.
///
/// Notes
/// -----
/// - The default is `seed = None`, matching an unseeded interactive run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkOptions {
    /// Optional RNG seed for reproducibility.
    pub seed: Option<u64>,
}

impl WalkOptions {
    /// Construct options with an explicit seed policy.
    pub fn new(seed: Option<u64>) -> Self {
        WalkOptions { seed }
    }

    /// Options with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        WalkOptions { seed: Some(seed) }
    }

    /// Build the random source described by these options.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// AnalysisOptions — configuration for a full walk → MSD → fit run.
///
/// Fields
/// ------
/// - `walk`: [`WalkOptions`]
///   Random-source policy for the generated walk.
/// - `max_lag`: `Option<usize>`
///   Largest lag for the MSD estimator. `None` uses `N / 2`. Validated
///   against the trajectory length by the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalysisOptions {
    pub walk: WalkOptions,
    pub max_lag: Option<usize>,
}

impl AnalysisOptions {
    pub fn new(walk: WalkOptions, max_lag: Option<usize>) -> Self {
        AnalysisOptions { walk, max_lag }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    // Purpose
    // -------
    // Verify defaults: unseeded walk, default lag window.
    //
    // Expect
    // ------
    // - `seed == None` and `max_lag == None`.
    fn analysis_options_default_is_unseeded_with_default_lag() {
        let opts = AnalysisOptions::default();
        assert_eq!(opts.walk.seed, None);
        assert_eq!(opts.max_lag, None);
        assert_eq!(AnalysisOptions::new(WalkOptions::seeded(3), Some(5)).max_lag, Some(5));
    }

    #[test]
    // Purpose
    // -------
    // Ensure a fixed seed produces a reproducible random stream.
    //
    // Given
    // -----
    // - Two RNGs built from `WalkOptions::seeded(42)`.
    //
    // Expect
    // ------
    // - Identical first draws.
    fn seeded_options_build_identical_streams() {
        // Arrange
        let opts = WalkOptions::seeded(42);

        // Act
        let mut rng_a = opts.rng();
        let mut rng_b = opts.rng();
        let a: Vec<u64> = (0..4).map(|_| rng_a.gen()).collect();
        let b: Vec<u64> = (0..4).map(|_| rng_b.gen()).collect();

        // Assert
        assert_eq!(a, b);
    }
}
