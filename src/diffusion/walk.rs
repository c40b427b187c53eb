//! diffusion::walk — 2D random walks with Gaussian increments.
//!
//! Purpose
//! -------
//! Generate a [`Trajectory`] whose x and y coordinates are running sums of
//! independent standard-normal increments.
//!
//! Key behaviors
//! -------------
//! - Draw `steps` x-increments, then `steps` y-increments, from N(0, 1).
//! - Accumulate each axis separately, so `trajectory[0]` is the first
//!   increment pair rather than the origin.
//! - Take the random source as an argument ([`generate_walk`]) or build it
//!   from [`WalkOptions`] ([`RandomWalk`]); nothing is seeded implicitly.
//!
//! Invariants & assumptions
//! ------------------------
//! - `steps ≥ 1`; zero steps is rejected with
//!   [`DiffusionError::InvalidSteps`](crate::diffusion::errors::DiffusionError::InvalidSteps).
//! - Output length equals `steps` exactly.
//!
//! Testing notes
//! -------------
//! - Unit tests check the length contract, reproducibility under a fixed
//!   seed, the cumulative-sum structure, and rejection of `steps = 0`.
use crate::diffusion::errors::DiffusionResult;
use crate::diffusion::options::WalkOptions;
use crate::diffusion::trajectory::Trajectory;
use crate::diffusion::validation::validate_steps;
use log::debug;
use ndarray::Array1;
use rand::Rng;
use rand::distributions::Distribution;
use statrs::distribution::Normal;

/// Generate a `steps`-point 2D random walk from the given random source.
///
/// Parameters
/// ----------
/// - `steps`: `usize`
///   Number of increments (and points). Must be ≥ 1.
/// - `rng`: `&mut R`
///   Random source. Seeding is the caller's concern.
///
/// Returns
/// -------
/// `DiffusionResult<Trajectory>`
///   Trajectory of length `steps` with `x[k] = Σ_{i≤k} dxᵢ` and
///   `y[k] = Σ_{i≤k} dyᵢ`, where all increments are i.i.d. N(0, 1).
///
/// Errors
/// ------
/// - `DiffusionError::InvalidSteps` when `steps == 0`.
///
/// Examples
/// --------
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use random_walk_msd::diffusion::walk::generate_walk;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let walk = generate_walk(100, &mut rng).unwrap();
/// assert_eq!(walk.len(), 100);
/// ```
pub fn generate_walk<R: Rng + ?Sized>(steps: usize, rng: &mut R) -> DiffusionResult<Trajectory> {
    validate_steps(steps)?;
    let normal = Normal::new(0.0, 1.0).expect("mean = 0, std = 1");

    let dx: Vec<f64> = (0..steps).map(|_| normal.sample(&mut *rng)).collect();
    let dy: Vec<f64> = (0..steps).map(|_| normal.sample(&mut *rng)).collect();

    let x = cumulative_sum(&dx);
    let y = cumulative_sum(&dy);
    debug!("generated {steps}-step walk ending at ({:.3}, {:.3})", x[steps - 1], y[steps - 1]);

    Trajectory::new(x, y)
}

/// RandomWalk — walk generator bound to a [`WalkOptions`] seed policy.
///
/// Each call to [`RandomWalk::generate`] continues the same random stream,
/// so successive walks from one generator differ but the whole sequence is
/// reproducible when a seed is set.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    rng: rand::rngs::StdRng,
}

impl RandomWalk {
    pub fn new(opts: &WalkOptions) -> Self {
        RandomWalk { rng: opts.rng() }
    }

    /// Generate the next walk from this generator's stream.
    pub fn generate(&mut self, steps: usize) -> DiffusionResult<Trajectory> {
        generate_walk(steps, &mut self.rng)
    }
}

#[inline]
fn cumulative_sum(increments: &[f64]) -> Array1<f64> {
    increments
        .iter()
        .scan(0.0, |acc, &d| {
            *acc += d;
            Some(*acc)
        })
        .collect()
}
