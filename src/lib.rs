//! random_walk_msd — diffusion coefficients from simulated 2D random walks.
//!
//! Purpose
//! -------
//! Serve as the crate root for the random-walk diffusion toolkit: simulate a
//! two-dimensional Gaussian random walk, estimate its mean squared
//! displacement (MSD) over a range of time lags, and recover a diffusion
//! coefficient and scaling exponent from a log-log least-squares fit.
//!
//! Key behaviors
//! -------------
//! - [`diffusion`] holds the numerical pipeline (walk → MSD → fit) and its
//!   error, validation, and options types.
//! - [`regression`] provides the ordinary least-squares polynomial fit the
//!   diffusion fitter delegates to.
//! - [`report`] formats the console summary and prepares point lists for
//!   plotting; [`plot`] renders them to an SVG figure.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work lives in [`diffusion`] and [`regression`];
//!   [`report`], [`plot`], and the `random-walk-msd` binary are presentation
//!   glue with no algorithmic content.
//! - Computations are single-threaded, synchronous, and complete-or-fail.
//! - Randomness is always injected; the crate keeps no global RNG state.
//!
//! Conventions
//! -----------
//! - MSD follows the 2D convention MSD(t) ≈ 4·D·t, so
//!   `D = exp(intercept) / 4` for the fitted line `ln MSD = α ln t + intercept`.
//! - Errors are reported through [`diffusion::DiffusionError`], classified
//!   as invalid arguments or domain errors.
//!
//! Testing notes
//! -------------
//! - Unit tests sit at the bottom of each module; the end-to-end pipeline
//!   is covered in `tests/integration_diffusion_pipeline.rs`.

pub mod diffusion;
pub mod plot;
pub mod regression;
pub mod report;
