//! regression — least-squares polynomial fitting.
//!
//! Purpose
//! -------
//! Host the generic numerical routine behind the log-log diffusion fit:
//! an ordinary least-squares polynomial fit ([`polyfit`]) backed by
//! `nalgebra`'s SVD, and Horner evaluation ([`polyval`]) for drawing fitted
//! curves.
//!
//! Conventions
//! -----------
//! - Coefficients are ordered highest power first.
//! - Failures are reported as [`RegressionError`]; callers in other subtrees
//!   map them into their own error types.

pub mod errors;
pub mod polyfit;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{RegressionError, RegressionResult};
pub use self::polyfit::{Polynomial, polyfit, polyval};
