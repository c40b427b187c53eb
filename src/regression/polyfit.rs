//! regression::polyfit — ordinary least-squares polynomial fitting.
//!
//! Purpose
//! -------
//! Fit a polynomial of fixed degree to paired observations by ordinary least
//! squares, and evaluate the fitted polynomial. The diffusion fitter uses
//! this with degree 1 on log-transformed (lag, MSD) pairs.
//!
//! Key behaviors
//! -------------
//! - Build the Vandermonde design matrix in a `nalgebra::DMatrix`, with
//!   columns ordered from the highest power down to the constant term.
//! - Scale each column to unit 2-norm before the solve to keep the
//!   conditioning independent of the magnitude of `x`, then undo the scaling
//!   on the coefficients.
//! - Solve the least-squares problem through the thin SVD and reject rank
//!   deficient designs instead of returning a minimum-norm solution.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x.len() == y.len() ≥ degree + 1` and all values are finite; violations
//!   are reported as [`RegressionError`] before any allocation of the design.
//! - Coefficients are stored highest power first: `c[0]·x^d + … + c[d]`.
//!
//! Testing notes
//! -------------
//! - Unit tests recover exact lines and quadratics, check Horner evaluation,
//!   and exercise every error branch.
use crate::regression::errors::{RegressionError, RegressionResult};
use nalgebra::{DMatrix, DVector};

/// Polynomial — coefficients of a fitted polynomial, highest power first.
///
/// Fields
/// ------
/// - `coeffs`: `Vec<f64>`
///   `coeffs[k]` multiplies `x^(degree - k)`; the last entry is the
///   constant term. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Wrap an explicit coefficient vector (highest power first).
    ///
    /// An empty vector is treated as the zero polynomial `[0.0]`.
    pub fn new(coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            return Polynomial { coeffs: vec![0.0] };
        }
        Polynomial { coeffs }
    }

    /// Coefficients, highest power first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Degree of the polynomial (number of coefficients minus one).
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Evaluate the polynomial at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        polyval(&self.coeffs, x)
    }
}

/// Fit a degree-`degree` polynomial to `(x, y)` by ordinary least squares.
///
/// Parameters
/// ----------
/// - `x`: `&[f64]`
///   Abscissae. Finite, at least `degree + 1` values, and not all equal
///   when `degree ≥ 1`.
/// - `y`: `&[f64]`
///   Ordinates, same length as `x`, finite.
/// - `degree`: `usize`
///   Polynomial degree.
///
/// Returns
/// -------
/// `RegressionResult<Polynomial>`
///   - `Ok(poly)` with `degree + 1` coefficients, highest power first,
///     minimizing `Σᵢ (yᵢ − poly(xᵢ))²`.
///
/// Errors
/// ------
/// - `RegressionError::LengthMismatch` if `x.len() != y.len()`.
/// - `RegressionError::TooFewPoints` if `x.len() < degree + 1`.
/// - `RegressionError::NonFiniteInput` if any value is NaN/±∞.
/// - `RegressionError::SingularDesign` if the scaled design matrix is rank
///   deficient.
/// - `RegressionError::SolveFailed` if the SVD back-substitution fails.
///
/// Examples
/// --------
/// ```rust
/// use random_walk_msd::regression::polyfit;
///
/// let x = [0.0, 1.0, 2.0, 3.0];
/// let y = [1.0, 3.0, 5.0, 7.0];
/// let line = polyfit(&x, &y, 1).unwrap();
/// assert!((line.coefficients()[0] - 2.0).abs() < 1e-12);
/// assert!((line.coefficients()[1] - 1.0).abs() < 1e-12);
/// ```
pub fn polyfit(x: &[f64], y: &[f64], degree: usize) -> RegressionResult<Polynomial> {
    validate_fit_input(x, y, degree)?;

    let n = x.len();
    let ncols = degree + 1;
    let mut design = DMatrix::<f64>::zeros(n, ncols);
    fill_vandermonde(x, degree, &mut design);
    let scale = normalize_columns(&mut design);

    let rhs = DVector::from_column_slice(y);
    let svd = design.svd(true, true);
    let max_sv = svd.singular_values.iter().cloned().fold(0.0, f64::max);
    let tol = max_sv * (n.max(ncols) as f64) * f64::EPSILON;
    if svd.rank(tol) < ncols {
        return Err(RegressionError::SingularDesign);
    }

    let solution =
        svd.solve(&rhs, tol).map_err(|reason| RegressionError::SolveFailed(reason.to_string()))?;
    let coeffs = solution.iter().zip(&scale).map(|(c, s)| c / s).collect();
    Ok(Polynomial { coeffs })
}

/// Evaluate `c[0]·x^d + … + c[d]` with Horner's scheme.
///
/// An empty coefficient slice evaluates to `0.0`.
#[inline]
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

// ---- Helpers ----

fn validate_fit_input(x: &[f64], y: &[f64], degree: usize) -> RegressionResult<()> {
    if x.len() != y.len() {
        return Err(RegressionError::LengthMismatch { x_len: x.len(), y_len: y.len() });
    }
    if x.len() < degree + 1 {
        return Err(RegressionError::TooFewPoints { len: x.len(), degree });
    }
    for (index, &value) in x.iter().chain(y.iter()).enumerate() {
        if !value.is_finite() {
            return Err(RegressionError::NonFiniteInput { index: index % x.len(), value });
        }
    }
    Ok(())
}

/// Write `x_i^(degree - j)` into `design[(i, j)]`.
fn fill_vandermonde(x: &[f64], degree: usize, design: &mut DMatrix<f64>) {
    for (i, &xi) in x.iter().enumerate() {
        let mut power = 1.0;
        for j in (0..=degree).rev() {
            design[(i, j)] = power;
            power *= xi;
        }
    }
}

/// Divide each column by its 2-norm (or 1 for an all-zero column) and
/// return the divisors.
fn normalize_columns(design: &mut DMatrix<f64>) -> Vec<f64> {
    let (nrows, ncols) = design.shape();
    let mut scale = vec![1.0; ncols];
    for j in 0..ncols {
        let norm = design.column(j).norm();
        if norm > 0.0 {
            scale[j] = norm;
            for i in 0..nrows {
                design[(i, j)] /= norm;
            }
        }
    }
    scale
}
