//! diffusion::trajectory — immutable 2D walk path.
//!
//! A [`Trajectory`] is an ordered sequence of N ≥ 1 finite `(x, y)` points
//! indexed by step number `0..N`. It is produced once by the walk generator
//! (or built from literal coordinates) and only read afterwards.
use crate::diffusion::errors::{DiffusionError, DiffusionResult};
use ndarray::Array1;

/// Trajectory — x/y coordinates of a 2D walk.
///
/// Fields
/// ------
/// - `x`, `y`: `Array1<f64>`
///   Coordinates by step index. Equal length N ≥ 1, all finite.
///
/// Notes
/// -----
/// - `point(0)` is the first recorded position, which for a generated walk
///   is the first cumulative increment rather than the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl Trajectory {
    /// Build a trajectory from coordinate arrays.
    ///
    /// # Errors
    /// - [`DiffusionError::CoordinateLengthMismatch`] if `x.len() != y.len()`.
    /// - [`DiffusionError::EmptyTrajectory`] if there are no points.
    /// - [`DiffusionError::NonFiniteCoordinate`] if any coordinate is NaN/±inf.
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> DiffusionResult<Self> {
        if x.len() != y.len() {
            return Err(DiffusionError::CoordinateLengthMismatch { x_len: x.len(), y_len: y.len() });
        }
        if x.is_empty() {
            return Err(DiffusionError::EmptyTrajectory);
        }
        for (index, (&xi, &yi)) in x.iter().zip(y.iter()).enumerate() {
            if !xi.is_finite() {
                return Err(DiffusionError::NonFiniteCoordinate { index, value: xi });
            }
            if !yi.is_finite() {
                return Err(DiffusionError::NonFiniteCoordinate { index, value: yi });
            }
        }
        Ok(Trajectory { x, y })
    }

    /// Build a trajectory from a literal list of `(x, y)` points.
    ///
    /// Same validation as [`Trajectory::new`].
    pub fn from_points(points: &[(f64, f64)]) -> DiffusionResult<Self> {
        let x = points.iter().map(|p| p.0).collect::<Array1<f64>>();
        let y = points.iter().map(|p| p.1).collect::<Array1<f64>>();
        Trajectory::new(x, y)
    }

    /// x coordinates by step.
    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    /// y coordinates by step.
    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    /// Number of points N.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false` for a constructed trajectory; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Point at step `index`, or `None` past the end.
    pub fn point(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.x.get(index)?, *self.y.get(index)?))
    }

    /// First recorded point.
    pub fn start(&self) -> (f64, f64) {
        (self.x[0], self.y[0])
    }

    /// Last recorded point.
    pub fn end(&self) -> (f64, f64) {
        let last = self.len() - 1;
        (self.x[last], self.y[last])
    }

    /// Iterate over `(x, y)` points in step order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().zip(self.y.iter()).map(|(&x, &y)| (x, y))
    }
}
