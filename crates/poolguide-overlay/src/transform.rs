//! Table transform and its inverse.
//!
//! Maps between table-local coordinates (the unrotated, unscaled table
//! rectangle) and screen coordinates (where the pointer and the renderer
//! live).
//!
//! The forward map is composed as a single homogeneous matrix:
//!
//! ```text
//! screen = T(pivot) · R(rotation) · S(scale) · T(-pivot) · table
//! ```
//!
//! i.e. move the pivot to the origin, scale uniformly, rotate, move back.
//! The inverse is obtained by inverting that matrix, not by rebuilding it
//! from negated parameters, so both directions always agree.

use std::fmt;

use nalgebra::{Matrix3, Point2, Vector2};
use poolguide_core::constants::DEGENERATE_SCALE_EPSILON;
use poolguide_core::{GeometryError, Point, TableFrame};

/// Forward and inverse affine maps for one [`TableFrame`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableTransform {
    forward: Matrix3<f64>,
    inverse: Matrix3<f64>,
    pivot: Point,
}

impl TableTransform {
    /// Builds the transform for `frame`.
    ///
    /// A zero, near-zero or non-finite scale cannot be inverted and is
    /// reported as [`GeometryError::PreconditionViolated`]. Clamping in
    /// [`TableFrame`] keeps this unreachable in normal operation.
    pub fn new(frame: &TableFrame) -> Result<Self, GeometryError> {
        let scale = frame.scale();
        if !scale.is_finite() || scale.abs() < DEGENERATE_SCALE_EPSILON {
            return Err(GeometryError::PreconditionViolated {
                reason: format!("table scale {} is not invertible", scale),
            });
        }

        let pivot = frame.pivot();
        let center = Vector2::new(pivot.x, pivot.y);
        let forward = Matrix3::new_translation(&center)
            * Matrix3::new_rotation(frame.rotation().to_radians())
            * Matrix3::new_nonuniform_scaling(&Vector2::new(scale, scale))
            * Matrix3::new_translation(&-center);

        let inverse = forward
            .try_inverse()
            .ok_or_else(|| GeometryError::PreconditionViolated {
                reason: "table transform matrix is singular".to_string(),
            })?;

        Ok(Self {
            forward,
            inverse,
            pivot,
        })
    }

    /// Table-local → screen.
    pub fn to_screen(&self, point: Point) -> Point {
        apply(&self.forward, point)
    }

    /// Screen → table-local.
    pub fn to_table(&self, point: Point) -> Point {
        apply(&self.inverse, point)
    }

    /// Maps a slice of table-local points to screen space.
    pub fn points_to_screen(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|p| self.to_screen(*p)).collect()
    }

    /// The pivot. It is a fixed point of the transform, so it is the same in
    /// both spaces.
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.forward
    }

    pub fn inverse_matrix(&self) -> &Matrix3<f64> {
        &self.inverse
    }
}

impl fmt::Display for TableTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.forward;
        write!(
            f,
            "[{:.4} {:.4} {:.2}; {:.4} {:.4} {:.2}] about {}",
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
            self.pivot
        )
    }
}

fn apply(matrix: &Matrix3<f64>, point: Point) -> Point {
    let mapped = matrix.transform_point(&Point2::new(point.x, point.y));
    Point::new(mapped.x, mapped.y)
}
