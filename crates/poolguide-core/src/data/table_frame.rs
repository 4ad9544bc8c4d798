//! Table frame: the unrotated, unscaled table rectangle plus the view
//! parameters (uniform scale and rotation) applied around its centre.

use super::Point;
use crate::constants::{
    CUE_BALL_X_FRACTION, CUE_BALL_Y_FRACTION, DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH,
    DEFAULT_TABLE_HEIGHT, DEFAULT_TABLE_WIDTH, MAX_SCALE, MIN_SCALE,
};

/// Geometric state of the table overlay.
///
/// The pivot is always derived from `origin`, `width` and `height`; it is
/// never stored. `scale` stays inside `[MIN_SCALE, MAX_SCALE]` after every
/// mutation. `rotation` accumulates without wrapping and is only normalized
/// on read through [`TableFrame::normalized_rotation`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableFrame {
    origin: Point,
    width: f64,
    height: f64,
    scale: f64,
    rotation: f64,
}

impl TableFrame {
    /// Creates a frame with identity scale and no rotation.
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    /// Creates the default-sized table centred on a display of the given size.
    pub fn centered(display_width: f64, display_height: f64) -> Self {
        let origin = Point::new(
            ((display_width - DEFAULT_TABLE_WIDTH) / 2.0).floor(),
            ((display_height - DEFAULT_TABLE_HEIGHT) / 2.0).floor(),
        );
        Self::new(origin, DEFAULT_TABLE_WIDTH, DEFAULT_TABLE_HEIGHT)
    }

    /// Builder-style scale, clamped.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.set_scale(scale);
        self
    }

    /// Builder-style rotation in degrees.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.set_rotation(rotation);
        self
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Raw accumulated rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Rotation folded into `[0, 360)`.
    pub fn normalized_rotation(&self) -> f64 {
        normalize_degrees(self.rotation)
    }

    /// Geometric centre of the table rectangle.
    pub fn pivot(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    /// Sets the scale, clamped to `[MIN_SCALE, MAX_SCALE]`.
    ///
    /// Non-finite values are ignored and the current scale is kept.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            tracing::warn!("Ignoring non-finite table scale {}", scale);
            return;
        }
        self.scale = clamp_scale(scale);
    }

    /// Multiplies the scale by `factor`, then clamps.
    pub fn scale_by(&mut self, factor: f64) {
        self.set_scale(self.scale * factor);
    }

    /// Sets the rotation in degrees. Non-finite values are ignored.
    pub fn set_rotation(&mut self, rotation: f64) {
        if !rotation.is_finite() {
            tracing::warn!("Ignoring non-finite table rotation {}", rotation);
            return;
        }
        self.rotation = rotation;
    }

    /// Adds `delta` degrees to the rotation.
    pub fn rotate_by(&mut self, delta: f64) {
        self.set_rotation(self.rotation + delta);
    }

    /// Moves the table rectangle (and therefore its pivot).
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.origin = self.origin.offset(dx, dy);
    }

    /// Replaces the rectangle, keeping scale and rotation.
    pub fn set_rect(&mut self, origin: Point, width: f64, height: f64) {
        self.origin = origin;
        self.width = width;
        self.height = height;
    }

    /// Table-local corners in drawing order: TL, TR, BR, BL.
    pub fn corners(&self) -> [Point; 4] {
        let Point { x, y } = self.origin;
        [
            Point::new(x, y),
            Point::new(x + self.width, y),
            Point::new(x + self.width, y + self.height),
            Point::new(x, y + self.height),
        ]
    }

    /// Six standard pocket positions: top-left, top-centre, top-right,
    /// bottom-left, bottom-centre, bottom-right.
    pub fn standard_pockets(&self) -> Vec<Point> {
        let Point { x, y } = self.origin;
        let mid_x = x + (self.width / 2.0).floor();
        let right = x + self.width;
        let bottom = y + self.height;
        vec![
            Point::new(x, y),
            Point::new(mid_x, y),
            Point::new(right, y),
            Point::new(x, bottom),
            Point::new(mid_x, bottom),
            Point::new(right, bottom),
        ]
    }

    /// Default cue ball spot on the head string side of the table.
    pub fn default_cue_ball(&self) -> Point {
        Point::new(
            self.origin.x + self.width * CUE_BALL_X_FRACTION,
            self.origin.y + self.height * CUE_BALL_Y_FRACTION,
        )
    }
}

impl Default for TableFrame {
    fn default() -> Self {
        Self::centered(DEFAULT_DISPLAY_WIDTH, DEFAULT_DISPLAY_HEIGHT)
    }
}

/// Clamps a scale factor to the supported range.
pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Folds an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let folded = angle.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}

/// True when two angles describe the same orientation, modulo 360.
pub fn rotations_equivalent(a: f64, b: f64, epsilon: f64) -> bool {
    let diff = normalize_degrees(a - b);
    diff <= epsilon || 360.0 - diff <= epsilon
}
