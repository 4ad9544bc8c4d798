//! Aim line and pocket guide construction.
//!
//! Pure functions: nothing here mutates overlay state. Every output is in
//! screen space so the shell can draw it directly.

use serde::Serialize;

use poolguide_core::constants::AIM_LINE_EXTENSION;
use poolguide_core::Point;

use crate::transform::TableTransform;

/// A straight screen-space segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }
}

/// Guide lines for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryLines {
    /// Cue ball, mapped to screen space.
    pub cue_ball: Point,
    /// Aiming reticle, exactly as supplied.
    pub target: Point,
    /// Cue-to-target direction, extended both ways around the cue ball.
    pub aim_line: Segment,
    /// One segment per pocket, from the pocket to the target.
    pub pocket_lines: Vec<Segment>,
}

/// Builds the guide lines with the default aim-line extension.
///
/// `cue_ball` and `pockets` are table-local; `target` is already in screen
/// space and is used as-is. No collision, occlusion or rebound is computed.
pub fn predict(
    cue_ball: Point,
    target: Point,
    transform: &TableTransform,
    pockets: &[Point],
) -> TrajectoryLines {
    predict_with_extension(cue_ball, target, transform, pockets, AIM_LINE_EXTENSION)
}

/// [`predict`] with an explicit aim-line half-length.
pub fn predict_with_extension(
    cue_ball: Point,
    target: Point,
    transform: &TableTransform,
    pockets: &[Point],
    extension: f64,
) -> TrajectoryLines {
    let cue_screen = transform.to_screen(cue_ball);
    let pocket_lines = pockets
        .iter()
        .map(|pocket| Segment::new(transform.to_screen(*pocket), target))
        .collect();

    TrajectoryLines {
        cue_ball: cue_screen,
        target,
        aim_line: extend_aim_line(cue_screen, target, extension),
        pocket_lines,
    }
}

/// Extends the cue→target direction by `length` on both sides of the cue.
///
/// The direction comes from `atan2` of the raw segment and the endpoints are
/// placed with `cos`/`sin`, so the result does not depend on how far the
/// target is from the cue. When cue and target coincide the direction
/// degenerates to angle 0 (a horizontal line).
pub fn extend_aim_line(cue: Point, target: Point, length: f64) -> Segment {
    let angle = (target.y - cue.y).atan2(target.x - cue.x);
    let (sin, cos) = angle.sin_cos();
    Segment::new(
        Point::new(cue.x - cos * length, cue.y - sin * length),
        Point::new(cue.x + cos * length, cue.y + sin * length),
    )
}
