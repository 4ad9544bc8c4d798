//! Geometry profile: everything the overlay needs to redraw a saved setup.

use serde::{Deserialize, Serialize};

use super::{Point, TableFrame};
use crate::constants::{DEFAULT_BALL_SIZE, DEFAULT_GRID_SIZE, DEFAULT_POCKET_SIZE};
use crate::error::GeometryError;

/// RGBA colour, serialized as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub fn r(&self) -> u8 {
        self.0[0]
    }

    pub fn g(&self) -> u8 {
        self.0[1]
    }

    pub fn b(&self) -> u8 {
        self.0[2]
    }

    pub fn a(&self) -> u8 {
        self.0[3]
    }
}

/// Overlay colours. Missing keys in a stored profile fall back per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub table: Rgba,
    pub pocket: Rgba,
    pub guide: Rgba,
    pub ball: Rgba,
    pub warning: Rgba,
    pub success: Rgba,
}

impl ColorScheme {
    /// Highlight used for the pocket currently being dragged.
    pub const ACTIVE_POCKET: Rgba = Rgba::new(255, 128, 0, 200);
    /// Fill of the target marker.
    pub const TARGET_MARKER: Rgba = Rgba::new(200, 200, 0, 180);
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            table: Rgba::new(0, 128, 0, 100),
            pocket: Rgba::new(255, 255, 0, 150),
            guide: Rgba::new(0, 255, 0, 200),
            ball: Rgba::new(255, 255, 255, 200),
            warning: Rgba::new(255, 0, 0, 200),
            success: Rgba::new(0, 255, 128, 200),
        }
    }
}

/// Which overlay layers are drawn.
///
/// `rebound` is carried and persisted but no layer is produced for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visibility {
    pub table_outline: bool,
    pub pocket_zones: bool,
    pub trajectory: bool,
    pub rebound: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            table_outline: true,
            pocket_zones: true,
            trajectory: true,
            rebound: true,
        }
    }
}

/// Named bundle of table geometry and appearance.
///
/// Pockets are table-local points. Their count only changes through
/// [`GeometryProfile::reset_pockets`], [`GeometryProfile::set_pockets`] or a
/// profile load; geometry edits never resize the list.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryProfile {
    pub frame: TableFrame,
    pockets: Vec<Point>,
    pub pocket_size: u32,
    pub ball_size: u32,
    pub colors: ColorScheme,
    pub visibility: Visibility,
    pub snap_to_grid: bool,
    pub grid_size: u32,
}

impl GeometryProfile {
    /// Default profile for a display of the given size, with six pockets.
    pub fn centered(display_width: f64, display_height: f64) -> Self {
        Self::from_frame(TableFrame::centered(display_width, display_height))
    }

    /// Default appearance around an existing frame, with six pockets.
    pub fn from_frame(frame: TableFrame) -> Self {
        let pockets = frame.standard_pockets();
        Self {
            frame,
            pockets,
            pocket_size: DEFAULT_POCKET_SIZE,
            ball_size: DEFAULT_BALL_SIZE,
            colors: ColorScheme::default(),
            visibility: Visibility::default(),
            snap_to_grid: false,
            grid_size: DEFAULT_GRID_SIZE,
        }
    }

    pub fn pockets(&self) -> &[Point] {
        &self.pockets
    }

    pub fn pocket(&self, index: usize) -> Option<Point> {
        self.pockets.get(index).copied()
    }

    /// Replaces one pocket's table-local position.
    pub fn set_pocket(&mut self, index: usize, position: Point) -> Result<(), GeometryError> {
        let len = self.pockets.len();
        let slot = self
            .pockets
            .get_mut(index)
            .ok_or(GeometryError::PocketIndexOutOfRange { index, len })?;
        *slot = position;
        Ok(())
    }

    /// Replaces the whole pocket list. This is the only way to change its length
    /// apart from [`GeometryProfile::reset_pockets`].
    pub fn set_pockets(&mut self, pockets: Vec<Point>) {
        self.pockets = pockets;
    }

    /// Puts back the six standard pockets around the current rectangle.
    pub fn reset_pockets(&mut self) {
        self.pockets = self.frame.standard_pockets();
        tracing::debug!("Pockets reset to {} standard positions", self.pockets.len());
    }

    /// Moves the table and every pocket by the same delta, so the whole
    /// layout shifts rigidly on screen.
    ///
    /// The delta is rounded to whole pixels; the applied delta is returned.
    pub fn translate_rigid(&mut self, dx: f64, dy: f64) -> Point {
        let applied = Point::new(dx.round(), dy.round());
        self.frame.translate(applied.x, applied.y);
        for pocket in &mut self.pockets {
            *pocket = pocket.offset(applied.x, applied.y);
        }
        applied
    }

    /// Position a dragged pocket is stored at: snapped to the grid when
    /// enabled, otherwise truncated to whole pixels.
    pub fn pocket_position(&self, point: Point) -> Point {
        if self.snap_to_grid && self.grid_size > 0 {
            self.snap(point)
        } else {
            Point::new(point.x.trunc(), point.y.trunc())
        }
    }

    /// Rounds a table-local point to the grid when snapping is enabled.
    ///
    /// A zero grid size disables snapping.
    pub fn snap(&self, point: Point) -> Point {
        if !self.snap_to_grid || self.grid_size == 0 {
            return point;
        }
        let grid = f64::from(self.grid_size);
        Point::new(
            (point.x / grid).round() * grid,
            (point.y / grid).round() * grid,
        )
    }
}

impl Default for GeometryProfile {
    fn default() -> Self {
        Self::from_frame(TableFrame::default())
    }
}
