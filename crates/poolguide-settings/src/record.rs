//! On-disk form of a geometry profile.
//!
//! ```json
//! {
//!   "table_rect": {"x": 560, "y": 340, "width": 800, "height": 400},
//!   "pockets": [{"x": 560, "y": 340}, ...],
//!   "scale_factor": 1.0,
//!   "rotation_angle": 0.0,
//!   "pocket_size": 20,
//!   "ball_size": 14,
//!   "colors": {"table": [0, 128, 0, 100], ...},
//!   "visibility": {"table_outline": true, ...},
//!   "snap_to_grid": false,
//!   "grid_size": 10
//! }
//! ```
//!
//! Every key is optional on read. A missing key takes its default, and a
//! missing `pockets` list is rebuilt from the table rectangle. Every key is
//! written. Rectangle and pocket coordinates are whole pixels: they are
//! written as JSON integers, and fractional numbers in older files are
//! rounded on read.

use serde::{de, Deserialize, Deserializer, Serialize};

use poolguide_core::{ColorScheme, GeometryProfile, Point, TableFrame, Visibility};

fn read_pixel<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(de::Error::custom(format!("invalid coordinate {}", value)));
    }
    Ok(value.round() as i64)
}

fn to_pixel(value: f64) -> i64 {
    value.round() as i64
}

/// A stored point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PointRecord {
    #[serde(deserialize_with = "read_pixel")]
    pub x: i64,
    #[serde(deserialize_with = "read_pixel")]
    pub y: i64,
}

impl From<Point> for PointRecord {
    fn from(point: Point) -> Self {
        Self {
            x: to_pixel(point.x),
            y: to_pixel(point.y),
        }
    }
}

impl From<PointRecord> for Point {
    fn from(record: PointRecord) -> Self {
        Point::new(record.x as f64, record.y as f64)
    }
}

/// The unscaled, unrotated table rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectRecord {
    #[serde(deserialize_with = "read_pixel")]
    pub x: i64,
    #[serde(deserialize_with = "read_pixel")]
    pub y: i64,
    #[serde(deserialize_with = "read_pixel")]
    pub width: i64,
    #[serde(deserialize_with = "read_pixel")]
    pub height: i64,
}

impl Default for RectRecord {
    fn default() -> Self {
        Self::from(&TableFrame::default())
    }
}

impl From<&TableFrame> for RectRecord {
    fn from(frame: &TableFrame) -> Self {
        Self {
            x: to_pixel(frame.origin().x),
            y: to_pixel(frame.origin().y),
            width: to_pixel(frame.width()),
            height: to_pixel(frame.height()),
        }
    }
}

/// A geometry profile as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    pub table_rect: RectRecord,
    pub pockets: Option<Vec<PointRecord>>,
    pub scale_factor: f64,
    pub rotation_angle: f64,
    pub pocket_size: u32,
    pub ball_size: u32,
    pub colors: ColorScheme,
    pub visibility: Visibility,
    pub snap_to_grid: bool,
    pub grid_size: u32,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        let mut record = Self::from(&GeometryProfile::default());
        record.pockets = None;
        record
    }
}

impl From<&GeometryProfile> for ProfileRecord {
    fn from(profile: &GeometryProfile) -> Self {
        Self {
            table_rect: RectRecord::from(&profile.frame),
            pockets: Some(profile.pockets().iter().copied().map(PointRecord::from).collect()),
            scale_factor: profile.frame.scale(),
            rotation_angle: profile.frame.rotation(),
            pocket_size: profile.pocket_size,
            ball_size: profile.ball_size,
            colors: profile.colors,
            visibility: profile.visibility,
            snap_to_grid: profile.snap_to_grid,
            grid_size: profile.grid_size,
        }
    }
}

impl ProfileRecord {
    /// Builds the in-memory profile.
    ///
    /// Fails with a reason when the rectangle has no area. The scale is
    /// clamped into range rather than rejected.
    pub fn into_profile(self) -> Result<GeometryProfile, String> {
        let rect = self.table_rect;
        if rect.width <= 0 || rect.height <= 0 {
            return Err(format!(
                "table_rect must have a positive size, got {}x{}",
                rect.width, rect.height
            ));
        }

        let frame = TableFrame::new(
            Point::new(rect.x as f64, rect.y as f64),
            rect.width as f64,
            rect.height as f64,
        )
            .with_scale(self.scale_factor)
            .with_rotation(self.rotation_angle);
        let mut profile = GeometryProfile::from_frame(frame);
        if let Some(pockets) = self.pockets {
            profile.set_pockets(pockets.into_iter().map(Point::from).collect());
        }
        profile.pocket_size = self.pocket_size;
        profile.ball_size = self.ball_size;
        profile.colors = self.colors;
        profile.visibility = self.visibility;
        profile.snap_to_grid = self.snap_to_grid;
        profile.grid_size = self.grid_size;
        Ok(profile)
    }
}
