//! Shared constants for table geometry, interaction and rendering.

/// Lower bound for the table scale factor.
pub const MIN_SCALE: f64 = 0.1;
/// Upper bound for the table scale factor.
pub const MAX_SCALE: f64 = 5.0;

/// Scale change per wheel step while ctrl is held (5%).
pub const WHEEL_SCALE_STEP: f64 = 0.05;

/// Extra pick radius around a pocket marker, in pixels.
pub const POCKET_PICK_MARGIN: f64 = 10.0;

/// Half-length of the extended aim line, in pixels.
pub const AIM_LINE_EXTENSION: f64 = 2000.0;

/// Half-size of the editing crosshair, in pixels.
pub const CROSSHAIR_SIZE: f64 = 10.0;

/// Scales whose magnitude is below this cannot be inverted.
pub const DEGENERATE_SCALE_EPSILON: f64 = 1e-9;

pub const DEFAULT_TABLE_WIDTH: f64 = 800.0;
pub const DEFAULT_TABLE_HEIGHT: f64 = 400.0;
pub const DEFAULT_POCKET_SIZE: u32 = 20;
pub const DEFAULT_BALL_SIZE: u32 = 14;
pub const DEFAULT_GRID_SIZE: u32 = 10;

/// Display size assumed when the shell does not report one.
pub const DEFAULT_DISPLAY_WIDTH: f64 = 1920.0;
pub const DEFAULT_DISPLAY_HEIGHT: f64 = 1080.0;

/// Cue ball default position as fractions of the table rectangle.
pub const CUE_BALL_X_FRACTION: f64 = 0.25;
pub const CUE_BALL_Y_FRACTION: f64 = 0.5;

/// Capacity of the owner-thread intent queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Name of the profile used before anything is saved.
pub const DEFAULT_PROFILE_NAME: &str = "default";
