//! Render model for one overlay frame.
//!
//! [`build_scene`] turns the current profile and pointer into screen-space
//! primitives. The shell only has to draw what it receives; nothing here
//! knows about windows or paint APIs.

use serde::Serialize;

use poolguide_core::constants::CROSSHAIR_SIZE;
use poolguide_core::{ColorScheme, GeometryError, GeometryProfile, Point, Rgba};

use crate::manipulation::ManipulationState;
use crate::trajectory::{self, Segment, TrajectoryLines};
use crate::transform::TableTransform;

/// Transformed table rectangle, corners in TL, TR, BR, BL order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableOutline {
    pub corners: [Point; 4],
    pub color: Rgba,
}

/// A pocket zone drawn as a circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PocketMarker {
    pub index: usize,
    pub center: Point,
    pub radius: f64,
    pub color: Rgba,
    /// Set while this pocket is being dragged.
    pub active: bool,
}

/// Pointer crosshair shown while editing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Crosshair {
    pub horizontal: Segment,
    pub vertical: Segment,
}

impl Crosshair {
    pub fn at(position: Point) -> Self {
        Self {
            horizontal: Segment::new(
                position.offset(-CROSSHAIR_SIZE, 0.0),
                position.offset(CROSSHAIR_SIZE, 0.0),
            ),
            vertical: Segment::new(
                position.offset(0.0, -CROSSHAIR_SIZE),
                position.offset(0.0, CROSSHAIR_SIZE),
            ),
        }
    }
}

/// Everything to draw for one frame, in screen space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayScene {
    pub outline: Option<TableOutline>,
    pub pockets: Vec<PocketMarker>,
    pub trajectory: Option<TrajectoryLines>,
    pub crosshair: Option<Crosshair>,
    /// Radius of the cue and target markers. They are drawn in screen space,
    /// so the table scale does not apply.
    pub ball_radius: f64,
    /// Rebound layer toggle. Carried through for the shell; no geometry is
    /// produced for it.
    pub show_rebound: bool,
    pub colors: ColorScheme,
}

impl OverlayScene {
    /// Scene with nothing to draw, used while the overlay is hidden.
    pub fn empty(colors: ColorScheme) -> Self {
        Self {
            outline: None,
            pockets: Vec::new(),
            trajectory: None,
            crosshair: None,
            ball_radius: 0.0,
            show_rebound: false,
            colors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outline.is_none()
            && self.pockets.is_empty()
            && self.trajectory.is_none()
            && self.crosshair.is_none()
    }
}

/// Builds the scene for the current profile.
///
/// `target` is the screen-space aiming point, normally the last pointer
/// position. Without one no trajectory or crosshair is produced. The
/// trajectory is also suppressed while the table itself is being dragged,
/// scaled or rotated.
pub fn build_scene(
    profile: &GeometryProfile,
    cue_ball: Point,
    target: Option<Point>,
    state: ManipulationState,
    editing: bool,
) -> Result<OverlayScene, GeometryError> {
    let transform = TableTransform::new(&profile.frame)?;
    let scale = profile.frame.scale();
    let visibility = &profile.visibility;
    let colors = profile.colors;

    let outline = visibility.table_outline.then(|| {
        let corners = profile.frame.corners().map(|corner| transform.to_screen(corner));
        TableOutline {
            corners,
            color: colors.table,
        }
    });

    let pockets = if visibility.pocket_zones {
        let radius = f64::from(profile.pocket_size) * scale;
        let active = match state {
            ManipulationState::MovingPocket(index) => Some(index),
            _ => None,
        };
        profile
            .pockets()
            .iter()
            .enumerate()
            .map(|(index, pocket)| {
                let is_active = active == Some(index);
                PocketMarker {
                    index,
                    center: transform.to_screen(*pocket),
                    radius,
                    color: if is_active {
                        ColorScheme::ACTIVE_POCKET
                    } else {
                        colors.pocket
                    },
                    active: is_active,
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let trajectory = match target {
        Some(target) if visibility.trajectory && !state.is_table_edit() => Some(
            trajectory::predict(cue_ball, target, &transform, profile.pockets()),
        ),
        _ => None,
    };

    let crosshair = target.filter(|_| editing).map(Crosshair::at);

    Ok(OverlayScene {
        outline,
        pockets,
        trajectory,
        crosshair,
        ball_radius: f64::from(profile.ball_size),
        show_rebound: visibility.rebound,
        colors,
    })
}
