//! Pointer-driven editing of the table geometry.
//!
//! A press chooses at most one drag mode from the modifiers held at that
//! moment. Moves then edit the profile incrementally until a release brings
//! the controller back to [`ManipulationState::Idle`].
//!
//! | Modifiers at press        | Result                                   |
//! |---------------------------|------------------------------------------|
//! | alt (without ctrl)        | `MovingPocket(i)` for the nearest pocket |
//! | shift                     | `MovingTable`                            |
//! | ctrl + alt                | `Rotating`                               |
//! | ctrl                      | `Scaling`                                |
//! | anything else             | stays `Idle`                             |
//!
//! Wheel scaling with ctrl held is independent of the drag state.

use std::fmt;

use poolguide_core::constants::{POCKET_PICK_MARGIN, WHEEL_SCALE_STEP};
use poolguide_core::{GeometryError, GeometryProfile, Modifiers, Point};

use crate::transform::TableTransform;

/// Active drag mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManipulationState {
    #[default]
    Idle,
    MovingPocket(usize),
    MovingTable,
    Scaling,
    Rotating,
}

impl ManipulationState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ManipulationState::Idle)
    }

    /// True for drags that reshape the whole table. The trajectory overlay is
    /// hidden while one of these is active.
    pub fn is_table_edit(&self) -> bool {
        matches!(
            self,
            ManipulationState::MovingTable | ManipulationState::Scaling | ManipulationState::Rotating
        )
    }
}

impl fmt::Display for ManipulationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::MovingPocket(index) => write!(f, "MovingPocket({})", index),
            Self::MovingTable => write!(f, "MovingTable"),
            Self::Scaling => write!(f, "Scaling"),
            Self::Rotating => write!(f, "Rotating"),
        }
    }
}

/// Pointer positions recorded for the active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Where the drag started.
    pub start: Point,
    /// Position seen by the previous move event.
    pub last: Point,
    /// Sub-pixel table movement not yet applied.
    pub carry: Point,
}

/// State machine turning pointer input into geometry edits.
#[derive(Debug, Clone, Default)]
pub struct ManipulationController {
    state: ManipulationState,
    anchor: Option<DragAnchor>,
}

impl ManipulationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ManipulationState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    pub fn anchor(&self) -> Option<DragAnchor> {
        self.anchor
    }

    /// Index of the pocket being dragged, if any.
    pub fn active_pocket(&self) -> Option<usize> {
        match self.state {
            ManipulationState::MovingPocket(index) => Some(index),
            _ => None,
        }
    }

    /// Handles a pointer press.
    ///
    /// Only valid from `Idle`; pressing again mid-drag is rejected with
    /// [`GeometryError::InvalidTransition`] and leaves the active drag as is.
    /// Returns the state entered, which may still be `Idle`.
    pub fn press(
        &mut self,
        position: Point,
        modifiers: Modifiers,
        profile: &GeometryProfile,
    ) -> Result<ManipulationState, GeometryError> {
        if !self.state.is_idle() {
            return Err(GeometryError::InvalidTransition {
                current: self.state.to_string(),
                requested: format!("press at {}", position),
            });
        }

        let next = resolve_press(position, modifiers, profile)?;
        if !next.is_idle() {
            self.anchor = Some(DragAnchor {
                start: position,
                last: position,
                carry: Point::default(),
            });
            tracing::debug!("Drag started: {} at {}", next, position);
        }
        self.state = next;
        Ok(next)
    }

    /// Handles a pointer move. Returns `true` when the profile was edited.
    ///
    /// Pocket drags replace the pocket with the inverse-mapped pointer,
    /// snapped if enabled and otherwise truncated to whole pixels. Table moves, rotations and scaling are
    /// incremental against the previous move event.
    pub fn drag_to(
        &mut self,
        position: Point,
        profile: &mut GeometryProfile,
    ) -> Result<bool, GeometryError> {
        let Some(anchor) = self.anchor.as_mut() else {
            return Ok(false);
        };
        let last = anchor.last;
        anchor.last = position;
        let carry = anchor.carry;

        match self.state {
            ManipulationState::Idle => Ok(false),
            ManipulationState::MovingPocket(index) => {
                let transform = TableTransform::new(&profile.frame)?;
                let local = profile.pocket_position(transform.to_table(position));
                profile.set_pocket(index, local)?;
                Ok(true)
            }
            ManipulationState::MovingTable => {
                let wanted = position - last + carry;
                let applied = profile.translate_rigid(wanted.x, wanted.y);
                anchor.carry = wanted - applied;
                Ok(true)
            }
            ManipulationState::Rotating => {
                // The pivot is a fixed point of the transform, so its screen
                // position equals its table-local one.
                let pivot = profile.frame.pivot();
                let delta = pivot.angle_to_deg(&position) - pivot.angle_to_deg(&last);
                profile.frame.rotate_by(delta);
                Ok(true)
            }
            ManipulationState::Scaling => {
                let pivot = profile.frame.pivot();
                let last_distance = pivot.distance_to(&last);
                if last_distance > 0.0 {
                    let current_distance = pivot.distance_to(&position);
                    profile.frame.scale_by(current_distance / last_distance);
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
        }
    }

    /// Handles a pointer release. Returns `true` when a drag ended, which
    /// means the geometry may have changed.
    pub fn release(&mut self) -> bool {
        if self.state.is_idle() {
            return false;
        }
        tracing::debug!("Drag finished: {}", self.state);
        self.state = ManipulationState::Idle;
        self.anchor = None;
        true
    }

    /// Scales the table by 5% per wheel step while ctrl is held, in any state.
    /// Returns `true` when the scale was touched.
    pub fn wheel(steps: f64, modifiers: Modifiers, profile: &mut GeometryProfile) -> bool {
        if !modifiers.ctrl || steps == 0.0 || !steps.is_finite() {
            return false;
        }
        profile.frame.scale_by(1.0 + WHEEL_SCALE_STEP * steps);
        true
    }
}

/// Chooses the drag mode for a press without changing any state.
pub fn resolve_press(
    position: Point,
    modifiers: Modifiers,
    profile: &GeometryProfile,
) -> Result<ManipulationState, GeometryError> {
    if modifiers.alt && !modifiers.ctrl {
        let transform = TableTransform::new(&profile.frame)?;
        return Ok(pick_pocket(position, profile, &transform)
            .map(ManipulationState::MovingPocket)
            .unwrap_or(ManipulationState::Idle));
    }
    let state = if modifiers.shift {
        ManipulationState::MovingTable
    } else if modifiers.ctrl && modifiers.alt {
        ManipulationState::Rotating
    } else if modifiers.ctrl {
        ManipulationState::Scaling
    } else {
        ManipulationState::Idle
    };
    Ok(state)
}

/// Nearest pocket whose screen position is strictly within
/// `pocket_size + POCKET_PICK_MARGIN` pixels of `position`.
///
/// Linear scan; pocket lists are single digits long.
pub fn pick_pocket(
    position: Point,
    profile: &GeometryProfile,
    transform: &TableTransform,
) -> Option<usize> {
    let threshold = f64::from(profile.pocket_size) + POCKET_PICK_MARGIN;
    profile
        .pockets()
        .iter()
        .enumerate()
        .map(|(index, pocket)| (index, transform.to_screen(*pocket).distance_to(&position)))
        .filter(|(_, distance)| *distance < threshold)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}
