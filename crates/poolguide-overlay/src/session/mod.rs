//! Overlay session: the owner-thread state behind the overlay window.
//!
//! Holds the current profile, the manipulation controller, the mode flags
//! and the profile store. The shell feeds it pointer events and intents and
//! asks it for a scene each frame.
//!
//! This module is split into submodules:
//! - `file_io`: Save, load and list through the profile store
//! - `intents`: Applying queued intents and resolving hotkeys

mod file_io;
mod intents;

use std::collections::HashMap;
use std::fmt;

use poolguide_core::constants::DEFAULT_PROFILE_NAME;
use poolguide_core::{
    GeometryError, GeometryProfile, HotkeyAction, KeyChord, Point, PointerEvent, ProfileStore,
};

use crate::manipulation::{ManipulationController, ManipulationState};
use crate::scene::{build_scene, OverlayScene};

/// Explicit mode flags of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayMode {
    /// Editing receives pointer input; otherwise the overlay is click-through.
    pub editing: bool,
    /// Hidden overlays draw nothing.
    pub visible: bool,
}

impl Default for OverlayMode {
    fn default() -> Self {
        Self {
            editing: false,
            visible: true,
        }
    }
}

impl fmt::Display for OverlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            if self.editing { "editing" } else { "click-through" },
            if self.visible { "visible" } else { "hidden" }
        )
    }
}

/// Something the shell should refresh its widgets for.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeNotice {
    /// Table or pocket geometry changed.
    GeometryChanged,
    ProfileSaved(String),
    ProfileLoaded(String),
    ModeChanged(OverlayMode),
    /// The load hotkey fired; the shell should offer these names.
    LoadPickerRequested(Vec<String>),
    /// A save or load failed. The in-memory profile is unchanged.
    StoreFailed { name: String, reason: String },
}

/// Default hotkey table.
pub fn default_keybindings() -> HashMap<KeyChord, HotkeyAction> {
    HotkeyAction::ALL
        .into_iter()
        .map(|action| (action.default_chord(), action))
        .collect()
}

/// Owner-thread overlay state.
pub struct OverlaySession<S: ProfileStore> {
    profile: GeometryProfile,
    profile_name: String,
    store: S,
    controller: ManipulationController,
    mode: OverlayMode,
    cue_ball: Option<Point>,
    pointer: Option<Point>,
    keybindings: HashMap<KeyChord, HotkeyAction>,
    notices: Vec<ChangeNotice>,
}

impl<S: ProfileStore> OverlaySession<S> {
    /// Session starting in click-through mode with the given profile.
    pub fn new(store: S, profile: GeometryProfile) -> Self {
        Self {
            profile,
            profile_name: DEFAULT_PROFILE_NAME.to_string(),
            store,
            controller: ManipulationController::new(),
            mode: OverlayMode::default(),
            cue_ball: None,
            pointer: None,
            keybindings: default_keybindings(),
            notices: Vec::new(),
        }
    }

    /// Replaces the hotkey table.
    pub fn with_keybindings(mut self, keybindings: HashMap<KeyChord, HotkeyAction>) -> Self {
        self.keybindings = keybindings;
        self
    }

    pub fn profile(&self) -> &GeometryProfile {
        &self.profile
    }

    /// Direct field edits from the shell's settings widgets.
    pub fn profile_mut(&mut self) -> &mut GeometryProfile {
        &mut self.profile
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn mode(&self) -> OverlayMode {
        self.mode
    }

    pub fn state(&self) -> ManipulationState {
        self.controller.state()
    }

    pub fn keybindings(&self) -> &HashMap<KeyChord, HotkeyAction> {
        &self.keybindings
    }

    /// Last pointer position seen, editing or not.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Table-local cue ball position. Unless set explicitly it sits a quarter
    /// of the way along the table and follows the rectangle.
    pub fn cue_ball(&self) -> Point {
        self.cue_ball
            .unwrap_or_else(|| self.profile.frame.default_cue_ball())
    }

    /// Pins the cue ball, or with `None` returns it to the default spot.
    pub fn set_cue_ball(&mut self, position: Option<Point>) {
        self.cue_ball = position;
    }

    /// Feeds one pointer event. Returns `true` when the geometry changed.
    ///
    /// Outside editing mode only the pointer position is tracked.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<bool, GeometryError> {
        if let Some(position) = event.position() {
            self.pointer = Some(position);
        }
        if !self.mode.editing {
            return Ok(false);
        }

        match event {
            PointerEvent::Press {
                position,
                modifiers,
            } => {
                self.controller.press(position, modifiers, &self.profile)?;
                Ok(false)
            }
            PointerEvent::Move { position } => self.controller.drag_to(position, &mut self.profile),
            PointerEvent::Release { .. } => {
                let ended = self.controller.release();
                if ended {
                    self.notify(ChangeNotice::GeometryChanged);
                }
                Ok(ended)
            }
            PointerEvent::Wheel { steps, modifiers } => {
                let scaled = ManipulationController::wheel(steps, modifiers, &mut self.profile);
                if scaled {
                    self.notify(ChangeNotice::GeometryChanged);
                }
                Ok(scaled)
            }
        }
    }

    /// Puts back the six standard pockets. Any active drag is dropped first
    /// since its pocket index may no longer exist.
    pub fn reset_pockets(&mut self) {
        self.controller.release();
        self.profile.reset_pockets();
        self.notify(ChangeNotice::GeometryChanged);
    }

    /// Flips editing. Leaving editing ends any active drag.
    pub fn toggle_editing(&mut self) {
        self.mode.editing = !self.mode.editing;
        if !self.mode.editing && self.controller.release() {
            self.notify(ChangeNotice::GeometryChanged);
        }
        tracing::info!("Overlay mode: {}", self.mode);
        self.notify(ChangeNotice::ModeChanged(self.mode));
    }

    /// Shows or hides the whole overlay.
    pub fn toggle_visibility(&mut self) {
        self.mode.visible = !self.mode.visible;
        tracing::info!("Overlay mode: {}", self.mode);
        self.notify(ChangeNotice::ModeChanged(self.mode));
    }

    /// Scene for the current frame, aimed at the last pointer position.
    pub fn scene(&self) -> Result<OverlayScene, GeometryError> {
        self.scene_with_target(self.pointer)
    }

    /// Scene aimed at an explicit screen-space target.
    pub fn scene_with_target(&self, target: Option<Point>) -> Result<OverlayScene, GeometryError> {
        if !self.mode.visible {
            return Ok(OverlayScene::empty(self.profile.colors));
        }
        build_scene(
            &self.profile,
            self.cue_ball(),
            target,
            self.controller.state(),
            self.mode.editing,
        )
    }

    /// Pending notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<ChangeNotice> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, notice: ChangeNotice) {
        tracing::debug!("Change notice: {:?}", notice);
        self.notices.push(notice);
    }
}

impl<S: ProfileStore> fmt::Debug for OverlaySession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlaySession")
            .field("profile_name", &self.profile_name)
            .field("mode", &self.mode)
            .field("state", &self.controller.state())
            .field("pending_notices", &self.notices.len())
            .finish()
    }
}
