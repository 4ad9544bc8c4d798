//! Intent type definitions for the owner-thread queue.
//!
//! Intents describe what an off-thread callback wants to happen. They carry
//! no references to overlay state; the owner thread applies them in order.

use std::fmt;

use crate::input::{KeyChord, PointerEvent};

/// Work requested of the owner thread.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Flip between editing and click-through.
    ToggleEditing,
    /// Show or hide the whole overlay.
    ToggleOverlay,
    /// Save the current profile under this name.
    Save(String),
    /// Load the named profile.
    Load(String),
    /// Restore the six standard pockets.
    ResetPockets,
    /// A raw global hotkey, resolved against the configured keybindings.
    Hotkey(KeyChord),
    /// Pointer input captured by a low-level hook.
    Pointer(PointerEvent),
}

impl Intent {
    /// Short description for logging
    pub fn description(&self) -> String {
        match self {
            Intent::ToggleEditing => "toggle editing".to_string(),
            Intent::ToggleOverlay => "toggle overlay".to_string(),
            Intent::Save(name) => format!("save '{}'", name),
            Intent::Load(name) => format!("load '{}'", name),
            Intent::ResetPockets => "reset pockets".to_string(),
            Intent::Hotkey(chord) => format!("hotkey {}", chord),
            Intent::Pointer(event) => format!("pointer {:?}", event),
        }
    }

    /// Pointer moves arrive at a high rate and are not worth an info log line.
    pub fn is_high_frequency(&self) -> bool {
        matches!(self, Intent::Pointer(PointerEvent::Move { .. }))
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
