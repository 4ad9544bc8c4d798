//! Input vocabulary shared by the shell and the overlay core.
//!
//! Pointer events carry screen-space coordinates and the modifier state
//! sampled by the shell. Key chords are parsed from strings such as
//! `"ctrl+s"` or `"F8"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::data::Point;

/// Modifier keys held when an event was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
    };
    pub const ALT: Modifiers = Modifiers {
        ctrl: false,
        alt: true,
        shift: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: true,
    };
    pub const CTRL_ALT: Modifiers = Modifiers {
        ctrl: true,
        alt: true,
        shift: false,
    };

    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.shift)
    }
}

/// Pointer input in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Press { position: Point, modifiers: Modifiers },
    Move { position: Point },
    Release { position: Point },
    /// Wheel rotation in notches (one notch = 120 units of a raw angle delta).
    Wheel { steps: f64, modifiers: Modifiers },
}

impl PointerEvent {
    /// Screen position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Press { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Release { position } => Some(*position),
            PointerEvent::Wheel { .. } => None,
        }
    }
}

/// Actions that can be bound to a global hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    ToggleEditing,
    ToggleOverlay,
    SaveConfig,
    LoadConfig,
    ResetPockets,
}

impl HotkeyAction {
    pub const ALL: [HotkeyAction; 5] = [
        HotkeyAction::ToggleEditing,
        HotkeyAction::ToggleOverlay,
        HotkeyAction::SaveConfig,
        HotkeyAction::LoadConfig,
        HotkeyAction::ResetPockets,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToggleEditing => "toggle_editing",
            Self::ToggleOverlay => "toggle_overlay",
            Self::SaveConfig => "save_config",
            Self::LoadConfig => "load_config",
            Self::ResetPockets => "reset_pockets",
        }
    }

    /// Chord bound to this action when nothing is configured.
    pub fn default_chord(&self) -> KeyChord {
        let text = match self {
            Self::ToggleEditing => "F8",
            Self::ToggleOverlay => "F9",
            Self::SaveConfig => "ctrl+s",
            Self::LoadConfig => "ctrl+o",
            Self::ResetPockets => "ctrl+r",
        };
        KeyChord::from_str(text).unwrap_or_else(|_| KeyChord::key(text))
    }
}

impl fmt::Display for HotkeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HotkeyAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HotkeyAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| format!("Unknown hotkey action: {}", s))
    }
}

/// A key plus modifiers, e.g. `ctrl+s`. The key name is stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub modifiers: Modifiers,
    pub key: String,
}

impl KeyChord {
    /// Chord without modifiers.
    pub fn key(key: &str) -> Self {
        Self {
            modifiers: Modifiers::NONE,
            key: key.trim().to_lowercase(),
        }
    }

    pub fn with_modifiers(modifiers: Modifiers, key: &str) -> Self {
        Self {
            modifiers,
            key: key.trim().to_lowercase(),
        }
    }
}

impl FromStr for KeyChord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = Modifiers::NONE;
        let mut key: Option<String> = None;

        for part in s.split('+').map(|p| p.trim().to_lowercase()) {
            match part.as_str() {
                "" => return Err(format!("Empty key in chord: {}", s)),
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                _ if key.is_some() => return Err(format!("Chord has more than one key: {}", s)),
                _ => key = Some(part),
            }
        }

        key.map(|key| KeyChord { modifiers, key })
            .ok_or_else(|| format!("Chord has no key: {}", s))
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.alt {
            f.write_str("alt+")?;
        }
        if self.modifiers.shift {
            f.write_str("shift+")?;
        }
        f.write_str(&self.key)
    }
}

impl Serialize for KeyChord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for KeyChord {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        KeyChord::from_str(&text).map_err(serde::de::Error::custom)
    }
}
