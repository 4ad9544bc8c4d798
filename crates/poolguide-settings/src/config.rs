//! Application configuration for PoolGuide
//!
//! Settings that are not part of any geometry profile: hotkeys, the last
//! profile used, where profiles live and how large the intent queue is.
//! Supports JSON and TOML files, chosen by extension.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use poolguide_core::constants::{
    DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH, DEFAULT_PROFILE_NAME, DEFAULT_QUEUE_CAPACITY,
};
use poolguide_core::{validate_profile_name, HotkeyAction, KeyChord};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// File name of the configuration inside the profile directory.
pub const CONFIG_FILE_NAME: &str = "settings.toml";

/// Display the overlay covers, used to centre the default table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub width: f64,
    pub height: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_DISPLAY_WIDTH,
            height: DEFAULT_DISPLAY_HEIGHT,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Profile loaded at startup
    pub last_profile: String,
    /// Profile directory; the default location when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_dir: Option<PathBuf>,
    /// Intents buffered between hook callbacks and the owner thread
    pub queue_capacity: usize,
    /// Chord per hotkey action. Actions left out keep their default chord.
    pub keybindings: BTreeMap<HotkeyAction, KeyChord>,
    pub display: DisplaySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            last_profile: DEFAULT_PROFILE_NAME.to_string(),
            profile_dir: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            keybindings: HotkeyAction::ALL
                .into_iter()
                .map(|action| (action, action.default_chord()))
                .collect(),
            display: DisplaySettings::default(),
        }
    }
}

impl AppConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let mut config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        config.fill_missing_bindings();
        config.validate()?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "queue_capacity".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        if !(self.display.width > 0.0 && self.display.height > 0.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "display".to_string(),
                value: format!("{}x{}", self.display.width, self.display.height),
            }
            .into());
        }

        if validate_profile_name(&self.last_profile).is_err() {
            return Err(SettingsError::InvalidSetting {
                key: "last_profile".to_string(),
                reason: format!("'{}' is not a usable profile name", self.last_profile),
            });
        }

        let mut seen: HashMap<&KeyChord, HotkeyAction> = HashMap::new();
        for (action, chord) in &self.keybindings {
            if let Some(first) = seen.insert(chord, *action) {
                return Err(ConfigError::DuplicateBinding {
                    chord: chord.to_string(),
                    first: first.to_string(),
                    second: action.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Chord lookup table for the overlay session.
    pub fn keybinding_map(&self) -> HashMap<KeyChord, HotkeyAction> {
        self.keybindings
            .iter()
            .map(|(action, chord)| (chord.clone(), *action))
            .collect()
    }

    /// Profile directory, falling back to `~/.pool-overlay`.
    pub fn resolved_profile_dir(&self) -> SettingsResult<PathBuf> {
        self.profile_dir
            .clone()
            .or_else(crate::store::JsonProfileStore::default_dir)
            .ok_or_else(|| SettingsError::ConfigDirectory("no home directory".to_string()))
    }

    fn fill_missing_bindings(&mut self) {
        for action in HotkeyAction::ALL {
            self.keybindings
                .entry(action)
                .or_insert_with(|| action.default_chord());
        }
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
