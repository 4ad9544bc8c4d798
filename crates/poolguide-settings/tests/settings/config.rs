use std::fs;

use poolguide_core::{HotkeyAction, KeyChord};
use poolguide_settings::{AppConfig, ConfigError, SettingsError};
use tempfile::TempDir;

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");

    let mut config = AppConfig::new();
    config.last_profile = "club".to_string();
    config.queue_capacity = 32;
    config
        .keybindings
        .insert(HotkeyAction::ToggleOverlay, KeyChord::key("f10"));
    config.save_to_file(&path).unwrap();

    assert_eq!(AppConfig::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut config = AppConfig::new();
    config.profile_dir = Some(dir.path().join("profiles"));
    config.save_to_file(&path).unwrap();

    let loaded = AppConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.resolved_profile_dir().unwrap(), dir.path().join("profiles"));
}

#[test]
fn test_unknown_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.yaml");
    let err = AppConfig::new().save_to_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_partial_toml_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "last_profile = \"bar\"\n\n[keybindings]\nreset_pockets = \"ctrl+shift+r\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from_file(&path).unwrap();
    assert_eq!(config.last_profile, "bar");
    assert_eq!(config.queue_capacity, 256);
    assert_eq!(
        config.keybinding_map().get(&"CTRL+SHIFT+R".parse().unwrap()),
        Some(&HotkeyAction::ResetPockets)
    );
    assert_eq!(
        config.keybinding_map().get(&KeyChord::key("f8")),
        Some(&HotkeyAction::ToggleEditing)
    );
}

#[test]
fn test_load_or_default_without_file() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_file_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"queue_capacity": 0}"#).unwrap();
    assert!(AppConfig::load_from_file(&path).is_err());
}
