//! Headless front end: load a profile and print the scene it produces.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use poolguide_core::{GeometryProfile, Point, ProfileError, ProfileStore};
use poolguide_overlay::{OverlayScene, OverlaySession};
use poolguide_settings::config::CONFIG_FILE_NAME;
use poolguide_settings::{AppConfig, JsonProfileStore};

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "poolguide", version, about = "Compute pool table overlay geometry")]
pub struct CliArgs {
    /// Profile to load; the configured last profile when omitted
    #[arg(value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Profile directory (default ~/.pool-overlay)
    #[arg(long, value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Settings file (.toml or .json)
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Screen-space aiming point (default: display centre)
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub target: Option<Vec<f64>>,

    /// Print the profile list instead of a scene
    #[arg(long)]
    pub list: bool,
}

/// What the CLI prints.
#[derive(Debug, Serialize)]
pub struct SceneReport {
    pub profile: String,
    pub target: Point,
    pub scene: OverlayScene,
}

/// Runs the command and returns the JSON to print.
pub fn execute(args: CliArgs) -> Result<String> {
    let config = match &args.config {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => match &args.dir {
            Some(dir) => AppConfig::load_or_default(&dir.join(CONFIG_FILE_NAME))?,
            None => AppConfig::default(),
        },
    };

    let dir = match args.dir.clone() {
        Some(dir) => dir,
        None => config.resolved_profile_dir()?,
    };
    let store = JsonProfileStore::new(dir);

    if args.list {
        let names = store.list()?;
        return Ok(serde_json::to_string_pretty(&names)?);
    }

    let (name, profile) = match &args.profile {
        Some(name) => (name.clone(), store.load(name)?),
        None => load_last_profile(&store, &config)?,
    };

    let target = match args.target.as_deref() {
        Some([x, y]) => Point::new(*x, *y),
        _ => Point::new(config.display.width / 2.0, config.display.height / 2.0),
    };

    let session = OverlaySession::new(store, profile)
        .with_keybindings(config.keybinding_map());
    let scene = session.scene_with_target(Some(target))?;

    let report = SceneReport {
        profile: name,
        target,
        scene,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// The configured last profile, or a fresh default when it was never saved.
fn load_last_profile(
    store: &JsonProfileStore,
    config: &AppConfig,
) -> Result<(String, GeometryProfile)> {
    let name = config.last_profile.clone();
    match store.load(&name) {
        Ok(profile) => Ok((name, profile)),
        Err(ProfileError::NotFound { .. }) => {
            tracing::info!("No saved profile '{}', using defaults", name);
            let profile = GeometryProfile::centered(config.display.width, config.display.height);
            Ok((name, profile))
        }
        Err(e) => Err(e.into()),
    }
}
