//! # PoolGuide
//!
//! Geometry engine for a pool table overlay:
//! - Affine mapping between screen space and table-local space
//! - Interactive table editing (move pockets, move, scale and rotate the table)
//! - Aim line and pocket guide construction
//! - Named geometry profiles stored as JSON
//!
//! ## Architecture
//!
//! PoolGuide is organized as a workspace with multiple crates:
//!
//! 1. **poolguide-core** - Data model, errors, input vocabulary, intent queue, store trait
//! 2. **poolguide-overlay** - Transform, trajectory, manipulation state machine, scene, session
//! 3. **poolguide-settings** - JSON profile store and application settings
//! 4. **poolguide** - Facade crate and headless command line front end
//!
//! Window chrome, tray icons and global hook registration belong to the shell
//! embedding these crates. The shell pushes [`Intent`]s from its callbacks and
//! drains them on the owner thread through [`OverlaySession::process`].

pub mod cli;

pub use poolguide_core::data;

pub use poolguide_core::{
    intent_queue, ColorScheme, Error, GeometryError, GeometryProfile, HotkeyAction, Intent,
    IntentReceiver, IntentSender, KeyChord, MemoryProfileStore, Modifiers, Point, PointerEvent,
    ProfileError, ProfileStore, QueueError, Result, Rgba, TableFrame, Visibility,
};

pub use poolguide_overlay::{
    build_scene, predict, ChangeNotice, ManipulationController, ManipulationState, OverlayMode,
    OverlayScene, OverlaySession, Segment, TableTransform, TrajectoryLines,
};

pub use poolguide_settings::{AppConfig, JsonProfileStore, ProfileRecord, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout for command output
/// - RUST_LOG environment variable support
/// - Target, thread and line number annotations
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
