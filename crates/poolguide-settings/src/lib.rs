//! PoolGuide Settings Crate
//!
//! Handles geometry profile persistence and application configuration.

pub mod config;
pub mod error;
pub mod record;
pub mod store;

pub use config::AppConfig;
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use record::{PointRecord, ProfileRecord, RectRecord};
pub use store::JsonProfileStore;
