//! # PoolGuide Core
//!
//! Core types and utilities for PoolGuide.
//! Provides the table geometry data model, error types, the input
//! vocabulary, the owner-thread intent queue and the profile storage seam.

pub mod constants;
pub mod data;
pub mod error;
pub mod input;
pub mod intent;
pub mod store;

pub use data::{ColorScheme, GeometryProfile, Point, Rgba, TableFrame, Visibility};

pub use error::{Error, GeometryError, ProfileError, QueueError, Result};

pub use input::{HotkeyAction, KeyChord, Modifiers, PointerEvent};

pub use intent::{intent_queue, Intent, IntentReceiver, IntentSender};

pub use store::{validate_profile_name, MemoryProfileStore, ProfileStore};
