//! Profile storage seam.
//!
//! The overlay session talks to storage through [`ProfileStore`]; the JSON
//! file backend lives in `poolguide-settings`. [`MemoryProfileStore`] keeps
//! profiles in a map for headless use and tests.

use std::collections::BTreeMap;

use crate::data::GeometryProfile;
use crate::error::ProfileError;

/// Named storage for geometry profiles.
///
/// `load` either returns a complete profile or an error; it never hands back
/// a partially applied record.
pub trait ProfileStore {
    /// Writes the whole profile under `name`, replacing any previous record.
    fn save(&mut self, name: &str, profile: &GeometryProfile) -> Result<(), ProfileError>;

    /// Reads the profile stored under `name`.
    fn load(&self, name: &str) -> Result<GeometryProfile, ProfileError>;

    /// Names of all stored profiles, sorted ascending.
    fn list(&self) -> Result<Vec<String>, ProfileError>;
}

/// Rejects names that cannot be used as a storage key.
///
/// Names must be non-empty after trimming, must not start with a dot and
/// must not contain path separators or NUL.
pub fn validate_profile_name(name: &str) -> Result<(), ProfileError> {
    let trimmed = name.trim();
    let invalid = trimmed.is_empty()
        || trimmed != name
        || name.starts_with('.')
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(ProfileError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// In-memory profile store.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profiles: BTreeMap<String, GeometryProfile>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn save(&mut self, name: &str, profile: &GeometryProfile) -> Result<(), ProfileError> {
        validate_profile_name(name)?;
        self.profiles.insert(name.to_string(), profile.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<GeometryProfile, ProfileError> {
        validate_profile_name(name)?;
        self.profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound {
                name: name.to_string(),
            })
    }

    fn list(&self) -> Result<Vec<String>, ProfileError> {
        Ok(self.profiles.keys().cloned().collect())
    }
}
