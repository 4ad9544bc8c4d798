//! JSON file profile store.
//!
//! One pretty-printed file per profile, `<dir>/<name>.json`. The default
//! directory is `~/.pool-overlay`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use poolguide_core::{validate_profile_name, GeometryProfile, ProfileError, ProfileStore};

use crate::error::{SettingsError, SettingsResult};
use crate::record::ProfileRecord;

const PROFILE_EXTENSION: &str = "json";
const DEFAULT_DIR_NAME: &str = ".pool-overlay";

/// Stores profiles as JSON files in a single directory.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    dir: PathBuf,
}

impl JsonProfileStore {
    /// Store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `~/.pool-overlay`, if a home directory is known.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_DIR_NAME))
    }

    /// Store in [`JsonProfileStore::default_dir`].
    pub fn open_default() -> SettingsResult<Self> {
        Self::default_dir()
            .map(Self::new)
            .ok_or_else(|| SettingsError::ConfigDirectory("no home directory".to_string()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the profile `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, PROFILE_EXTENSION))
    }

    fn temp_path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!(".{}.{}.tmp", name, PROFILE_EXTENSION))
    }
}

fn storage_error(action: &str, path: &Path, error: io::Error) -> ProfileError {
    ProfileError::Storage {
        reason: format!("{} {}: {}", action, path.display(), error),
    }
}

impl ProfileStore for JsonProfileStore {
    fn save(&mut self, name: &str, profile: &GeometryProfile) -> Result<(), ProfileError> {
        validate_profile_name(name)?;
        fs::create_dir_all(&self.dir)
            .map_err(|e| storage_error("Failed to create", &self.dir, e))?;

        let content = serde_json::to_string_pretty(&ProfileRecord::from(profile)).map_err(|e| {
            ProfileError::Storage {
                reason: format!("Failed to serialize profile '{}': {}", name, e),
            }
        })?;

        // Write next to the target and rename so readers never see a torn file
        let temp = self.temp_path_for(name);
        let path = self.path_for(name);
        fs::write(&temp, content).map_err(|e| storage_error("Failed to write", &temp, e))?;
        if let Err(e) = fs::rename(&temp, &path) {
            let _ = fs::remove_file(&temp);
            return Err(storage_error("Failed to replace", &path, e));
        }

        tracing::debug!("Wrote profile '{}' to {}", name, path.display());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<GeometryProfile, ProfileError> {
        validate_profile_name(name)?;
        let path = self.path_for(name);

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ProfileError::NotFound {
                name: name.to_string(),
            },
            _ => storage_error("Failed to read", &path, e),
        })?;

        let malformed = |reason: String| ProfileError::Malformed {
            name: name.to_string(),
            reason,
        };
        let record: ProfileRecord =
            serde_json::from_str(&content).map_err(|e| malformed(e.to_string()))?;
        let profile = record.into_profile().map_err(malformed)?;

        tracing::debug!("Read profile '{}' from {}", name, path.display());
        Ok(profile)
    }

    fn list(&self) -> Result<Vec<String>, ProfileError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage_error("Failed to list", &self.dir, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| storage_error("Failed to list", &self.dir, e))?
                .path();
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(PROFILE_EXTENSION)
            {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if validate_profile_name(stem).is_ok() {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
