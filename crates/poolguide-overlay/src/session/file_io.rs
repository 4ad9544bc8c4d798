//! Save, load and list operations for the overlay session.

use poolguide_core::{ProfileError, ProfileStore};

use super::{ChangeNotice, OverlaySession};

impl<S: ProfileStore> OverlaySession<S> {
    /// Saves the current profile under `name`, which becomes the current
    /// profile name on success.
    pub fn save(&mut self, name: &str) -> Result<(), ProfileError> {
        match self.store.save(name, &self.profile) {
            Ok(()) => {
                tracing::info!("Saved profile '{}'", name);
                self.profile_name = name.to_string();
                self.notify(ChangeNotice::ProfileSaved(name.to_string()));
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to save profile '{}': {}", name, e);
                self.notify(ChangeNotice::StoreFailed {
                    name: name.to_string(),
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Replaces the current profile with the one stored under `name`.
    ///
    /// On failure nothing in memory changes, an active drag included.
    pub fn load(&mut self, name: &str) -> Result<(), ProfileError> {
        match self.store.load(name) {
            Ok(profile) => {
                self.controller.release();
                self.profile = profile;
                self.profile_name = name.to_string();
                // a pinned cue ball belongs to the previous table
                self.cue_ball = None;
                tracing::info!(
                    "Loaded profile '{}' ({} pockets)",
                    name,
                    self.profile.pockets().len()
                );
                self.notify(ChangeNotice::ProfileLoaded(name.to_string()));
                self.notify(ChangeNotice::GeometryChanged);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load profile '{}': {}", name, e);
                self.notify(ChangeNotice::StoreFailed {
                    name: name.to_string(),
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Names of the stored profiles, sorted.
    pub fn list_profiles(&self) -> Result<Vec<String>, ProfileError> {
        self.store.list()
    }
}
