//! Applying queued intents on the owner thread.

use poolguide_core::{Error, HotkeyAction, Intent, IntentReceiver, ProfileStore, Result};

use super::{ChangeNotice, OverlaySession};

impl<S: ProfileStore> OverlaySession<S> {
    /// Applies one intent.
    ///
    /// Save and load requests are ignored outside editing mode. Unbound
    /// hotkeys are ignored.
    pub fn apply(&mut self, intent: Intent) -> Result<()> {
        if intent.is_high_frequency() {
            tracing::trace!("Applying intent: {}", intent);
        } else {
            tracing::debug!("Applying intent: {}", intent);
        }

        match intent {
            Intent::ToggleEditing => self.toggle_editing(),
            Intent::ToggleOverlay => self.toggle_visibility(),
            Intent::Save(name) => {
                if self.mode.editing {
                    self.save(&name)?;
                } else {
                    tracing::debug!("Ignoring save of '{}' outside editing mode", name);
                }
            }
            Intent::Load(name) => {
                if self.mode.editing {
                    self.load(&name)?;
                } else {
                    tracing::debug!("Ignoring load of '{}' outside editing mode", name);
                }
            }
            Intent::ResetPockets => self.reset_pockets(),
            Intent::Hotkey(chord) => match self.keybindings.get(&chord).copied() {
                Some(action) => self.apply_action(action)?,
                None => tracing::debug!("No action bound to {}", chord),
            },
            Intent::Pointer(event) => {
                self.handle_pointer(event)?;
            }
        }
        Ok(())
    }

    /// Runs a hotkey action.
    ///
    /// `SaveConfig` saves under the current profile name. `LoadConfig`
    /// only asks the shell to offer the stored names.
    pub fn apply_action(&mut self, action: HotkeyAction) -> Result<()> {
        match action {
            HotkeyAction::ToggleEditing => self.toggle_editing(),
            HotkeyAction::ToggleOverlay => self.toggle_visibility(),
            HotkeyAction::SaveConfig => {
                let name = self.profile_name.clone();
                self.apply(Intent::Save(name))?;
            }
            HotkeyAction::LoadConfig => {
                if self.mode.editing {
                    let names = self.list_profiles()?;
                    self.notify(ChangeNotice::LoadPickerRequested(names));
                }
            }
            HotkeyAction::ResetPockets => self.reset_pockets(),
        }
        Ok(())
    }

    /// Drains the queue and applies every pending intent in order.
    ///
    /// A failing intent is logged and does not stop the ones behind it.
    /// Returns the number of intents applied.
    pub fn process(&mut self, receiver: &mut IntentReceiver) -> usize {
        let pending = receiver.drain();
        let count = pending.len();
        for intent in pending {
            let description = intent.description();
            if let Err(e) = self.apply(intent) {
                report_failure(&description, &e);
            }
        }
        count
    }
}

/// Logs a failed intent. A broken geometry invariant is a bug: it panics in
/// debug builds, while release builds log it and keep draining.
fn report_failure(description: &str, error: &Error) {
    if error.is_precondition_violation() {
        tracing::error!("Intent '{}' failed: {}", description, error);
    } else {
        tracing::warn!("Intent '{}' failed: {}", description, error);
    }
    debug_assert!(
        !error.is_precondition_violation(),
        "Intent '{}' hit a broken invariant: {}",
        description,
        error
    );
}
