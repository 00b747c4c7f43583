use crate::settings::SettingsStorage;
use tracing::warn;

/// Storage key of the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// The persisted dark-mode preference.
///
/// Storage failures never reach the caller: reads degrade to `false` and
/// failed writes are logged.
#[derive(Debug)]
pub struct DarkModeSetting<S> {
    storage: S,
}

impl<S: SettingsStorage> DarkModeSetting<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Whether dark mode is on. Only the exact value `"true"` counts.
    pub fn get(&self) -> bool {
        match self.storage.get_item(DARK_MODE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!("Failed to read dark mode setting: {:#}", e);
                false
            }
        }
    }

    pub fn set(&mut self, enabled: bool) {
        if let Err(e) = self
            .storage
            .set_item(DARK_MODE_KEY, if enabled { "true" } else { "false" })
        {
            warn!("Failed to save dark mode setting: {:#}", e);
        }
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        let enabled = !self.get();
        self.set(enabled);
        enabled
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
