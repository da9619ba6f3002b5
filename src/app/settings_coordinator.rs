//! Generic settings persistence coordination.
//!
//! Persists any serializable setting to eframe storage as a JSON string. The
//! animation settings and the last selected page go through here; the theme
//! name is stored by [`ThemeCoordinator`](crate::app::ThemeCoordinator).

use serde::{Deserialize, Serialize};

pub const SETTINGS_KEY: &str = "animation_settings";
pub const PAGE_KEY: &str = "last_page";

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a default fallback.
    ///
    /// # Type Parameters
    /// * `T` - The type to deserialize, must implement Deserialize and Default
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise `T::default()`
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Saves a setting to persistent storage.
    ///
    /// Serialization failures are logged and the stored value is left as is.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(err) => tracing::warn!(key, %err, "failed to serialize setting"),
        }
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, %err, "ignoring unreadable setting");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Page, SettingsState};
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_settings() {
        let mut storage = MockStorage::new();
        let mut settings = SettingsState::new();
        *settings.speed_mut() = 0.5;
        *settings.traversal_delay_mut() = 250;

        SettingsCoordinator::save_setting(&mut storage, SETTINGS_KEY, &settings);
        let loaded: SettingsState = SettingsCoordinator::load_setting(Some(&storage), SETTINGS_KEY);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_storage_yields_default() {
        let loaded: Page = SettingsCoordinator::load_setting(None, PAGE_KEY);
        assert_eq!(loaded, Page::SinglyList);
    }

    #[test]
    fn test_unreadable_setting_is_ignored() {
        let mut storage = MockStorage::new();
        storage.data.insert(PAGE_KEY.to_string(), "\"NoSuchPage\"".to_string());
        let result: Option<Page> = SettingsCoordinator::try_load_setting(Some(&storage), PAGE_KEY);
        assert_eq!(result, None);

        SettingsCoordinator::save_setting(&mut storage, PAGE_KEY, &Page::Traversal);
        let result: Option<Page> = SettingsCoordinator::try_load_setting(Some(&storage), PAGE_KEY);
        assert_eq!(result, Some(Page::Traversal));
    }
}
