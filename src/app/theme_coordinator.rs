//! Theme persistence coordination.
//!
//! The preference is stored under a single key holding the literal string
//! "dark" or "light". A missing or unreadable value resolves to dark, so
//! persistence unavailability silently degrades to the in-memory default.

use crate::app::AppState;
use folio::ThemeMode;

const THEME_KEY: &str = "theme";

/// Coordinates theme persistence and application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Resolves the theme mode from persistent storage at startup.
    ///
    /// Never fails: absent storage or an unrecognized value yields the
    /// dark default.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> ThemeMode {
        match storage {
            Some(storage) => ThemeMode::from_persisted(storage.get_string(THEME_KEY).as_deref()),
            None => ThemeMode::default(),
        }
    }

    /// Persists the active mode. The stored literal always equals the
    /// mode currently applied.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, mode: ThemeMode) {
        storage.set_string(THEME_KEY, mode.persisted_value().to_string());
        storage.flush();
    }

    /// Applies the active mode to the egui context.
    ///
    /// Called every frame so a toggle takes effect in the same frame.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        state.theme.mode().apply(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
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
    fn test_missing_storage_defaults_to_dark() {
        assert_eq!(
            ThemeCoordinator::load_theme_from_storage(None),
            ThemeMode::Dark
        );
    }

    #[test]
    fn test_missing_key_defaults_to_dark() {
        let storage = MockStorage::new();
        assert_eq!(
            ThemeCoordinator::load_theme_from_storage(Some(&storage)),
            ThemeMode::Dark
        );
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut storage = MockStorage::new();

        ThemeCoordinator::save_theme_to_storage(&mut storage, ThemeMode::Light);
        assert_eq!(storage.data.get(THEME_KEY).map(String::as_str), Some("light"));
        assert_eq!(
            ThemeCoordinator::load_theme_from_storage(Some(&storage)),
            ThemeMode::Light
        );

        ThemeCoordinator::save_theme_to_storage(&mut storage, ThemeMode::Dark);
        assert_eq!(storage.data.get(THEME_KEY).map(String::as_str), Some("dark"));
        assert_eq!(
            ThemeCoordinator::load_theme_from_storage(Some(&storage)),
            ThemeMode::Dark
        );
    }

    #[test]
    fn test_unreadable_value_falls_back_to_dark() {
        let mut storage = MockStorage::new();
        storage.set_string(THEME_KEY, "solarized".to_string());
        assert_eq!(
            ThemeCoordinator::load_theme_from_storage(Some(&storage)),
            ThemeMode::Dark
        );
    }
}
