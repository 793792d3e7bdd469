//! Theme preference persistence.

use clap::ValueEnum;
use log::{debug, warn};

use crate::config::THEME_STORAGE_KEY;

use super::{KeyValueStore, StorageError};

/// Display theme selected by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    /// Dark theme
    Dark,
    /// Light theme
    Light,
}

impl Theme {
    /// Returns the stored name of the theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loads the persisted theme, defaulting to [`Theme::Light`] when the key is
/// absent or holds an unrecognized value.
pub fn load_theme(store: &KeyValueStore) -> Theme {
    match store.get(THEME_STORAGE_KEY) {
        Ok(Some(name)) => match name.trim() {
            "dark" => Theme::Dark,
            "light" => Theme::Light,
            other => {
                debug!("Ignoring unrecognized stored theme {other:?}");
                Theme::Light
            }
        },
        Ok(None) => Theme::Light,
        Err(e) => {
            warn!("Failed to load theme preference: {e}");
            Theme::Light
        }
    }
}

/// Persists the theme name, overwriting any previous value.
///
/// # Errors
///
/// Returns `StorageError` if the value cannot be written.
pub fn save_theme(store: &KeyValueStore, theme: Theme) -> Result<(), StorageError> {
    store.put(THEME_STORAGE_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_theme_defaults_to_light() {
        let dir = TempDir::new().unwrap();
        let store = KeyValueStore::open(dir.path()).unwrap();
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn test_theme_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = KeyValueStore::open(dir.path()).unwrap();

        save_theme(&store, Theme::Dark).unwrap();
        assert_eq!(load_theme(&store), Theme::Dark);

        save_theme(&store, Theme::Light).unwrap();
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn test_unrecognized_theme_falls_back() {
        let dir = TempDir::new().unwrap();
        let store = KeyValueStore::open(dir.path()).unwrap();

        store.put(THEME_STORAGE_KEY, "solarized").unwrap();
        assert_eq!(load_theme(&store), Theme::Light);
    }
}
