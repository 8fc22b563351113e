//! Local persistence for user preferences.
//!
//! Only the language choice is stored. View and filter state are
//! deliberately session-only and never pass through here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Language;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no preference storage is available on this platform")]
    Unavailable,
    #[error("preference storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored preferences are not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub language: Language,
}

/// Stored preferences, if any. Failures are logged and read as "none".
pub fn load_preferences() -> Option<Preferences> {
    match backend::load() {
        Ok(found) => found,
        Err(err) => {
            tracing::warn!(%err, "ignoring unreadable preferences");
            None
        }
    }
}

pub fn save_preferences(preferences: &Preferences) -> Result<(), StorageError> {
    backend::save(preferences)
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::{Preferences, StorageError};
    use crate::core::settings::PREFERENCES_KEY;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }

    pub fn load() -> Result<Option<Preferences>, StorageError> {
        let storage = local_storage()?;
        match storage.get_item(PREFERENCES_KEY) {
            Ok(Some(raw)) => Ok(Some(serde_json::from_str(&raw)?)),
            Ok(None) => Ok(None),
            Err(_) => Err(StorageError::Unavailable),
        }
    }

    pub fn save(preferences: &Preferences) -> Result<(), StorageError> {
        let raw = serde_json::to_string(preferences)?;
        local_storage()?
            .set_item(PREFERENCES_KEY, &raw)
            .map_err(|_| StorageError::Unavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use directories::ProjectDirs;

    use super::{Preferences, StorageError};
    use crate::core::settings::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, PREFERENCES_FILE};

    fn preferences_path() -> Result<PathBuf, StorageError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
            .ok_or(StorageError::Unavailable)
    }

    pub fn load() -> Result<Option<Preferences>, StorageError> {
        load_from(&preferences_path()?)
    }

    pub fn save(preferences: &Preferences) -> Result<(), StorageError> {
        save_to(&preferences_path()?, preferences)
    }

    pub fn load_from(path: &Path) -> Result<Option<Preferences>, StorageError> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save_to(path: &Path, preferences: &Preferences) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(preferences)?)?;
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::backend::{load_from, save_to};
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let found = load_from(&dir.path().join("preferences.json")).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn saved_language_is_loaded_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        save_to(
            &path,
            &Preferences {
                language: Language::En,
            },
        )
        .unwrap();
        let found = load_from(&path).unwrap();
        assert_eq!(found.map(|p| p.language), Some(Language::En));
    }

    #[test]
    fn corrupt_file_is_a_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_from(&path), Err(StorageError::Serde(_))));
    }

    #[test]
    fn unknown_fields_fall_back_to_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(prefs.language, Language::Ar);
    }
}
