//! JSON file-based storage backend.
//!
//! Simple, human-readable storage using JSON serialization. Writes go to a
//! temporary file that is then renamed over the target, so a crash never leaves a
//! half-written preference file behind.

use crate::domain::error::{ApkFetchError, Result};
use crate::domain::ThemePreference;
use crate::storage::backend::PreferenceStore;
use crate::storage::models::PreferencesRecord;
use std::path::{Path, PathBuf};

/// JSON file storage backend.
///
/// The whole document is kept in memory and rewritten on every change. It is
/// `Send` but not `Sync`; the plugin shim owns the single instance.
#[derive(Debug)]
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy, loaded on creation.
    data: PreferencesRecord,
}

impl JsonStorage {
    /// Creates or opens a JSON storage backend.
    ///
    /// If the file exists its contents are loaded, otherwise storage starts empty.
    /// A file that cannot be parsed is logged and treated as empty, so the next
    /// save replaces it. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            match Self::load_from_file(&file_path) {
                Ok(data) => data,
                Err(ApkFetchError::Storage(reason)) => {
                    tracing::warn!(
                        path = ?file_path,
                        reason = %reason,
                        "discarding unreadable preferences"
                    );
                    PreferencesRecord::default()
                }
                Err(e) => return Err(e),
            }
        } else {
            tracing::debug!("initializing new empty storage");
            PreferencesRecord::default()
        };

        Ok(Self { file_path, data })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<PreferencesRecord> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferencesRecord = serde_json::from_str(&contents)
            .map_err(|e| ApkFetchError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, theme = ?data.theme, "loaded preferences");

        Ok(data)
    }

    fn save_to_file(&self) -> Result<()> {
        tracing::debug!(path = ?self.file_path, "saving preferences");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ApkFetchError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        Ok(())
    }
}

impl PreferenceStore for JsonStorage {
    fn theme_preference(&self) -> Result<Option<ThemePreference>> {
        Ok(self.data.theme)
    }

    fn set_theme_preference(&mut self, preference: ThemePreference) -> Result<()> {
        let _span = tracing::debug_span!("json_set_theme_preference", theme = %preference).entered();

        if self.data.theme == Some(preference) && self.file_path.exists() {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let previous = self.data.theme.replace(preference);
        if let Err(e) = self.save_to_file() {
            self.data.theme = previous;
            return Err(e);
        }

        Ok(())
    }
}
