//! Storage record models for persistence layer.
//!
//! These types describe the on-disk document, kept separate from the domain types
//! so the file format can evolve with its own version number.

use serde::{Deserialize, Serialize};

use crate::domain::ThemePreference;

/// Current version of the preference file format.
pub const PREFERENCES_VERSION: u32 = 1;

/// Top-level document stored in `preferences.json`.
///
/// ```json
/// {
///   "version": 1,
///   "theme": "dark"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesRecord {
    /// Version of the storage format for future migrations.
    pub version: u32,

    /// Persisted theme, absent until the user toggles it once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemePreference>,
}

impl Default for PreferencesRecord {
    fn default() -> Self {
        Self {
            version: PREFERENCES_VERSION,
            theme: None,
        }
    }
}
