//! Preference storage abstraction.
//!
//! This module defines the [`PreferenceStore`] trait that abstracts over persistence
//! backends. The trait is minimal: each method maps directly to a use case of the
//! plugin shim.

use crate::domain::error::Result;
use crate::domain::ThemePreference;

/// Durable key-value storage for user preferences.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
pub trait PreferenceStore: Send {
    /// Returns the persisted theme preference, `None` when never set.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn theme_preference(&self) -> Result<Option<ThemePreference>>;

    /// Persists the theme preference, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn set_theme_preference(&mut self, preference: ThemePreference) -> Result<()>;
}
