//! Theme preference resolution and switching.
//!
//! [`Appearance`] decides which palette is active. At startup a stored preference
//! wins; without one the environment hint from the plugin configuration is used,
//! and without a hint the light palette. Afterwards only the toggle changes it.

use crate::domain::ThemePreference;
use crate::ui::theme::{Theme, ThemePalettes};

/// Active theme preference together with the palettes it selects from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    preference: ThemePreference,
    palettes: ThemePalettes,
}

impl Appearance {
    /// Resolves the startup preference.
    ///
    /// The `hint` is only consulted when nothing was stored.
    #[must_use]
    pub fn init(
        stored: Option<ThemePreference>,
        hint: Option<ThemePreference>,
        palettes: ThemePalettes,
    ) -> Self {
        let preference = match (stored, hint) {
            (Some(saved), _) => {
                tracing::debug!(theme = %saved, "applying saved theme preference");
                saved
            }
            (None, Some(hinted)) => {
                tracing::debug!(theme = %hinted, "no saved theme, applying environment hint");
                hinted
            }
            (None, None) => ThemePreference::Light,
        };

        Self {
            preference,
            palettes,
        }
    }

    /// Sets dark when `selected`, light otherwise, and returns the new preference.
    pub fn switch(&mut self, selected: bool) -> ThemePreference {
        self.preference = ThemePreference::from_checked(selected);
        tracing::debug!(theme = %self.preference, "theme switched");
        self.preference
    }

    #[must_use]
    pub const fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Checked state of the theme toggle.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.preference.is_dark()
    }

    /// Palette currently applied to every component.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.palettes.for_preference(self.preference)
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::init(None, None, ThemePalettes::default())
    }
}
