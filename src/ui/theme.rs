//! Theme management and ANSI escape sequence generation.
//!
//! A [`Theme`] is a named palette loaded from TOML. The widget keeps two of them,
//! one for the light preference and one for the dark preference
//! ([`ThemePalettes`]); switching the preference swaps which palette every
//! component renders with.
//!
//! # Built-in Themes
//!
//! - `catppuccin-latte`: Light theme with soft pastels (default light)
//! - `catppuccin-mocha`: Dark theme with warm tones (default dark)
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! base_bg = "#1e1e2e"
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! skeleton_fg = "#45475a"
//! icon_fg = "#cba6f7"
//! error_fg = "#f38ba8"
//! success_fg = "#a6e3a1"
//! button_fg = "#1e1e2e"
//! button_bg = "#89b4fa"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::error::{ApkFetchError, Result};
use crate::domain::ThemePreference;

/// Built-in theme used for the light preference unless configured otherwise.
pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";

/// Built-in theme used for the dark preference unless configured otherwise.
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Pane background. When absent the terminal's own background shows through.
    #[serde(default)]
    pub base_bg: Option<String>,

    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    pub search_bar_border: String,
    /// Fuzzy match highlight foreground.
    pub match_highlight_fg: String,
    /// Fuzzy match highlight background.
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Placeholder bars shown while a search is loading.
    pub skeleton_fg: String,

    /// App icon marker.
    pub icon_fg: String,

    pub error_fg: String,
    pub success_fg: String,

    /// Search button colors when enabled.
    pub button_fg: String,
    pub button_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the theme name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ApkFetchError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ApkFetchError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| ApkFetchError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Default palette for a preference.
    #[must_use]
    pub fn builtin_for(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::from_name(DEFAULT_LIGHT_THEME)
                .expect("Built-in catppuccin-latte theme should always parse"),
            ThemePreference::Dark => Self::default(),
        }
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Resets styling and re-applies the pane background and normal text color.
    ///
    /// Components end every styled span with this instead of [`Theme::reset`] so
    /// the palette's background stays painted across the whole pane.
    #[must_use]
    pub fn restore(&self) -> String {
        let mut out = String::from(Self::reset());
        if let Some(bg) = &self.colors.base_bg {
            out.push_str(&Self::bg(bg));
        }
        out.push_str(&Self::fg(&self.colors.text_normal));
        out
    }
}

impl Default for Theme {
    /// Returns the default dark theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_DARK_THEME)
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

/// The light and dark palettes the preference chooses between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePalettes {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemePalettes {
    #[must_use]
    pub const fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Returns the palette that applies to `preference`.
    #[must_use]
    pub const fn for_preference(&self, preference: ThemePreference) -> &Theme {
        match preference {
            ThemePreference::Light => &self.light,
            ThemePreference::Dark => &self.dark,
        }
    }
}

impl Default for ThemePalettes {
    fn default() -> Self {
        Self {
            light: Theme::builtin_for(ThemePreference::Light),
            dark: Theme::builtin_for(ThemePreference::Dark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtins_parse() {
        for name in [
            "catppuccin-latte",
            "catppuccin-mocha",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
            assert!(theme.colors.base_bg.is_some());
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn palettes_follow_preference() {
        let palettes = ThemePalettes::default();
        assert_eq!(palettes.for_preference(ThemePreference::Light).name, DEFAULT_LIGHT_THEME);
        assert_eq!(palettes.for_preference(ThemePreference::Dark).name, DEFAULT_DARK_THEME);
    }

    #[test]
    fn hex_colors_become_truecolor_sequences() {
        assert_eq!(Theme::fg("#1e1e2e"), "\u{1b}[38;2;30;30;46m");
        assert_eq!(Theme::bg("ffffff"), "\u{1b}[48;2;255;255;255m");
        assert_eq!(Theme::fg("#zz"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn theme_file_errors_are_theme_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = 3").unwrap();
        assert!(matches!(Theme::from_file(&path), Err(ApkFetchError::Theme(_))));
        assert!(matches!(
            Theme::from_file(dir.path().join("missing.toml")),
            Err(ApkFetchError::Theme(_))
        ));
    }

    #[test]
    fn restore_reapplies_background() {
        let theme = Theme::default();
        let restore = theme.restore();
        assert!(restore.starts_with(Theme::reset()));
        assert!(restore.contains("48;2;30;30;46"));
    }
}
