//! apkfetch: A Zellij plugin for finding Android apps and downloading their APKs.
//!
//! apkfetch is a terminal multiplexer plugin that provides:
//! - Searching a remote app index by name over HTTP
//! - A result list with icon marker, version and size for every app
//! - One-key download of the selected app's APK to a host directory
//! - A light/dark theme toggle whose choice survives restarts

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │
//! │ (ui/)         │   │ (storage/)    │
//! │ - Rendering   │   │ - JSON I/O    │
//! │ - Theming     │   │ - Preferences │
//! │ - Components  │   │ - Backend API │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths, endpoint URLs (infrastructure/)  │
//! │  - Error types (domain/error)                       │
//! │  - App records, query, preference (domain/)         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing to a rotating log file                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (`AppResult`, `SearchQuery`, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths, endpoint URLs)
//! - [`storage`]: JSON file persistence for the theme preference
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: File-based tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/apkfetch.wasm" {
//!         endpoint "https://apk-downloader.bjcoderx.workers.dev/"
//!         download_dir "~/Downloads"
//!         color_scheme "dark"
//!         dark_theme "catppuccin-frappe"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing (optional)
//!    - Open the preference file and read the stored theme
//!    - Create `AppState` with the resolved appearance
//!    - Request permissions and subscribe to events
//!
//! 2. **Search**:
//!    - `Enter` validates the query and emits `FetchResults`
//!    - The shim issues `web_request`, the response comes back as an event
//!    - Stale responses are dropped by request id
//!
//! 3. **Download**:
//!    - `Enter`/`d` on a result emits `StartDownload`
//!    - The shim runs `curl` on the host; completion is only logged
//!
//! # Examples
//!
//! ```rust
//! use apkfetch::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default(), None);
//! for c in "maps".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(matches!(actions[0], Action::FetchResults { .. }));
//! # Ok::<(), apkfetch::ApkFetchError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator with true color

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputFocus, UiState};
pub use domain::{ApkFetchError, AppResult, Result, SearchQuery, ThemePreference};
pub use ui::{Theme, ThemePalettes};

use std::collections::BTreeMap;

use app::{Appearance, SearchSettings};
use infrastructure::{expand_tilde, strip_host_prefix, DEFAULT_ENDPOINT};
use ui::theme::{DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/apkfetch.wasm" {
///     endpoint "https://example.test/search"
///     download_dir "~/Downloads"
///     color_scheme "dark"
///     light_theme "catppuccin-latte"
///     dark_theme_file "~/themes/night.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the search service. `query=<name>` is appended.
    pub endpoint: String,

    /// Host directory downloads are saved to, relative to the directory Zellij
    /// runs commands in. `~/` is resolved against the `/host` mount. Default: `"."`
    pub download_dir: String,

    /// Environment color-scheme hint, used only when no preference is stored.
    pub color_scheme: Option<ThemePreference>,

    /// Built-in theme for the light preference. Default: `catppuccin-latte`
    pub light_theme: String,

    /// Built-in theme for the dark preference. Default: `catppuccin-mocha`
    pub dark_theme: String,

    /// Custom TOML theme for the light preference. Takes precedence over `light_theme`.
    pub light_theme_file: Option<String>,

    /// Custom TOML theme for the dark preference. Takes precedence over `dark_theme`.
    pub dark_theme_file: Option<String>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            download_dir: ".".to_string(),
            color_scheme: None,
            light_theme: DEFAULT_LIGHT_THEME.to_string(),
            dark_theme: DEFAULT_DARK_THEME.to_string(),
            light_theme_file: None,
            dark_theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored and unparsable values fall back to their
    /// defaults, so a typo never prevents the plugin from loading.
    ///
    /// # Parsing Rules
    ///
    /// - `endpoint`: non-blank string
    /// - `download_dir`: `~/` expanded, then made relative to the host mount
    /// - `color_scheme`: `light` or `dark` (case-insensitive)
    /// - `light_theme` / `dark_theme`: built-in theme names
    /// - `light_theme_file` / `dark_theme_file`: TOML paths, `~/` expanded
    /// - `trace_level`: `EnvFilter` directive
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let color_scheme = non_blank("color_scheme").and_then(|raw| {
            raw.parse::<ThemePreference>()
                .map_err(|e| tracing::debug!(error = %e, "ignoring color_scheme"))
                .ok()
        });

        Self {
            endpoint: non_blank("endpoint").unwrap_or(defaults.endpoint),
            download_dir: non_blank("download_dir")
                .map_or(defaults.download_dir, |dir| strip_host_prefix(&expand_tilde(&dir))),
            color_scheme,
            light_theme: non_blank("light_theme").unwrap_or(defaults.light_theme),
            dark_theme: non_blank("dark_theme").unwrap_or(defaults.dark_theme),
            light_theme_file: non_blank("light_theme_file").map(|p| expand_tilde(&p)),
            dark_theme_file: non_blank("dark_theme_file").map(|p| expand_tilde(&p)),
            trace_level: non_blank("trace_level"),
        }
    }
}

/// Builds the light and dark palettes from configuration.
///
/// A theme file wins over a theme name. Anything that cannot be loaded falls
/// back to the built-in palette for that side and is logged.
#[must_use]
pub fn load_palettes(config: &Config) -> ThemePalettes {
    ThemePalettes::new(
        load_theme(
            config.light_theme_file.as_deref(),
            &config.light_theme,
            ThemePreference::Light,
        ),
        load_theme(
            config.dark_theme_file.as_deref(),
            &config.dark_theme,
            ThemePreference::Dark,
        ),
    )
}

fn load_theme(file: Option<&str>, name: &str, preference: ThemePreference) -> Theme {
    if let Some(path) = file {
        match Theme::from_file(path) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
            }
        }
    }

    Theme::from_name(name).unwrap_or_else(|| {
        tracing::debug!(theme_name = %name, "unknown theme, using default");
        Theme::builtin_for(preference)
    })
}

/// Initializes the plugin with configuration.
///
/// # Parameters
///
/// * `config` - Plugin configuration
/// * `stored` - Theme preference read from durable storage, if any
///
/// # Returns
///
/// An initialized `AppState` ready for event processing.
#[must_use]
pub fn initialize(config: &Config, stored: Option<ThemePreference>) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, "initializing apkfetch plugin");

    let appearance = Appearance::init(stored, config.color_scheme, load_palettes(config));
    let settings = SearchSettings {
        endpoint: config.endpoint.clone(),
        download_dir: config.download_dir.clone(),
    };

    AppState::new(settings, appearance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", " https://example.test/search "),
            ("download_dir", "~/Downloads"),
            ("color_scheme", "Dark"),
            ("dark_theme", "catppuccin-frappe"),
            ("light_theme_file", "~/themes/day.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.endpoint, "https://example.test/search");
        assert_eq!(config.download_dir, "Downloads");
        assert_eq!(config.color_scheme, Some(ThemePreference::Dark));
        assert_eq!(config.dark_theme, "catppuccin-frappe");
        assert_eq!(config.light_theme, DEFAULT_LIGHT_THEME);
        assert_eq!(config.light_theme_file.as_deref(), Some("/host/themes/day.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("color_scheme", "sepia"),
            ("endpoint", "   "),
        ]));
        assert_eq!(config.color_scheme, None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn palettes_follow_configuration() {
        let config = Config {
            dark_theme: "catppuccin-macchiato".to_string(),
            light_theme: "no-such-theme".to_string(),
            dark_theme_file: Some("/definitely/missing.toml".to_string()),
            ..Config::default()
        };
        let palettes = load_palettes(&config);
        assert_eq!(palettes.light.name, DEFAULT_LIGHT_THEME);
        assert_eq!(palettes.dark.name, "catppuccin-macchiato");
    }

    #[test]
    fn hint_applies_only_without_stored_preference() {
        let config = Config {
            color_scheme: Some(ThemePreference::Dark),
            ..Config::default()
        };
        assert!(initialize(&config, None).appearance.is_dark());
        assert!(!initialize(&config, Some(ThemePreference::Light)).appearance.is_dark());
    }
}
