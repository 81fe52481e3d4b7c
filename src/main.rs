//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the apkfetch library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait, maps
//! Zellij events to library events, and turns library actions into host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, open preferences, create `AppState`
//! 2. **Permissions**: Request `WebAccess` (search) and `RunCommands` (download)
//! 3. **Subscribe**: Register for Key, `WebRequestResult`, `RunCommandResult`, `Timer`
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(..)` → editing, navigation and command events (see below)
//! - `WebRequestResult` → `Event::SearchResponse` (request id from the context)
//! - `RunCommandResult` → `Event::DownloadExited`
//! - `Timer` → `Event::Timer`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+t`: Toggle light/dark theme (only reaches the plugin when the
//!   Zellij keymap leaves it unbound)
//!
//! In the search field:
//! - Characters: Type
//! - `Enter`: Search
//! - `Tab`/`Down`: Move to the result list, even when it is empty
//! - `Esc`: Dismiss message, clear query, then close
//!
//! In the result list:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`/`d`: Download the selected app
//! - `/`/`Tab`: Back to the search field
//! - `t`: Toggle theme
//! - `Esc`: Dismiss message, then back to the search field
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use apkfetch::infrastructure::preferences_file;
use apkfetch::storage::{JsonStorage, PreferenceStore};
use apkfetch::{handle_event, Action, Config, Event, InputFocus};

register_plugin!(State);

/// Context key carrying the search request id through `web_request`.
const REQUEST_ID_KEY: &str = "request_id";

/// Context key carrying the file name through `run_command`.
const FILE_NAME_KEY: &str = "file_name";

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like the
/// preference file handle.
struct State {
    /// Core application state from library layer.
    app: apkfetch::AppState,

    /// Preference storage, `None` when the file could not be opened.
    storage: Option<JsonStorage>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: apkfetch::initialize(&Config::default(), None),
            storage: None,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Query the search service
    /// - `RunCommands`: Run `curl` for downloads
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        apkfetch::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");

        self.storage = match JsonStorage::new(preferences_file()) {
            Ok(storage) => {
                tracing::debug!(path = ?storage.path(), "preferences opened");
                Some(storage)
            }
            Err(e) => {
                tracing::warn!(error = %e, "preferences unavailable, theme choice will not persist");
                None
            }
        };

        let stored = self.storage.as_ref().and_then(|storage| {
            storage
                .theme_preference()
                .map_err(|e| tracing::warn!(error = %e, "failed to read theme preference"))
                .ok()
                .flatten()
        });

        self.app = apkfetch::initialize(&config, stored);
        tracing::debug!(theme = %self.app.appearance.preference(), "app state initialized");

        request_permission(&[PermissionType::WebAccess, PermissionType::RunCommands]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::RunCommandResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                Event::DownloadExited {
                    file_name: context.get(FILE_NAME_KEY).cloned().unwrap_or_default(),
                    exit_code,
                    stderr: String::from_utf8_lossy(&stderr).into_owned(),
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Timer,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Event::PermissionsResult {
                    granted: matches!(status, PermissionStatus::Granted),
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        apkfetch::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('t') => Some(Event::ToggleTheme),
                _ => None,
            };
        }
        if key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        Some(match self.app.focus {
            InputFocus::Query => match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::Dismiss,
                BareKey::Backspace => Event::Backspace,
                BareKey::Tab | BareKey::Down => Event::FocusResults,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputFocus::Results => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter | BareKey::Char('d') => Event::Download,
                BareKey::Tab | BareKey::Char('/') => Event::FocusSearchBar,
                BareKey::Char('t') => Event::ToggleTheme,
                BareKey::Esc => Event::Dismiss,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            },
        })
    }

    /// Maps web request results to search responses.
    ///
    /// Results without a parsable request id did not come from this plugin's
    /// searches and are ignored.
    fn map_web_request_event(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(request_id) = context
            .get(REQUEST_ID_KEY)
            .and_then(|id| id.parse::<u64>().ok())
        else {
            tracing::debug!(status, "web request result without request id");
            return None;
        };

        tracing::debug!(request_id, status, body_len = body.len(), "web request result");
        Some(Event::SearchResponse {
            request_id,
            status,
            body,
        })
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `FetchResults`: GET the search URL, tagging it with the request id
    /// - `StartDownload`: Run `curl` on the host
    /// - `PersistTheme`: Write the preference file
    /// - `ScheduleTimer`: Arm a Zellij timer
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchResults { request_id, url } => {
                let mut context = BTreeMap::new();
                context.insert(REQUEST_ID_KEY.to_string(), request_id.to_string());
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
            Action::StartDownload {
                url,
                destination,
                file_name,
            } => {
                let mut context = BTreeMap::new();
                context.insert(FILE_NAME_KEY.to_string(), file_name.clone());
                run_command(
                    &["curl", "-fsSL", "--create-dirs", "-o", destination, url],
                    context,
                );
            }
            Action::PersistTheme(preference) => {
                let Some(storage) = self.storage.as_mut() else {
                    tracing::debug!("no preference storage, theme not persisted");
                    return;
                };
                if let Err(e) = storage.set_theme_preference(*preference) {
                    tracing::warn!(error = %e, "failed to persist theme preference");
                }
            }
            Action::ScheduleTimer { seconds } => set_timeout(*seconds),
        }
    }
}
