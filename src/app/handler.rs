//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! host callbacks, translating them into state changes and action sequences. It
//! is the only place where the search, theme and download flows are sequenced.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, web responses, timers)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Editing**: `Char`, `Backspace`, `Submit`
//! - **Navigation**: `KeyUp`, `KeyDown`, `FocusSearchBar`, `FocusResults`
//! - **Commands**: `Download`, `ToggleTheme`, `Dismiss`, `CloseFocus`
//! - **Host**: `SearchResponse`, `Timer`, `DownloadExited`, `PermissionsResult`

use crate::app::download::{prepare_download, DOWNLOAD_DENIED_MESSAGE, DOWNLOAD_FAILED_MESSAGE};
use crate::app::modes::{InputFocus, StatusKind};
use crate::app::search::{
    SearchOutcome, EMPTY_QUERY_MESSAGE, FETCH_FAILED_MESSAGE, NO_RESULTS_MESSAGE,
    PERMISSIONS_DENIED_MESSAGE, WEB_ACCESS_DENIED_MESSAGE,
};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::SearchQuery;
use crate::infrastructure::search_url;

/// Events triggered by user input or host callbacks.
///
/// The handler processes these sequentially, so state transitions are
/// deterministic for a given event order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query (search field focus only).
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Runs a search for the current query.
    Submit,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Focuses the search input field.
    FocusSearchBar,
    /// Focuses the result list.
    FocusResults,
    /// Downloads the selected result.
    Download,
    /// Flips the light/dark toggle.
    ToggleTheme,
    /// Backs out one level: status banner, then query, then the plugin itself.
    Dismiss,
    /// Hides the plugin pane.
    CloseFocus,

    /// Response to a search request.
    ///
    /// Transport failures arrive as a non-2xx status with whatever body the
    /// host could provide.
    SearchResponse {
        request_id: u64,
        status: u16,
        body: Vec<u8>,
    },

    /// A previously scheduled auto-hide timer fired.
    Timer,

    /// The host download command finished. Only logged.
    DownloadExited {
        file_name: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// Outcome of the startup permission request.
    ///
    /// The host answers for web access and command execution together.
    PermissionsResult {
        /// Whether the requested permissions were granted.
        granted: bool,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`. Actions are executed in order by the plugin shim.
///
/// # Errors
///
/// Currently every failure is converted into a status banner or a log line, so
/// the `Err` branch is reserved for state that cannot be recovered.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            if state.focus != InputFocus::Query {
                return Ok((false, vec![]));
            }
            state.query.push(*c);
            tracing::trace!(query = %state.query, "query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.focus != InputFocus::Query || state.query.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }
        Event::Submit => Ok((true, submit_search(state))),
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.focus = InputFocus::Query;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.focus == InputFocus::Results {
                return Ok((false, vec![]));
            }
            // Allowed with an empty list too: the single-key commands live there.
            state.focus = InputFocus::Results;
            Ok((true, vec![]))
        }
        Event::Download => Ok((true, start_download(state))),
        Event::ToggleTheme => {
            let selected = state.appearance.preference().toggled().is_dark();
            let preference = state.appearance.switch(selected);
            Ok((true, vec![Action::PersistTheme(preference)]))
        }
        Event::Dismiss => {
            if state.dismiss_status() {
                return Ok((true, vec![]));
            }
            if state.focus == InputFocus::Results {
                state.focus = InputFocus::Query;
                return Ok((true, vec![]));
            }
            if state.query.is_empty() {
                return Ok((false, vec![Action::CloseFocus]));
            }
            state.query.clear();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchResponse {
            request_id,
            status,
            body,
        } => {
            if !state.is_current_request(*request_id) {
                tracing::debug!(request_id, "discarding stale search response");
                return Ok((false, vec![]));
            }
            state.finish_request();
            Ok((true, apply_outcome(state, SearchOutcome::from_response(*status, body))))
        }
        Event::Timer => Ok((state.expire_status_timer(), vec![])),
        Event::DownloadExited {
            file_name,
            exit_code,
            stderr,
        } => {
            if *exit_code == Some(0) {
                tracing::info!(file_name = %file_name, "download finished");
            } else {
                tracing::warn!(
                    file_name = %file_name,
                    exit_code = ?exit_code,
                    stderr = %stderr.trim(),
                    "download command failed"
                );
            }
            Ok((false, vec![]))
        }
        Event::PermissionsResult { granted } => {
            state.web_access = *granted;
            state.run_commands = *granted;
            if *granted {
                return Ok((false, vec![]));
            }
            tracing::warn!("web access and run commands permissions denied");
            state.abandon_request();
            state.fail_search(PERMISSIONS_DENIED_MESSAGE);
            Ok((true, vec![]))
        }
    }
}

fn submit_search(state: &mut AppState) -> Vec<Action> {
    let Some(query) = SearchQuery::parse(&state.query) else {
        tracing::debug!("blank query, not searching");
        state.abandon_request();
        state.fail_search(EMPTY_QUERY_MESSAGE);
        return vec![];
    };

    if !state.web_access {
        state.fail_search(WEB_ACCESS_DENIED_MESSAGE);
        return vec![];
    }

    let url = search_url(&state.settings.endpoint, &query);
    let request_id = state.begin_search(&query);
    tracing::info!(request_id, query = %query, "searching");

    vec![Action::FetchResults { request_id, url }]
}

fn apply_outcome(state: &mut AppState, outcome: SearchOutcome) -> Vec<Action> {
    match outcome {
        SearchOutcome::Found(results) => {
            tracing::debug!(count = results.len(), "search returned results");
            state.show_results(results);
        }
        SearchOutcome::Empty => {
            tracing::debug!("search returned no results");
            state.fail_search(NO_RESULTS_MESSAGE);
        }
        SearchOutcome::Failed(cause) => {
            tracing::warn!(error = %cause, "search failed");
            state.fail_search(FETCH_FAILED_MESSAGE);
        }
    }
    vec![]
}

fn start_download(state: &mut AppState) -> Vec<Action> {
    if state.results.is_empty() || state.ui.is_loading() {
        return vec![];
    }
    // A banner over the list (e.g. the previous download's) steps aside.
    state.dismiss_status();

    if !state.run_commands {
        return state.show_status(DOWNLOAD_DENIED_MESSAGE, StatusKind::Error);
    }
    let Some(result) = state.selected_result() else {
        tracing::debug!("no result selected");
        return vec![];
    };

    match prepare_download(result, &state.settings.download_dir) {
        Ok(request) => {
            tracing::info!(
                url = %request.url,
                destination = %request.destination,
                "starting download"
            );
            let mut actions = vec![Action::StartDownload {
                url: request.url.clone(),
                destination: request.destination.clone(),
                file_name: request.file_name.clone(),
            }];
            actions.extend(state.show_status(&request.started_message(), StatusKind::Success));
            actions
        }
        Err(e) => {
            tracing::warn!(error = %e, "download could not be started");
            state.show_status(DOWNLOAD_FAILED_MESSAGE, StatusKind::Error)
        }
    }
}
