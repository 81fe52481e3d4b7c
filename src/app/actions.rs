//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the host directly. It returns a `Vec<Action>`
//! after processing each event and the plugin shim executes them in order, which
//! keeps every state transition testable without a running Zellij.

use crate::domain::ThemePreference;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues one HTTP GET to the search endpoint.
    ///
    /// The request id travels with the request and comes back with the response,
    /// so responses to superseded searches can be recognised and dropped.
    FetchResults {
        /// Monotonically increasing id of this search.
        request_id: u64,
        /// Fully encoded request URL.
        url: String,
    },

    /// Starts a download of `url` on the host, saving it to `destination`.
    StartDownload {
        url: String,
        /// Host path (download directory joined with the safe file name).
        destination: String,
        file_name: String,
    },

    /// Writes the theme preference to durable storage.
    PersistTheme(ThemePreference),

    /// Requests a `Timer` event after `seconds`.
    ScheduleTimer {
        seconds: f64,
    },
}
