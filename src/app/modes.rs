//! UI and input state types for the application.
//!
//! # State Machine
//!
//! The body of the widget shows exactly one panel, selected by [`UiState`]:
//!
//! ```text
//! Idle ──submit──▶ Loading ──non-empty list──▶ Results
//!  │                  │
//!  │                  └──empty / failure──▶ Status(error)
//!  └──blank query──▶ Status(error)
//! ```
//!
//! Selecting a result for download shows `Status(success)` (or `Status(error)`
//! when the download cannot be started) on top of the current results.

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Persists until the next state change.
    Error,
    /// Auto-hides after [`STATUS_DISMISS_SECONDS`](crate::app::STATUS_DISMISS_SECONDS).
    Success,
}

/// A single user-facing status banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    /// Identifies the banner so an auto-hide timer only clears the banner it was
    /// scheduled for.
    pub token: u64,
}

/// Which body panel is visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    /// Nothing searched yet, or a success banner expired with no results to return to.
    #[default]
    Idle,

    /// A search request is in flight; the skeleton is shown.
    Loading,

    /// The current result set is shown.
    Results,

    /// A status banner replaces the body.
    Status(StatusMessage),
}

impl UiState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Where keyboard input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    /// Typing into the search field. `Enter` submits the search.
    #[default]
    Query,

    /// Moving through results. `Enter` downloads the selected result.
    Results,
}
