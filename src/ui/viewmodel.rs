//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by the
//! renderer. They contain no business logic, only display-ready data, which makes
//! them the natural place to assert on what the user would see.

use crate::app::modes::StatusKind;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    /// The single body panel that is visible.
    pub body: BodyView,
    pub footer: FooterInfo,
}

/// The body panel. Exactly one variant is shown at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    /// Nothing searched yet.
    Empty(EmptyState),

    /// Inert placeholders while a search is in flight.
    Skeleton {
        count: usize,
    },

    /// Result items inside the visible window.
    Results {
        items: Vec<DisplayItem>,
        /// Total number of results, including those outside the window.
        total: usize,
    },

    /// A status banner.
    Status(StatusView),
}

impl BodyView {
    /// Number of result items rendered, zero for every other panel.
    #[must_use]
    pub fn result_item_count(&self) -> usize {
        match self {
            Self::Results { items, .. } => items.len(),
            _ => 0,
        }
    }

    /// Number of skeleton placeholders rendered, zero for every other panel.
    #[must_use]
    pub const fn skeleton_count(&self) -> usize {
        match self {
            Self::Skeleton { count } => *count,
            _ => 0,
        }
    }
}

/// Display information for a single app result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Display name, truncated to the available width.
    pub name: String,

    pub version: String,

    pub size: String,

    /// Whether the icon marker is drawn.
    pub has_icon: bool,

    /// Whether this item is currently selected (and shows the download button).
    pub is_selected: bool,

    /// Character ranges of `name` matching the query, `(start, end)` exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// Theme toggle indicator, e.g. `"[x] dark"`.
    pub theme_toggle: String,
}

/// Search input and its button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,

    /// Whether keystrokes go to the input.
    pub focused: bool,

    /// `"Search APK"` or `"Searching..."`.
    pub button_label: String,

    /// `false` while a request is in flight.
    pub button_enabled: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Message shown before the first search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// A status banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub message: String,
    pub kind: StatusKind,
}
