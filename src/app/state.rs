//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for the widget:
//! the query being typed, the visible panel, the last result set, the selection,
//! the active theme and the bookkeeping that keeps stale responses and stale
//! timers from touching the UI.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` transforms state into a renderable representation by a
//! single dispatch on [`UiState`], handling result windowing, match highlighting
//! and truncation to the terminal width.

use std::collections::VecDeque;

use fuzzy_matcher::skim::SkimMatcherV2;

use super::actions::Action;
use super::appearance::Appearance;
use super::modes::{InputFocus, StatusKind, StatusMessage, UiState};
use super::search::{SEARCHING_LABEL, SEARCH_LABEL, SKELETON_COUNT};
use super::STATUS_DISMISS_SECONDS;
use crate::domain::{AppResult, ResultSet, SearchQuery};
use crate::ui::helpers::truncate_chars;
use crate::ui::viewmodel::{
    BodyView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, StatusView,
    UIViewModel,
};

/// Rows used by everything except the body: blank line, header, border, search
/// box (3), spacer, bottom border and footer.
const CHROME_ROWS: usize = 9;

/// Rows per result item: name line, details line, spacer.
pub const ROWS_PER_ITEM: usize = 3;

/// Columns reserved around the name (selection marker, icon, download button).
const NAME_RESERVED_COLS: usize = 20;

/// Where searches go and where downloads land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    /// Base URL of the search service.
    pub endpoint: String,
    /// Host directory downloads are written to.
    pub download_dir: String,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Text in the search field, untrimmed.
    pub query: String,

    pub focus: InputFocus,

    /// Which body panel is visible.
    pub ui: UiState,

    /// Records from the last successful search.
    ///
    /// Replaced by the next successful search, cleared by a search error. A
    /// download banner does not touch it, so the list comes back once the banner
    /// goes away.
    pub results: ResultSet,

    /// Zero-based index into `results`.
    pub selected_index: usize,

    pub appearance: Appearance,

    pub settings: SearchSettings,

    /// False once the host refused web access.
    pub web_access: bool,

    /// False once the host refused to run commands (downloads).
    pub run_commands: bool,

    /// Query that produced `results`, used for highlighting.
    highlight_query: Option<String>,

    /// Id handed to the most recent request.
    last_request_id: u64,

    /// Id of the request whose response will be applied, if one is in flight.
    pending_request: Option<u64>,

    /// Last status token handed out.
    last_status_token: u64,

    /// Tokens of success banners with a pending auto-hide timer, oldest first.
    ///
    /// Every banner timer has the same duration, so timers fire in this order.
    pending_status_timers: VecDeque<u64>,
}

impl AppState {
    #[must_use]
    pub fn new(settings: SearchSettings, appearance: Appearance) -> Self {
        Self {
            query: String::new(),
            focus: InputFocus::Query,
            ui: UiState::Idle,
            results: Vec::new(),
            selected_index: 0,
            appearance,
            settings,
            web_access: true,
            run_commands: true,
            highlight_query: None,
            last_request_id: 0,
            pending_request: None,
            last_status_token: 0,
            pending_status_timers: VecDeque::new(),
        }
    }

    /// Enters the loading state for `query` and returns the new request id.
    pub fn begin_search(&mut self, query: &SearchQuery) -> u64 {
        self.last_request_id += 1;
        let request_id = self.last_request_id;

        if let Some(superseded) = self.pending_request.replace(request_id) {
            tracing::debug!(superseded, request_id, "search superseded by a newer one");
        }

        self.highlight_query = Some(query.as_str().to_string());
        self.ui = UiState::Loading;
        request_id
    }

    /// Whether a response for `request_id` should still be applied.
    #[must_use]
    pub fn is_current_request(&self, request_id: u64) -> bool {
        self.pending_request == Some(request_id)
    }

    /// Marks the in-flight request as finished.
    pub fn finish_request(&mut self) {
        self.pending_request = None;
    }

    /// Forgets any in-flight request so its response is ignored.
    pub fn abandon_request(&mut self) {
        if let Some(request_id) = self.pending_request.take() {
            tracing::debug!(request_id, "in-flight search abandoned");
        }
    }

    /// Replaces the result set and shows it.
    pub fn show_results(&mut self, results: ResultSet) {
        self.results = results;
        self.selected_index = 0;
        self.ui = UiState::Results;
        self.focus = InputFocus::Results;
    }

    /// Discards the result set and shows an error banner.
    pub fn fail_search(&mut self, message: &str) {
        self.results.clear();
        self.selected_index = 0;
        self.highlight_query = None;
        self.focus = InputFocus::Query;
        self.show_status(message, StatusKind::Error);
    }

    /// Replaces the body with a status banner.
    ///
    /// Success banners return an auto-hide timer action.
    pub fn show_status(&mut self, message: &str, kind: StatusKind) -> Vec<Action> {
        self.last_status_token += 1;
        let token = self.last_status_token;

        self.ui = UiState::Status(StatusMessage {
            text: message.to_string(),
            kind,
            token,
        });

        match kind {
            StatusKind::Success => {
                self.pending_status_timers.push_back(token);
                vec![Action::ScheduleTimer {
                    seconds: STATUS_DISMISS_SECONDS,
                }]
            }
            StatusKind::Error => vec![],
        }
    }

    /// Removes a status banner, returning to the results (or idle).
    ///
    /// Returns `false` when no banner was visible.
    pub fn dismiss_status(&mut self) -> bool {
        if !matches!(self.ui, UiState::Status(_)) {
            return false;
        }
        self.ui = if self.results.is_empty() {
            UiState::Idle
        } else {
            UiState::Results
        };
        true
    }

    /// Handles one fired auto-hide timer.
    ///
    /// Returns `true` if the banner it belonged to was still visible and has been
    /// removed.
    pub fn expire_status_timer(&mut self) -> bool {
        let Some(token) = self.pending_status_timers.pop_front() else {
            tracing::debug!("timer fired without a pending status");
            return false;
        };

        match &self.ui {
            UiState::Status(status) if status.kind == StatusKind::Success && status.token == token => {
                self.dismiss_status()
            }
            _ => false,
        }
    }

    /// Moves selection down by one position, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.results.len();
    }

    /// Moves selection up by one position, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.results.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_result(&self) -> Option<&AppResult> {
        self.results.get(self.selected_index)
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match &self.ui {
            UiState::Idle => BodyView::Empty(EmptyState {
                message: "Find an app to download".to_string(),
                subtitle: "Type an app name and press Enter".to_string(),
            }),
            UiState::Loading => BodyView::Skeleton {
                count: SKELETON_COUNT,
            },
            UiState::Results => self.compute_results(rows, cols),
            UiState::Status(status) => BodyView::Status(StatusView {
                message: status.text.clone(),
                kind: status.kind,
            }),
        };

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            body,
            footer: self.compute_footer(),
        }
    }

    /// Number of result items that fit in the body.
    #[must_use]
    pub const fn visible_item_capacity(rows: usize) -> usize {
        let available = rows.saturating_sub(CHROME_ROWS) / ROWS_PER_ITEM;
        if available == 0 {
            1
        } else {
            available
        }
    }

    fn compute_results(&self, rows: usize, cols: usize) -> BodyView {
        let total = self.results.len();
        let capacity = Self::visible_item_capacity(rows);

        let mut visible_start = self.selected_index.saturating_sub(capacity / 2);
        let visible_end = (visible_start + capacity).min(total);
        if visible_end - visible_start < capacity && total >= capacity {
            visible_start = visible_end.saturating_sub(capacity);
        }

        let matcher = self
            .highlight_query
            .as_ref()
            .map(|_| SkimMatcherV2::default());
        let max_name = cols.saturating_sub(NAME_RESERVED_COLS).max(8);

        let items = self.results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, result)| {
                let is_selected = visible_start + offset == self.selected_index;
                self.compute_display_item(result, is_selected, max_name, matcher.as_ref())
            })
            .collect();

        BodyView::Results { items, total }
    }

    fn compute_display_item(
        &self,
        result: &AppResult,
        is_selected: bool,
        max_name: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        let full_name = result.display_name();
        let name = truncate_chars(full_name, max_name);
        let name_len = name.chars().count();

        let highlight_ranges = match (matcher, self.highlight_query.as_deref()) {
            (Some(m), Some(query)) if result.raw_name().is_some() => {
                compute_highlight_ranges(full_name, query, m)
                    .into_iter()
                    .filter(|&(start, _)| start < name_len)
                    .map(|(start, end)| (start, end.min(name_len)))
                    .collect()
            }
            _ => vec![],
        };

        DisplayItem {
            name,
            version: result.display_version().to_string(),
            size: result.display_size().to_string(),
            has_icon: result.has_icon(),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let checkbox = if self.appearance.is_dark() { "[x]" } else { "[ ]" };
        HeaderInfo {
            title: " APK Search ".to_string(),
            theme_toggle: format!("{checkbox} dark"),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let loading = self.ui.is_loading();
        SearchBarInfo {
            query: self.query.clone(),
            focused: self.focus == InputFocus::Query,
            button_label: if loading { SEARCHING_LABEL } else { SEARCH_LABEL }.to_string(),
            button_enabled: !loading,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            InputFocus::Query => {
                "Enter: search  Tab: results  Tab,t: theme  Esc: clear/close"
            }
            InputFocus::Results => {
                "j/k: navigate  Enter/d: download  /: edit query  t: theme  Esc: back  q: close"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Computes character index ranges of `text` matching `query`.
///
/// Consecutive matched indices are coalesced into `(start, end)` ranges with an
/// exclusive end.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
