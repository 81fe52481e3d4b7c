//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements. Each component is responsible for rendering a specific part of the
//! interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with the theme toggle
//! - [`search`]: Search input box and button
//! - [`results`]: Result items with version, size and download affordance
//! - [`skeleton`]: Loading placeholders
//! - [`status`]: Success and error banners
//! - [`empty`]: Message shown before the first search
//! - [`footer`]: Help text and keybinding hints

mod empty;
mod footer;
mod header;
mod results;
mod search;
mod skeleton;
mod status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use results::render_results;
use search::render_search_bar;
use skeleton::render_skeleton;
use status::render_status;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", theme.restore());
    row + 1
}

/// Renders the full widget layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [blank line]
/// [Body: empty | skeleton | results | status]
/// [Border]
/// [Footer]
/// ```
///
/// # Line Accounting
///
/// Reserves 9 lines for chrome. The body gets the rest; exactly one body panel
/// is drawn, chosen by a single match on [`BodyView`].
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, theme, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    let body_row = current_row + 1;

    let footer_start = rows;
    let border_row = footer_start.saturating_sub(1);

    match &vm.body {
        BodyView::Empty(empty) => render_empty_state(body_row, empty, theme, cols),
        BodyView::Skeleton { count } => {
            render_skeleton(body_row, *count, theme, cols, border_row.saturating_sub(1));
        }
        BodyView::Results { items, total } => {
            render_results(body_row, items, *total, theme, cols);
        }
        BodyView::Status(status) => render_status(body_row, status, theme, cols),
    }

    render_border(border_row, &theme.colors.border, theme, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
