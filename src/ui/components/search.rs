//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame, the query
//! text and the search button to its right.

use crate::ui::helpers::{pad, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Gap between the input box and the button.
const BUTTON_GAP: usize = 1;

/// Placeholder shown in an empty, unfocused input.
const PLACEHOLDER: &str = "Enter app name";

/// Renders the search input box and button at the specified row.
///
/// # Parameters
///
/// * `row` - Starting row position for the search box (1-indexed)
/// * `search` - Search bar information (query, focus, button state)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 3, since search box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────┐
/// [margin] │ › query█     │ [ Search APK ]
/// [margin] └──────────────┘
/// ```
///
/// The border uses `search_bar_border` while the input is focused and `border`
/// otherwise. A disabled button is drawn dimmed without its background.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let button = format!("[ {} ]", search.button_label);
    let button_len = text_width(&button);

    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + BUTTON_GAP + button_len);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", theme.restore());
    pad(cols.saturating_sub(SEARCH_BOX_MARGIN + box_width));

    position_cursor(row + 1, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{}", Theme::fg(border));
    print!("│");
    let used = render_query(search, theme, inner_width);
    pad(inner_width.saturating_sub(used));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", theme.restore());
    pad(BUTTON_GAP);
    render_button(&button, search.button_enabled, theme);
    pad(cols.saturating_sub(SEARCH_BOX_MARGIN + box_width + BUTTON_GAP + button_len));

    position_cursor(row + 2, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", theme.restore());
    pad(cols.saturating_sub(SEARCH_BOX_MARGIN + box_width));

    row + 3
}

/// Prints the prompt and query (or placeholder), returning the cells used.
///
/// Long queries keep their tail visible, like a scrolled text input.
fn render_query(search: &SearchBarInfo, theme: &Theme, inner_width: usize) -> usize {
    let prompt = " › ";
    let cursor = if search.focused { "█" } else { "" };
    let available = inner_width.saturating_sub(text_width(prompt) + text_width(cursor) + 1);

    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{prompt}");

    if search.query.is_empty() && !search.focused {
        let placeholder: String = PLACEHOLDER.chars().take(available).collect();
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{placeholder}");
        return text_width(prompt) + text_width(&placeholder);
    }

    let query_len = text_width(&search.query);
    let visible: String = search
        .query
        .chars()
        .skip(query_len.saturating_sub(available))
        .collect();
    print!("{visible}{cursor}");
    text_width(prompt) + text_width(&visible) + text_width(cursor)
}

fn render_button(label: &str, enabled: bool, theme: &Theme) {
    if enabled {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.button_fg));
        print!("{}", Theme::bg(&theme.colors.button_bg));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{label}");
    print!("{}", theme.restore());
}
