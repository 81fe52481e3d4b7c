//! Empty state component renderer.
//!
//! This module renders the message displayed before the first search.

use crate::ui::helpers::{pad, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// Displays a centered two-line message two rows into the body.
///
/// # Parameters
///
/// * `row` - First row of the body (1-indexed)
/// * `empty` - Empty state information (message and subtitle)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Layout
///
/// ```text
/// [2 blank lines]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let msg_len = text_width(&empty.message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(row + 2, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    pad(msg_padding);
    print!("{}", empty.message);
    pad(cols.saturating_sub(msg_padding + msg_len));
    print!("{}", theme.restore());

    let sub_len = text_width(&empty.subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(row + 3, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    pad(sub_padding);
    print!("{}", empty.subtitle);
    pad(cols.saturating_sub(sub_padding + sub_len));
    print!("{}", theme.restore());
}
