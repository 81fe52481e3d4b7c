//! Header component renderer.
//!
//! Renders the title bar: the widget title on the left and the light/dark theme
//! toggle on the right.

use crate::ui::helpers::{pad, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// # Parameters
///
/// * `row` - Row position to render the header (1-indexed)
/// * `header` - Header information (title and toggle text)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// TITLE [padding] [x] dark
/// ```
///
/// The toggle is dropped when the pane is too narrow to hold both.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = text_width(&header.title);
    let toggle_len = text_width(&header.theme_toggle) + 1;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", header.title);

    if title_len + toggle_len <= cols {
        pad(cols - title_len - toggle_len);
        print!("{}", theme.restore());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{} ", header.theme_toggle);
    } else {
        pad(cols.saturating_sub(title_len));
    }

    print!("{}", theme.restore());
    row + 1
}
