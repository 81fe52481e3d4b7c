//! Result list renderer.
//!
//! Each result occupies three rows: the name line with its icon marker and
//! download affordance, a details line with version and size, and a spacer.

use crate::app::state::ROWS_PER_ITEM;
use crate::ui::helpers::{self, pad, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const DOWNLOAD_BUTTON: &str = "[ Download ]";
const ICON: &str = "◆";
const SELECTED_MARKER: &str = "▸";

/// Renders the visible result items starting at `row`.
///
/// # Parameters
///
/// * `row` - First row of the body (1-indexed)
/// * `items` - Items inside the visible window, in result order
/// * `total` - Number of results including those outside the window
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position
pub fn render_results(
    row: usize,
    items: &[DisplayItem],
    total: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_item(current_row, item, theme, cols);
    }

    // The count goes on the last item's spacer row.
    if total > items.len() && current_row > row {
        let summary = format!("{} of {total} shown", items.len());
        position_cursor(current_row - 1, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        pad(cols.saturating_sub(text_width(&summary) + 2));
        print!("{summary}");
        print!("{}", theme.restore());
    }
    current_row
}

/// Renders one result.
///
/// # Styling Precedence
///
/// 1. Selection background across the name line (if `is_selected`)
/// 2. Query match highlights within the name
/// 3. Normal text color
fn render_item(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let line_style = if item.is_selected {
        format!(
            "{}{}{}",
            Theme::reset(),
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        theme.restore()
    };

    position_cursor(row, 1);
    print!("{line_style}");
    print!(" {} ", if item.is_selected { SELECTED_MARKER } else { " " });

    if item.has_icon {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.icon_fg));
        }
        print!("{ICON} ");
        print!("{line_style}");
    } else {
        print!("  ");
    }

    print!("{}", Theme::bold());
    let name_style = format!("{line_style}{}", Theme::bold());
    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, &name_style);
    print!("{line_style}");

    let mut used = 5 + text_width(&item.name);
    if item.is_selected {
        let button_len = text_width(DOWNLOAD_BUTTON);
        pad(cols.saturating_sub(used + button_len + 1));
        print!("{}", Theme::bold());
        print!("{DOWNLOAD_BUTTON}");
        print!("{line_style}");
        used = cols.saturating_sub(1);
    }
    pad(cols.saturating_sub(used));
    print!("{}", theme.restore());

    let details = format!("Version: {} | Size: {}", item.version, item.size);
    position_cursor(row + 1, 1);
    pad(5);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", helpers::truncate_chars(&details, cols.saturating_sub(5)));
    print!("{}", theme.restore());

    row + ROWS_PER_ITEM
}
