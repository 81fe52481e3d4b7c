//! Loading placeholder renderer.

use crate::app::state::ROWS_PER_ITEM;
use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;

/// Left margin shared with result items.
const ITEM_MARGIN: usize = 4;

/// Renders `count` inert placeholders shaped like result items.
///
/// Each placeholder has a name bar and a shorter details bar. Placeholders that
/// do not fit above `max_row` are skipped.
pub fn render_skeleton(row: usize, count: usize, theme: &Theme, cols: usize, max_row: usize) {
    let width = cols.saturating_sub(ITEM_MARGIN * 2);
    let name_bar = (width * 3 / 5).max(1);
    let details_bar = (width * 2 / 5).max(1);

    for index in 0..count {
        let item_row = row + index * ROWS_PER_ITEM;
        if item_row + 1 > max_row {
            break;
        }

        for (offset, bar) in [(0, name_bar), (1, details_bar)] {
            position_cursor(item_row + offset, 1);
            pad(ITEM_MARGIN);
            print!("{}", Theme::fg(&theme.colors.skeleton_fg));
            print!("{}", "░".repeat(bar));
            print!("{}", theme.restore());
            pad(cols.saturating_sub(ITEM_MARGIN + bar));
        }
    }
}
