//! Status banner component renderer.

use crate::app::modes::StatusKind;
use crate::ui::helpers::{pad, position_cursor, text_width, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusView;

/// Renders a status banner centered two rows into the body.
///
/// Errors use `error_fg` with a `✗` marker, successes `success_fg` with `✓`.
pub fn render_status(row: usize, status: &StatusView, theme: &Theme, cols: usize) {
    let (marker, color) = match status.kind {
        StatusKind::Error => ('✗', &theme.colors.error_fg),
        StatusKind::Success => ('✓', &theme.colors.success_fg),
    };

    let text = truncate_chars(&format!("{marker} {}", status.message), cols);
    let text_len = text_width(&text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row + 2, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(color));
    pad(padding);
    print!("{text}");
    pad(cols.saturating_sub(padding + text_len));
    print!("{}", theme.restore());
}
