//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state, paints the active palette's
/// background over the whole pane and draws the components on top.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let theme = state.appearance.theme();

    paint_background(theme, rows, cols);
    components::render_layout(&viewmodel, theme, cols, rows);
    print!("{}", Theme::reset());
}

fn paint_background(theme: &Theme, rows: usize, cols: usize) {
    let base = theme.restore();
    for row in 1..=rows {
        position_cursor(row, 1);
        print!("{base}");
        pad(cols);
    }
}
