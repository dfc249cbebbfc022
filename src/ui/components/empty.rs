//! Centered message renderers: empty results, loading, failure, placeholders.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a two-line centered message starting at `row`.
///
/// The subtitle line is skipped when empty.
///
/// ```text
///          Hiç ürün bulunamadı.
///            [dim subtitle]
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, color: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print_centered(&empty.message, cols);
    print!("{}", Theme::reset());

    if empty.subtitle.is_empty() {
        return row + 1;
    }

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&empty.subtitle, cols);
    print!("{}", Theme::reset());
    row + 2
}

/// Renders the activity indicator shown while the catalog loads.
pub fn render_loading(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print_centered("Yükleniyor...", cols);
    print!("{}", Theme::reset());
    row + 1
}
