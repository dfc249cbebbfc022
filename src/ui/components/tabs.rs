//! Tab bar component renderer.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TabBar;

/// Renders the numbered tab labels at `row` and returns the next free row.
///
/// The active tab is drawn inverted; the number prefix is the key that
/// jumps to it.
pub fn render_tabs(row: usize, tabs: &TabBar, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let mut used = 0;

    for (idx, entry) in tabs.entries.iter().enumerate() {
        let label = format!(" {} {} ", idx + 1, entry.title);
        let len = width(&label);
        if used + len > cols {
            break;
        }

        if entry.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.tab_active_fg));
            print!("{}", Theme::bg(&theme.colors.tab_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.tab_inactive_fg));
        }
        print!("{label}");
        print!("{}", Theme::reset());
        used += len;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
