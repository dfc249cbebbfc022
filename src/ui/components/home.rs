//! Home dashboard renderer.

use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DashboardItem, HomeViewModel};

/// Left margin of dashboard content.
const MARGIN: usize = 2;

/// Renders the profile card and dashboard sections from `row`, stopping
/// before `max_row`.
pub fn render_home(row: usize, home: &HomeViewModel, theme: &Theme, cols: usize, max_row: usize) -> usize {
    let margin = " ".repeat(MARGIN);
    let mut current_row = row + 1;

    position_cursor(current_row, 1);
    print!("{margin}");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", home.profile.name);
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  {}  ·  {}", home.profile.league, home.profile.score);
    print!("{}", Theme::reset());
    current_row += 2;

    for section in &home.sections {
        if current_row >= max_row {
            break;
        }
        position_cursor(current_row, 1);
        print!("{margin}");
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.header_fg));
        print!("{}", section.title);
        print!("{}", Theme::reset());
        current_row += 1;

        for item in &section.items {
            if current_row >= max_row {
                break;
            }
            render_item(current_row, item, theme, cols);
            current_row += 1;
        }
        current_row += 1;
    }

    current_row
}

/// `  title · detail                    [ action ]`
fn render_item(row: usize, item: &DashboardItem, theme: &Theme, cols: usize) {
    let action = item.action.as_ref().map(|a| format!("[ {a} ]"));
    let action_len = action.as_deref().map_or(0, width);
    let text_room = cols.saturating_sub(2 * MARGIN + action_len + 1);

    let title = truncate(&item.title, text_room);
    let detail = truncate(&item.detail, text_room.saturating_sub(width(&title) + 3));

    position_cursor(row, 1);
    print!("{}", " ".repeat(MARGIN * 2));
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{title}");
    let mut used = width(&title);
    if !detail.is_empty() {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(" · {detail}");
        used += width(&detail) + 3;
    }
    print!("{}", Theme::reset());

    if let Some(action) = action {
        print!("{}", " ".repeat(text_room.saturating_sub(used) + 1));
        print!("{}", Theme::fg(&theme.colors.button_fg));
        print!("{}", Theme::bg(&theme.colors.button_bg));
        print!("{action}");
        print!("{}", Theme::reset());
    }
}
