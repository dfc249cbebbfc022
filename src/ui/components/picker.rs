//! Category picker overlay renderer.

use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PickerViewModel;

/// Width of the overlay box including its frame.
const PICKER_WIDTH: usize = 24;

/// Draws the picker as a framed box anchored to the right edge, on top of
/// whatever was rendered below `row`.
///
/// ```text
/// ┌ Kategoriler ─────────┐
/// │ ▸ TYT              ✓ │
/// │   AYT                │
/// └──────────────────────┘
/// ```
pub fn render_picker(row: usize, picker: &PickerViewModel, theme: &Theme, cols: usize) {
    let box_width = PICKER_WIDTH.min(cols);
    let inner = box_width.saturating_sub(2);
    let col = cols.saturating_sub(box_width) + 1;

    let title = truncate(&format!(" {} ", picker.title), inner);
    position_cursor(row, col);
    print!("{}", Theme::fg(&theme.colors.card_border));
    print!("┌");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.card_border));
    print!("{}┐", "─".repeat(inner.saturating_sub(width(&title))));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    if picker.entries.is_empty() {
        render_entry(current_row, col, inner, "  -", false, theme);
        current_row += 1;
    }
    for entry in &picker.entries {
        let marker = if entry.is_cursor { "▸" } else { " " };
        let check = if entry.is_active { " ✓" } else { "" };
        let label = truncate(&entry.label, inner.saturating_sub(6));
        let pad = inner.saturating_sub(3 + width(&label) + width(check));
        let text = format!(" {marker} {label}{}{check}", " ".repeat(pad));
        render_entry(current_row, col, inner, &text, entry.is_cursor, theme);
        current_row += 1;
    }

    position_cursor(current_row, col);
    print!("{}", Theme::fg(&theme.colors.card_border));
    print!("└{}┘", "─".repeat(inner));
    print!("{}", Theme::reset());
}

fn render_entry(row: usize, col: usize, inner: usize, text: &str, highlighted: bool, theme: &Theme) {
    let text = truncate(text, inner);

    position_cursor(row, col);
    print!("{}", Theme::fg(&theme.colors.card_border));
    print!("│");
    if highlighted {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{text}");
    print!("{}", " ".repeat(inner.saturating_sub(width(&text))));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.card_border));
    print!("│");
    print!("{}", Theme::reset());
}
