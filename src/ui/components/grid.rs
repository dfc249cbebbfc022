//! Product grid component renderer.
//!
//! Cards are laid out row-major, `columns` per row. Each card is a framed
//! box holding the image reference and the product name:
//!
//! ```text
//! ┌──────────────────────┐ ┌──────────────────────┐
//! │ [kitap.png]          │ │ [kitap.png]          │
//! │ Ahmet Hoca TYT Ma... │ │ Paragraf Denemeleri  │
//! └──────────────────────┘ └──────────────────────┘
//! ```

use crate::ui::helpers::{self, position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, GridViewModel};

/// Frame width of one card (the card width minus its gutter).
const FRAME_WIDTH: usize = GridViewModel::CARD_WIDTH - 2;

/// Renders the visible grid rows starting at `row`, stopping before
/// `max_row`. Returns the next free row.
pub fn render_grid(row: usize, grid: &GridViewModel, theme: &Theme, max_row: usize) -> usize {
    let mut current_row = row;

    for card_row in grid.cards.chunks(grid.columns) {
        if current_row + GridViewModel::CARD_HEIGHT > max_row {
            break;
        }
        for (column, card) in card_row.iter().enumerate() {
            render_card(current_row, 1 + column * GridViewModel::CARD_WIDTH, card, theme);
        }
        current_row += GridViewModel::CARD_HEIGHT;
    }

    current_row
}

/// Draws one card with its top-left corner at (`row`, `col`).
fn render_card(row: usize, col: usize, card: &DisplayItem, theme: &Theme) {
    let inner = FRAME_WIDTH - 2;
    let frame_color = if card.is_selected {
        &theme.colors.selection_bg
    } else {
        &theme.colors.card_border
    };

    position_cursor(row, col);
    print!("{}", Theme::fg(frame_color));
    print!("┌{}┐", "─".repeat(inner));
    print!("{}", Theme::reset());

    let image = truncate(&format!("[{}]", card.image), inner - 2);
    render_card_line(row + 1, col, card, theme, frame_color, |theme| {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{image}");
        width(&image)
    });

    render_card_line(row + 2, col, card, theme, frame_color, |theme| {
        if card.is_selected {
            print!("{}", Theme::bold());
        }
        helpers::render_highlighted_text(&card.name, &card.highlight_ranges, theme, card.is_selected);
        width(&card.name)
    });

    position_cursor(row + 3, col);
    print!("{}", Theme::fg(frame_color));
    print!("└{}┘", "─".repeat(inner));
    print!("{}", Theme::reset());
}

/// Draws `│ <content> │`, padding the content to the frame width.
///
/// `content` prints the text and returns its width.
fn render_card_line(
    row: usize,
    col: usize,
    card: &DisplayItem,
    theme: &Theme,
    frame_color: &str,
    content: impl FnOnce(&Theme) -> usize,
) {
    let inner = FRAME_WIDTH - 2;

    position_cursor(row, col);
    print!("{}", Theme::fg(frame_color));
    print!("│");
    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!(" ");
    let used = content(theme);
    print!("{}", " ".repeat(inner.saturating_sub(used + 1)));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(frame_color));
    print!("│");
    print!("{}", Theme::reset());
}
