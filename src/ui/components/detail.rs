//! Product detail screen renderer.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailViewModel;

/// Renders the detail screen starting at `row`. Returns the next free row.
///
/// ```text
///              [kitap.png]
///
///            Ahmet Hoca TYT
///            Kategori: TYT
///
///             [ Satın Al ]
/// ```
pub fn render_detail(row: usize, detail: &DetailViewModel, theme: &Theme, cols: usize) -> usize {
    match detail {
        DetailViewModel::NotFound { message } => {
            position_cursor(row + 1, 1);
            print!("{}", Theme::fg(&theme.colors.error_fg));
            print_centered(message, cols);
            print!("{}", Theme::reset());
            row + 2
        }
        DetailViewModel::Product {
            name,
            category_line,
            image,
            purchase_label,
        } => {
            position_cursor(row + 1, 1);
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print_centered(&format!("[{image}]"), cols);

            position_cursor(row + 3, 1);
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print_centered(name, cols);
            print!("{}", Theme::reset());

            position_cursor(row + 4, 1);
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print_centered(category_line, cols);
            print!("{}", Theme::reset());

            let button = format!("[ {purchase_label} ]");
            let len = button.chars().count();
            let padding = cols.saturating_sub(len) / 2;
            position_cursor(row + 6, 1);
            print!("{}", " ".repeat(padding));
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.button_fg));
            print!("{}", Theme::bg(&theme.colors.button_bg));
            print!("{button}");
            print!("{}", Theme::reset());
            print!("{}", " ".repeat(cols.saturating_sub(padding + len)));

            row + 7
        }
    }
}
