//! Header component renderer: brand on the left, screen title centered.

use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header line at `row` and returns the next free row.
///
/// ```text
/// Sınavv                      Kitaplar
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let brand = format!(" {}", header.brand);
    let brand_len = width(&brand);
    let title = truncate(&header.title, cols.saturating_sub(2 * (brand_len + 1)));
    let title_len = width(&title);
    let title_start = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.brand_fg));
    print!("{brand}");

    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", " ".repeat(title_start.saturating_sub(brand_len)));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(title_start.max(brand_len) + title_len)));
    print!("{}", Theme::reset());
    row + 1
}
