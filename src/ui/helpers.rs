//! Shared rendering utilities.
//!
//! Low-level helpers used across components: cursor positioning, centered
//! and padded lines, and match highlighting with proper ANSI reset handling.
//!
//! Widths are measured in `char`s. Catalog text is Turkish prose, where every
//! character occupies one terminal cell.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
///
/// # Example
///
/// ```rust
/// use storefront::ui::helpers::position_cursor;
///
/// position_cursor(5, 1); // Move to start of row 5
/// print!("Content at row 5");
/// ```
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in terminal cells.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `max` cells, marking the cut with `...`.
///
/// # Example
///
/// ```rust
/// use storefront::ui::helpers::truncate;
///
/// assert_eq!(truncate("Türkiye Geneli Deneme", 10), "Türkiye...");
/// assert_eq!(truncate("Sepet", 10), "Sepet");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Prints `text` centered in a line of `cols` cells, padding both sides.
pub fn print_centered(text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = width(&text);
    let padding = cols.saturating_sub(len) / 2;
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}

/// Renders text with highlighted byte ranges for search matches.
///
/// When `is_selected` is `true` highlighting is skipped so the selection
/// background stays uniform. Ranges that do not fall on character boundaries
/// are ignored.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let mut current_pos = 0;

    for &(start, end) in ranges {
        let end = end.min(text.len());
        let (Some(before), Some(matched)) = (text.get(current_pos..start), text.get(start..end)) else {
            continue;
        };

        print!("{before}");
        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        print!("{matched}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if let Some(remaining) = text.get(current_pos..) {
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Ödüllü Seri", 11), "Ödüllü Seri");
        assert_eq!(truncate("Ödüllü Seri", 8), "Ödüll...");
        assert_eq!(truncate("abc", 2), "ab");
    }

    #[test]
    fn width_of_turkish_text() {
        assert_eq!(width("Kütüphane"), 9);
    }
}
