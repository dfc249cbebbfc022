//! Composable UI component renderers.
//!
//! Each component draws one part of the pane at an explicit row and returns
//! the next free row, so layouts are plain sequences of calls.
//!
//! # Components
//!
//! - [`tabs`]: Numbered tab bar
//! - [`header`]: Brand and screen title
//! - [`search`]: Search input box
//! - [`grid`]: Product cards
//! - [`picker`]: Category picker overlay
//! - [`detail`]: Product detail screen
//! - [`home`]: Home dashboard
//! - [`empty`]: Centered messages (no results, loading, failure)
//! - [`footer`]: Keybinding hints and the notice line
//!
//! # Layout
//!
//! ```text
//! [Tab bar]
//! [Header]
//! [Border]
//! [Body: screen specific]
//! [Notice, when present]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod grid;
mod header;
mod home;
mod picker;
mod search;
mod tabs;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, CatalogContent, CatalogViewModel, EmptyState, UIViewModel};

use detail::render_detail;
use empty::{render_empty_state, render_loading};
use footer::{render_footer, render_notice};
use grid::render_grid;
use header::render_header;
use home::render_home;
use picker::render_picker;
use search::render_search_bar;
use tabs::render_tabs;

/// Renders a horizontal separator at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full screen: chrome, then the body between header and footer.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 1;
    current_row = render_tabs(current_row, &vm.tabs, theme, cols);
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let body_end = if vm.notice.is_some() {
        border_row.saturating_sub(1)
    } else {
        border_row
    };

    match &vm.body {
        Body::Home(home) => {
            render_home(current_row, home, theme, cols, body_end);
        }
        Body::Placeholder { message } => {
            let empty = EmptyState {
                message: message.clone(),
                subtitle: String::new(),
            };
            render_empty_state(current_row + 2, &empty, &theme.colors.text_normal, theme, cols);
        }
        Body::Catalog(catalog) => render_catalog(current_row, catalog, theme, cols, body_end),
        Body::Detail(detail) => {
            render_detail(current_row, detail, theme, cols);
        }
        Body::Failure(failure) => {
            render_empty_state(current_row + 2, failure, &theme.colors.error_fg, theme, cols);
        }
    }

    if let Some(notice) = &vm.notice {
        render_notice(body_end, notice, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Search bar, optional category line, then loading / empty / grid. The
/// picker is drawn last so it overlays the grid.
fn render_catalog(row: usize, catalog: &CatalogViewModel, theme: &Theme, cols: usize, max_row: usize) {
    let mut current_row = render_search_bar(row, &catalog.search_bar, theme, cols);
    let picker_row = current_row;

    if let Some(line) = &catalog.category_line {
        position_cursor(current_row, 3);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.header_fg));
        print!("{line}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    match &catalog.content {
        CatalogContent::Loading => {
            render_loading(current_row + 1, theme, cols);
        }
        CatalogContent::Empty(empty) => {
            render_empty_state(current_row + 1, empty, &theme.colors.empty_state_fg, theme, cols);
        }
        CatalogContent::Grid(grid) => {
            render_grid(current_row, grid, theme, max_row);
        }
    }

    if let Some(picker) = &catalog.picker {
        render_picker(picker_row, picker, theme, cols);
    }
}
