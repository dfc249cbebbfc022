//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin. It separates
//! data that lives for the whole plugin lifetime (the catalog, the active tab,
//! the theme) from the per-mount [`CatalogView`], which only exists while the
//! Library tab is on screen.
//!
//! # State Components
//!
//! - **Catalog**: Loaded once by the worker, then shared read-only
//! - **Tabs**: Which screen set is displayed
//! - **Navigator**: Screen stack inside the Library tab
//! - **Library view**: Filter inputs, debouncer, results, selection
//! - **Notice**: Transient acknowledgement, cleared on the next key
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a
//! [`UIViewModel`](crate::ui::viewmodel::UIViewModel), handling grid windowing,
//! match highlighting and the loading → empty → grid priority.
//!
//! # Example
//!
//! ```rust
//! use storefront::app::{AppState, Tab};
//! use storefront::catalog::CatalogSourceSpec;
//! use storefront::ui::theme::Theme;
//!
//! let state = AppState::new(Theme::default(), CatalogSourceSpec::Bundled, 300, Tab::Library);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.title, "Kitaplar");
//! ```

use super::catalog_view::CatalogView;
use super::home;
use super::modes::{InputMode, Tab};
use super::navigation::{Navigator, ScreenName};
use crate::catalog::{match_ranges, Catalog, CatalogSourceSpec};
use crate::domain::Product;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, CatalogContent, CatalogViewModel, DetailViewModel, DisplayItem, EmptyState,
    FooterInfo, GridViewModel, HeaderInfo, PickerEntry, PickerViewModel, SearchBarInfo,
    TabBar, TabEntry, UIViewModel,
};
use crate::worker::WorkerMessage;

/// Application brand shown in the header.
pub const BRAND: &str = "Sınavv";

/// Acknowledgement shown after the purchase button.
pub const PURCHASE_NOTICE: &str = "Satın alma işlemi";

/// Shown when the filter leaves nothing.
pub const NO_RESULTS: &str = "Hiç ürün bulunamadı.";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The catalog, once the worker has delivered it.
    pub catalog: Option<Catalog>,

    /// Where the worker should load the catalog from.
    pub catalog_source: CatalogSourceSpec,

    /// Whether a load request has already been sent.
    pub catalog_requested: bool,

    /// Reason the catalog failed to load, if it did.
    pub load_error: Option<String>,

    /// Currently displayed tab.
    pub active_tab: Tab,

    /// Screen stack of the Library tab.
    pub navigator: Navigator,

    /// Mounted catalog view. `Some` exactly while the Library tab is active.
    pub library: Option<CatalogView>,

    /// Quiet window for search input, in milliseconds.
    pub debounce_ms: u64,

    /// Transient acknowledgement line.
    pub notice: Option<String>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the state with `initial_tab` displayed.
    ///
    /// If the initial tab is the Library, its catalog view is mounted right
    /// away (in the loading state, since no catalog is present yet).
    #[must_use]
    pub fn new(
        theme: Theme,
        catalog_source: CatalogSourceSpec,
        debounce_ms: u64,
        initial_tab: Tab,
    ) -> Self {
        let mut state = Self {
            catalog: None,
            catalog_source,
            catalog_requested: false,
            load_error: None,
            active_tab: initial_tab,
            navigator: Navigator::new(),
            library: None,
            debounce_ms,
            notice: None,
            theme,
        };

        if initial_tab == Tab::Library {
            state.mount_library();
        }
        state
    }

    /// Returns the load request to send, at most once per plugin lifetime.
    pub fn request_catalog(&mut self) -> Option<WorkerMessage> {
        if self.catalog.is_some() || self.catalog_requested {
            return None;
        }
        self.catalog_requested = true;
        tracing::debug!(source = ?self.catalog_source, "requesting catalog load");
        Some(WorkerMessage::load_catalog(self.catalog_source.clone()))
    }

    /// Stores the loaded catalog and ends the loading state of a mounted view.
    pub fn on_catalog_loaded(&mut self, catalog: Catalog) {
        tracing::info!(product_count = catalog.len(), "catalog available");
        self.load_error = None;
        if let Some(view) = self.library.as_mut() {
            view.on_catalog_loaded(&catalog);
        }
        self.catalog = Some(catalog);
    }

    /// Records a failed load.
    pub fn on_catalog_failed(&mut self, message: &str) {
        tracing::error!(error = %message, "catalog load failed");
        self.load_error = Some(message.to_string());
    }

    /// Displays `tab`, unmounting or mounting the catalog view as needed.
    ///
    /// Returns `false` if `tab` was already displayed.
    pub fn switch_tab(&mut self, tab: Tab) -> bool {
        if tab == self.active_tab {
            return false;
        }

        tracing::debug!(from = ?self.active_tab, to = ?tab, "switching tab");

        if self.active_tab == Tab::Library {
            self.unmount_library();
        }
        self.active_tab = tab;
        if tab == Tab::Library {
            self.mount_library();
        }
        true
    }

    fn mount_library(&mut self) {
        self.library = Some(CatalogView::mount(self.catalog.as_ref(), self.debounce_ms));
    }

    fn unmount_library(&mut self) {
        if let Some(mut view) = self.library.take() {
            view.unmount();
        }
        self.navigator.reset();
    }

    /// Distinct categories of the loaded catalog, for the picker.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.catalog.as_ref().map(Catalog::categories).unwrap_or_default()
    }

    /// Whether the Library tab is showing the detail screen.
    #[must_use]
    pub fn on_detail_screen(&self) -> bool {
        self.active_tab == Tab::Library && self.navigator.current().screen == ScreenName::ProductDetail
    }

    /// Product handed to the detail screen, if any.
    #[must_use]
    pub fn detail_product(&self) -> Option<&Product> {
        self.navigator.current().params.product.as_ref()
    }

    /// Computes a renderable UI view model from current state and pane size.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        UIViewModel {
            tabs: self.compute_tabs(),
            header: self.compute_header(),
            body: self.compute_body(rows, cols),
            footer: self.compute_footer(),
            notice: self.notice.clone(),
        }
    }

    fn compute_tabs(&self) -> TabBar {
        TabBar {
            entries: Tab::ALL
                .iter()
                .map(|tab| TabEntry {
                    title: tab.title().to_string(),
                    is_active: *tab == self.active_tab,
                })
                .collect(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.active_tab {
            Tab::Library => self.navigator.current().title(),
            other => other.title().to_string(),
        };
        HeaderInfo {
            brand: BRAND.to_string(),
            title,
        }
    }

    fn compute_body(&self, rows: usize, cols: usize) -> Body {
        match self.active_tab {
            Tab::Home => Body::Home(home::dashboard()),
            Tab::Cart => Body::Placeholder {
                message: "Sepet sayfası".to_string(),
            },
            Tab::Other => Body::Placeholder {
                message: "Başka Sayfa İçeriğidir".to_string(),
            },
            Tab::Library => {
                if let Some(error) = &self.load_error {
                    return Body::Failure(EmptyState {
                        message: "Katalog yüklenemedi.".to_string(),
                        subtitle: error.clone(),
                    });
                }
                match self.navigator.current().screen {
                    ScreenName::ProductDetail => {
                        Body::Detail(DetailViewModel::from_product(self.detail_product()))
                    }
                    ScreenName::Catalog => self.library.as_ref().map_or(
                        Body::Catalog(Self::loading_catalog()),
                        |view| Body::Catalog(self.compute_catalog(view, rows, cols)),
                    ),
                }
            }
        }
    }

    fn loading_catalog() -> CatalogViewModel {
        CatalogViewModel {
            search_bar: SearchBarInfo {
                query: String::new(),
                placeholder: "Arama".to_string(),
                is_editing: false,
            },
            category_line: None,
            content: CatalogContent::Loading,
            picker: None,
        }
    }

    fn compute_catalog(&self, view: &CatalogView, rows: usize, cols: usize) -> CatalogViewModel {
        let category_line = view
            .filter
            .category()
            .map(|c| format!("Seçilen Kategori: {c}"));

        let content = if view.loading {
            CatalogContent::Loading
        } else if view.results.is_empty() {
            CatalogContent::Empty(EmptyState {
                message: NO_RESULTS.to_string(),
                subtitle: String::new(),
            })
        } else {
            let chrome = self.catalog_chrome_rows(category_line.is_some());
            CatalogContent::Grid(Self::compute_grid(view, rows.saturating_sub(chrome), cols))
        };

        let picker = view.filter.picker.visible.then(|| PickerViewModel {
            title: "Kategoriler".to_string(),
            entries: self
                .categories()
                .into_iter()
                .enumerate()
                .map(|(idx, label)| PickerEntry {
                    is_cursor: idx == view.filter.picker.cursor,
                    is_active: view.filter.category() == Some(label.as_str()),
                    label,
                })
                .collect(),
        });

        CatalogViewModel {
            search_bar: SearchBarInfo {
                query: view.input_text.clone(),
                placeholder: "Arama".to_string(),
                is_editing: view.input_mode == InputMode::Search,
            },
            category_line,
            content,
            picker,
        }
    }

    /// Rows used by everything but the grid: tab bar, header, border, search
    /// box (3), optional category line, notice line, border, footer.
    fn catalog_chrome_rows(&self, has_category_line: bool) -> usize {
        let mut chrome = 9;
        if has_category_line {
            chrome += 1;
        }
        if self.notice.is_some() {
            chrome += 1;
        }
        chrome
    }

    /// Windows the result list to whole card rows around the cursor.
    fn compute_grid(view: &CatalogView, available_rows: usize, cols: usize) -> GridViewModel {
        let columns = (cols / GridViewModel::CARD_WIDTH).max(1);
        let total = view.results.len();
        let total_rows = total.div_ceil(columns);
        let visible_rows = (available_rows / GridViewModel::CARD_HEIGHT).max(1);

        let selected_row = view.selected_index / columns;
        let mut start_row = selected_row.saturating_sub(visible_rows / 2);
        let end_row = (start_row + visible_rows).min(total_rows);
        if end_row - start_row < visible_rows && total_rows >= visible_rows {
            start_row = end_row.saturating_sub(visible_rows);
        }

        let start = start_row * columns;
        let end = (end_row * columns).min(total);

        let cards = view.results[start..end]
            .iter()
            .enumerate()
            .map(|(offset, product)| {
                Self::compute_display_item(product, start + offset == view.selected_index, &view.filter.query)
            })
            .collect();

        GridViewModel { cards, columns, total }
    }

    fn compute_display_item(product: &Product, is_selected: bool, query: &str) -> DisplayItem {
        const NAME_WIDTH: usize = GridViewModel::NAME_WIDTH;

        let (name, highlight_ranges) = if product.name.chars().count() > NAME_WIDTH {
            let truncated: String = product.name.chars().take(NAME_WIDTH - 3).collect();
            let ranges = match_ranges(&truncated, query);
            (format!("{truncated}..."), ranges)
        } else {
            (product.name.clone(), match_ranges(&product.name, query))
        };

        DisplayItem {
            name,
            image: product.image_or_placeholder().to_string(),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.active_tab {
            Tab::Library if self.load_error.is_some() => "Tab/1-4: switch tab  q: quit",
            Tab::Library if self.on_detail_screen() => {
                "b/Enter: buy  Esc: back  Tab/1-4: switch tab  q: quit"
            }
            Tab::Library => match &self.library {
                Some(view) if view.filter.picker.visible => {
                    "j/k: navigate  Enter: select  Esc/f: close"
                }
                Some(view) if view.input_mode == InputMode::Search => {
                    "Type to search  Backspace: delete  Esc/Enter: done"
                }
                _ => "j/k: navigate  /: search  f: categories  x: clear  Enter: details  q: quit",
            },
            _ => "Tab/1-4: switch tab  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(products: Vec<Product>) -> AppState {
        let mut state = AppState::new(Theme::default(), CatalogSourceSpec::Bundled, 300, Tab::Library);
        state.on_catalog_loaded(Catalog::from_products(products).unwrap());
        state
    }

    fn books(n: i64) -> Vec<Product> {
        (1..=n)
            .map(|id| Product::new(id, format!("Kitap {id}"), "TYT", ""))
            .collect()
    }

    #[test]
    fn library_starts_loading() {
        let state = AppState::new(Theme::default(), CatalogSourceSpec::Bundled, 300, Tab::Library);
        let Body::Catalog(catalog) = state.compute_viewmodel(24, 80).body else {
            panic!("expected catalog body");
        };
        assert_eq!(catalog.content, CatalogContent::Loading);
    }

    #[test]
    fn empty_catalog_shows_no_results() {
        let state = state_with(vec![]);
        let Body::Catalog(catalog) = state.compute_viewmodel(24, 80).body else {
            panic!("expected catalog body");
        };
        assert!(matches!(catalog.content, CatalogContent::Empty(ref e) if e.message == NO_RESULTS));
    }

    #[test]
    fn catalog_is_requested_once() {
        let mut state = AppState::new(Theme::default(), CatalogSourceSpec::Bundled, 300, Tab::Home);
        assert!(state.request_catalog().is_some());
        assert!(state.request_catalog().is_none());
    }

    #[test]
    fn leaving_library_drops_view_and_resets_navigator() {
        let mut state = state_with(books(3));
        state.navigator.navigate_to_detail(Product::new(1, "Kitap 1", "TYT", ""));

        assert!(state.switch_tab(Tab::Cart));
        assert!(state.library.is_none());
        assert_eq!(state.navigator.depth(), 1);

        assert!(state.switch_tab(Tab::Library));
        let view = state.library.as_ref().unwrap();
        assert!(!view.loading);
        assert_eq!(view.results.len(), 3);
        assert!(!state.switch_tab(Tab::Library));
    }

    #[test]
    fn grid_window_follows_selection() {
        let mut state = state_with(books(40));
        let view = state.library.as_mut().unwrap();
        view.selected_index = 39;

        let Body::Catalog(catalog) = state.compute_viewmodel(30, 80).body else {
            panic!("expected catalog body");
        };
        let CatalogContent::Grid(grid) = catalog.content else {
            panic!("expected grid");
        };
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.total, 40);
        assert!(grid.cards.iter().any(|c| c.is_selected && c.name == "Kitap 40"));
    }

    #[test]
    fn category_line_and_header() {
        let mut state = state_with(books(2));
        let catalog = state.catalog.clone();
        state
            .library
            .as_mut()
            .unwrap()
            .select_category("TYT", catalog.as_ref());

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, "Kitaplar");
        let Body::Catalog(catalog) = vm.body else {
            panic!("expected catalog body");
        };
        assert_eq!(catalog.category_line.as_deref(), Some("Seçilen Kategori: TYT"));
    }

    #[test]
    fn load_failure_is_surfaced() {
        let mut state = AppState::new(Theme::default(), CatalogSourceSpec::Bundled, 300, Tab::Library);
        state.on_catalog_failed("load catalog: duplicate product id 3");
        assert!(matches!(state.compute_viewmodel(24, 80).body, Body::Failure(_)));
    }

    #[test]
    fn placeholder_tabs() {
        let mut state = state_with(vec![]);
        state.switch_tab(Tab::Other);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, "Diğer");
        assert_eq!(
            vm.body,
            Body::Placeholder {
                message: "Başka Sayfa İçeriğidir".to_string()
            }
        );
    }
}
