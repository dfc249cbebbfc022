//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `compute_viewmodel` and consumed
//! by the renderer. They contain no business logic, only display-ready data:
//! labels are already formatted, the grid is already windowed, and match
//! highlight ranges are already resolved.
//!
//! # Example
//!
//! ```rust
//! use storefront::ui::viewmodel::{Body, FooterInfo, HeaderInfo, TabBar, UIViewModel};
//!
//! let vm = UIViewModel {
//!     tabs: TabBar { entries: vec![] },
//!     header: HeaderInfo { brand: "Sınavv".to_string(), title: "Sepet".to_string() },
//!     body: Body::Placeholder { message: "Sepet sayfası".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     notice: None,
//! };
//! assert!(vm.notice.is_none());
//! ```

use crate::domain::Product;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Tab bar along the top of the pane.
    pub tabs: TabBar,

    /// Brand and screen title.
    pub header: HeaderInfo,

    /// Screen content.
    pub body: Body,

    /// Keybinding hints for the current mode.
    pub footer: FooterInfo,

    /// Transient acknowledgement line (e.g. after a purchase).
    pub notice: Option<String>,
}

/// Screen content, one variant per screen kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Home dashboard.
    Home(HomeViewModel),
    /// Static single-message screen (Cart, Other).
    Placeholder { message: String },
    /// Catalog browsing screen.
    Catalog(CatalogViewModel),
    /// Product detail screen.
    Detail(DetailViewModel),
    /// The catalog could not be loaded.
    Failure(EmptyState),
}

/// One label in the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub title: String,
    pub is_active: bool,
}

/// Tab bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBar {
    pub entries: Vec<TabEntry>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Application brand shown on the left.
    pub brand: String,
    /// Title of the current screen.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "/: search  f: categories  q: quit").
    pub keybindings: String,
}

/// Centered two-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search input display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Raw input as typed, before debouncing.
    pub query: String,
    /// Placeholder shown when `query` is empty.
    pub placeholder: String,
    /// Whether keystrokes currently edit the input.
    pub is_editing: bool,
}

/// Catalog screen display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogViewModel {
    pub search_bar: SearchBarInfo,

    /// `Seçilen Kategori: <key>` when a category is active.
    pub category_line: Option<String>,

    /// Loading indicator, empty message, or the result grid.
    pub content: CatalogContent,

    /// Category picker overlay, when open.
    pub picker: Option<PickerViewModel>,
}

/// What the catalog screen body shows, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogContent {
    /// The catalog has not arrived yet.
    Loading,
    /// No product passes the filter.
    Empty(EmptyState),
    /// Visible slice of the results laid out in rows of cards.
    Grid(GridViewModel),
}

/// Windowed result grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridViewModel {
    /// Visible cards, row-major.
    pub cards: Vec<DisplayItem>,
    /// Cards per row.
    pub columns: usize,
    /// Total number of results, including those scrolled out of view.
    pub total: usize,
}

impl GridViewModel {
    /// Width of one card including its gutter.
    pub const CARD_WIDTH: usize = 26;

    /// Height of one card: top border, image, name, bottom border.
    pub const CARD_HEIGHT: usize = 4;

    /// Cells available for the name inside a card frame.
    pub const NAME_WIDTH: usize = Self::CARD_WIDTH - 6;
}

/// Display information for a single product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Product name, truncated to the card width.
    pub name: String,

    /// Image asset reference.
    pub image: String,

    /// Whether this card is under the cursor.
    pub is_selected: bool,

    /// Byte ranges of `name` matching the committed query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Category picker overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerViewModel {
    /// Overlay heading.
    pub title: String,
    pub entries: Vec<PickerEntry>,
}

/// One selectable category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub label: String,
    /// Under the picker cursor.
    pub is_cursor: bool,
    /// Currently the active category.
    pub is_active: bool,
}

/// Message shown when the detail screen has no product.
pub const DETAIL_NOT_FOUND: &str = "Ürün bilgisi bulunamadı. Lütfen tekrar deneyin.";

/// Label of the purchase button.
pub const PURCHASE_LABEL: &str = "Satın Al";

/// Product detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailViewModel {
    /// No product was handed over.
    NotFound { message: String },
    /// The product handed over by the catalog screen.
    Product {
        name: String,
        /// `Kategori: <category>`
        category_line: String,
        image: String,
        purchase_label: String,
    },
}

impl DetailViewModel {
    /// Builds the detail view model from the navigation payload.
    ///
    /// A missing payload produces the not-found state; a missing category is
    /// shown as an empty label.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront::domain::Product;
    /// use storefront::ui::viewmodel::DetailViewModel;
    ///
    /// let product = Product::new(7, "Kitap A", "TYT", "x");
    /// match DetailViewModel::from_product(Some(&product)) {
    ///     DetailViewModel::Product { category_line, .. } => assert_eq!(category_line, "Kategori: TYT"),
    ///     DetailViewModel::NotFound { .. } => unreachable!(),
    /// }
    /// ```
    #[must_use]
    pub fn from_product(product: Option<&Product>) -> Self {
        product.map_or_else(
            || Self::NotFound {
                message: DETAIL_NOT_FOUND.to_string(),
            },
            |p| Self::Product {
                name: p.name.clone(),
                category_line: format!("Kategori: {}", p.category().unwrap_or_default()),
                image: p.image_or_placeholder().to_string(),
                purchase_label: PURCHASE_LABEL.to_string(),
            },
        )
    }
}

/// Home dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeViewModel {
    pub profile: ProfileCard,
    pub sections: Vec<DashboardSection>,
}

/// Profile summary at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: String,
    pub league: String,
    pub score: u32,
}

/// Titled group of dashboard rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSection {
    pub title: String,
    pub items: Vec<DashboardItem>,
}

/// One dashboard row: a title, a dimmed detail and an optional button label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardItem {
    pub title: String,
    pub detail: String,
    pub action: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_payload_is_not_found() {
        assert_eq!(
            DetailViewModel::from_product(None),
            DetailViewModel::NotFound {
                message: DETAIL_NOT_FOUND.to_string()
            }
        );
    }

    #[test]
    fn product_fields_are_formatted() {
        let product = Product::new(7, "Kitap A", "TYT", "x");
        assert_eq!(
            DetailViewModel::from_product(Some(&product)),
            DetailViewModel::Product {
                name: "Kitap A".to_string(),
                category_line: "Kategori: TYT".to_string(),
                image: "x".to_string(),
                purchase_label: "Satın Al".to_string(),
            }
        );
    }

    #[test]
    fn product_without_category_or_image() {
        let product = Product {
            id: 1,
            name: "Deneme".to_string(),
            category: None,
            image: String::new(),
        };
        let DetailViewModel::Product { category_line, image, .. } =
            DetailViewModel::from_product(Some(&product))
        else {
            panic!("expected product view");
        };
        assert_eq!(category_line, "Kategori: ");
        assert_eq!(image, "kitap.png");
    }
}
