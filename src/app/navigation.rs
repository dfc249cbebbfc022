//! Screen stack for the Library tab.
//!
//! A minimal stack navigator: screens are addressed by name and receive an
//! optional parameter object, mirroring `navigate(screenName, params)`. The
//! catalog screen is the permanent root; the detail screen is pushed on top of
//! it, so the catalog view (and its filter state) survives the round trip.

use crate::domain::Product;

/// Named screens reachable inside the Library tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenName {
    /// Catalog browsing screen (stack root).
    Catalog,
    /// Product detail screen.
    ProductDetail,
}

impl ScreenName {
    /// Stable route name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "Kutuphane",
            Self::ProductDetail => "UrunDetay",
        }
    }
}

/// Parameters delivered to a screen. Every field is optional at the
/// destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    /// Product handed over to the detail screen.
    pub product: Option<Product>,
}

/// One entry of the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub screen: ScreenName,
    pub params: RouteParams,
}

impl Route {
    /// Header title for this route.
    ///
    /// The detail screen is titled with the product name when a product was
    /// handed over.
    #[must_use]
    pub fn title(&self) -> String {
        match self.screen {
            ScreenName::Catalog => "Kitaplar".to_string(),
            ScreenName::ProductDetail => self
                .params
                .product
                .as_ref()
                .map_or_else(|| "Ürün Detay".to_string(), |p| p.name.clone()),
        }
    }
}

/// Stack navigator rooted at the catalog screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    /// A navigator showing the catalog screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Route {
                screen: ScreenName::Catalog,
                params: RouteParams::default(),
            }],
        }
    }

    /// Pushes `screen` with `params`.
    pub fn navigate(&mut self, screen: ScreenName, params: RouteParams) {
        tracing::debug!(
            screen = screen.as_str(),
            has_product = params.product.is_some(),
            depth = self.stack.len() + 1,
            "navigating"
        );
        self.stack.push(Route { screen, params });
    }

    /// Hands a product over to the detail screen.
    pub fn navigate_to_detail(&mut self, product: Product) {
        self.navigate(
            ScreenName::ProductDetail,
            RouteParams {
                product: Some(product),
            },
        );
    }

    /// Pops the current screen. Returns `false` at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Drops everything above the root.
    pub fn reset(&mut self) {
        self.stack.truncate(1);
    }

    /// The route on top of the stack.
    #[must_use]
    pub fn current(&self) -> &Route {
        // The root is never popped.
        &self.stack[self.stack.len() - 1]
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_round_trip_carries_product() {
        let mut nav = Navigator::new();
        let product = Product::new(7, "Kitap A", "TYT", "x");
        nav.navigate_to_detail(product.clone());

        let route = nav.current();
        assert_eq!(route.screen, ScreenName::ProductDetail);
        assert_eq!(route.params.product.as_ref(), Some(&product));
        assert_eq!(route.title(), "Kitap A");

        assert!(nav.go_back());
        assert_eq!(nav.current().screen, ScreenName::Catalog);
        assert_eq!(nav.current().title(), "Kitaplar");
    }

    #[test]
    fn root_cannot_be_popped() {
        let mut nav = Navigator::new();
        assert!(!nav.go_back());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn detail_without_params_has_fallback_title() {
        let mut nav = Navigator::new();
        nav.navigate(ScreenName::ProductDetail, RouteParams::default());
        assert_eq!(nav.current().title(), "Ürün Detay");
        nav.reset();
        assert_eq!(nav.depth(), 1);
    }
}
