//! Input mode and tab types for the application.
//!
//! These enums decide which keybindings are active and which screen set is
//! on display.
//!
//! # State Machine
//!
//! Within the Library tab the catalog view is in one of two input modes:
//! - **Normal**: Navigation and commands
//! - **Search**: Keystrokes edit the search input
//!
//! The picker overlay is orthogonal and lives in
//! [`FilterState`](super::filter_state::FilterState).
//!
//! # Example
//!
//! ```rust
//! use storefront::app::modes::{InputMode, Tab};
//!
//! assert_eq!(Tab::Library.next(), Tab::Cart);
//! assert_eq!(Tab::from_name("kutuphane"), Some(Tab::Library));
//! assert_eq!(InputMode::default(), InputMode::Normal);
//! ```

/// Current input handling mode of the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), f (categories),
    /// x (clear category), enter (details), q (quit).
    #[default]
    Normal,

    /// Keystrokes are appended to the search input.
    Search,
}

/// Top-level tabs of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Profile and streak dashboard.
    Home,
    /// Catalog browsing and product details.
    #[default]
    Library,
    /// Shopping cart placeholder.
    Cart,
    /// Miscellaneous placeholder.
    Other,
}

impl Tab {
    /// Every tab in display order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Library, Self::Cart, Self::Other];

    /// Tab label shown in the tab bar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Ana Sayfa",
            Self::Library => "Kütüphane",
            Self::Cart => "Sepet",
            Self::Other => "Diğer",
        }
    }

    /// Next tab, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Zero-based position in [`Tab::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Tab at a one-based position, as typed on the number row.
    #[must_use]
    pub fn from_number(n: u32) -> Option<Self> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    /// Parses a configuration value. Accepts English and Turkish names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "home" | "index" | "anasayfa" => Some(Self::Home),
            "library" | "kutuphane" | "kütüphane" => Some(Self::Library),
            "cart" | "sepet" => Some(Self::Cart),
            "other" | "another" | "diger" | "diğer" => Some(Self::Other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps() {
        assert_eq!(Tab::Other.next(), Tab::Home);
        assert_eq!(Tab::Home.next(), Tab::Library);
    }

    #[test]
    fn numbers_map_to_tabs() {
        assert_eq!(Tab::from_number(1), Some(Tab::Home));
        assert_eq!(Tab::from_number(4), Some(Tab::Other));
        assert_eq!(Tab::from_number(0), None);
        assert_eq!(Tab::from_number(5), None);
    }

    #[test]
    fn names_parse() {
        assert_eq!(Tab::from_name(" Cart "), Some(Tab::Cart));
        assert_eq!(Tab::from_name("sepet"), Some(Tab::Cart));
        assert_eq!(Tab::from_name("unknown"), None);
    }
}
