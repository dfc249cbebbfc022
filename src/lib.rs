//! Storefront: a Zellij plugin for browsing a product catalog.
//!
//! The plugin renders a small tabbed storefront inside a terminal pane:
//! - A home dashboard with a profile card and streak/trial-exam summaries
//! - A library tab listing catalog products as a card grid
//! - Debounced substring search and single-category filtering
//! - A product detail screen with a purchase acknowledgement
//! - Catalog loading on a Zellij worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, tabs and navigation              │
//! │  - Debounced catalog view                           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Sources     │   │ - Load        │
//! │ - Theming     │   │ - Filtering   │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/storefront.wasm" {
//!         catalog_path "~/catalogs/db.json"
//!         debounce_ms "300"
//!         initial_tab "library"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use storefront::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::SearchMode, 0)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), storefront::StorefrontError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Tab};
pub use catalog::{Catalog, CatalogSourceSpec};
pub use domain::{Product, Result, StorefrontError};
pub use ui::Theme;

use app::debounce::DEFAULT_DEBOUNCE_MS;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON catalog to read instead of the bundled one. `~` is expanded.
    pub catalog_path: Option<String>,

    /// Search debounce window in milliseconds. Default: 300
    pub debounce_ms: u64,

    /// Tab shown when the plugin opens. Default: the library.
    pub initial_tab: Tab,

    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing filter (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            initial_tab: Tab::Library,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

/// Non-empty trimmed value for `key`.
fn non_empty(config: &BTreeMap<String, String>, key: &str) -> Option<String> {
    config
        .get(key)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Values that fail to parse fall back to their
    /// defaults, so a typo never prevents the plugin from loading.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use storefront::{Config, Tab};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "150".to_string());
    /// map.insert("initial_tab".to_string(), "home".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.debounce_ms, 150);
    /// assert_eq!(config.initial_tab, Tab::Home);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let debounce_ms = config
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        let initial_tab = config
            .get("initial_tab")
            .and_then(|s| Tab::from_name(s))
            .unwrap_or_default();

        Self {
            catalog_path: non_empty(config, "catalog_path"),
            debounce_ms,
            initial_tab,
            theme_name: non_empty(config, "theme"),
            theme_file: non_empty(config, "theme_file"),
            trace_level: non_empty(config, "trace_level"),
        }
    }

    /// Where the worker should read the catalog from.
    #[must_use]
    pub fn catalog_source(&self) -> CatalogSourceSpec {
        self.catalog_path
            .clone()
            .map_or(CatalogSourceSpec::Bundled, CatalogSourceSpec::File)
    }

    /// Resolves the theme: file first, then built-in name, then the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                }
            }
        }

        self.theme_name
            .as_deref()
            .and_then(|name| {
                let theme = Theme::from_name(name);
                if theme.is_none() {
                    tracing::debug!(theme_name = %name, "unknown theme, using default");
                }
                theme
            })
            .unwrap_or_default()
    }
}

/// Builds the initial application state from configuration.
///
/// The catalog is not loaded here; the shim posts the load request returned
/// by [`AppState::request_catalog`] to the worker.
///
/// # Example
///
/// ```rust
/// use storefront::{initialize, Config, Tab};
///
/// let state = initialize(&Config {
///     initial_tab: Tab::Cart,
///     ..Default::default()
/// });
/// assert_eq!(state.active_tab, Tab::Cart);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        initial_tab = ?config.initial_tab,
        debounce_ms = config.debounce_ms,
        "initializing storefront plugin"
    );

    AppState::new(
        config.theme(),
        config.catalog_source(),
        config.debounce_ms,
        config.initial_tab,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("debounce_ms", "soon"),
            ("initial_tab", "checkout"),
            ("catalog_path", "  "),
        ]));
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.initial_tab, Tab::Library);
        assert_eq!(config.catalog_source(), CatalogSourceSpec::Bundled);
    }

    #[test]
    fn catalog_path_selects_file_source() {
        let config = Config::from_zellij(&map(&[("catalog_path", "~/db.json")]));
        assert_eq!(
            config.catalog_source(),
            CatalogSourceSpec::File("~/db.json".to_string())
        );
    }

    #[test]
    fn theme_resolution_order() {
        let named = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        assert_eq!(named.theme().name, "catppuccin-latte");

        let missing_file = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Default::default()
        };
        assert_eq!(missing_file.theme().name, "catppuccin-latte");

        let unknown = Config {
            theme_name: Some("solarized".to_string()),
            ..Default::default()
        };
        assert_eq!(unknown.theme().name, Theme::default().name);
    }

    #[test]
    fn initialize_uses_initial_tab() {
        let state = initialize(&Config {
            initial_tab: Tab::Home,
            ..Default::default()
        });
        assert_eq!(state.active_tab, Tab::Home);
        assert!(state.library.is_none());
    }
}
