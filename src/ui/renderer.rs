//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! # Example
//!
//! ```rust
//! use storefront::app::{AppState, Tab};
//! use storefront::catalog::CatalogSourceSpec;
//! use storefront::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default(), CatalogSourceSpec::Bundled, 300, Tab::Cart);
//! render(&state, 24, 80); // Renders to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output positioned with explicit cursor moves. Does not
/// clear the screen; Zellij hands the plugin a fresh pane per render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_screen(&viewmodel, &state.theme, cols, rows);
}
