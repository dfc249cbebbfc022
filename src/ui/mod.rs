//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled terminal output through composable
//! rendering components, with theme support and responsive layout.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, centering)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Body, CatalogContent, CatalogViewModel, DetailViewModel, DisplayItem, EmptyState,
    FooterInfo, GridViewModel, HeaderInfo, UIViewModel,
};
