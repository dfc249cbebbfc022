//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the
//! catalog/worker layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Timer ticks / Worker Responses ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`catalog_view`]: Per-mount state of the catalog screen
//! - [`debounce`]: Search input debouncer
//! - [`filter_state`]: Filter inputs and the category selector
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`home`]: Static Home tab content
//! - [`modes`]: Input mode and tab types
//! - [`navigation`]: Screen stack of the Library tab
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod catalog_view;
pub mod debounce;
pub mod filter_state;
pub mod handler;
pub mod home;
pub mod modes;
pub mod navigation;
pub mod state;

pub use actions::Action;
pub use catalog_view::CatalogView;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Tab};
pub use navigation::{Navigator, Route, RouteParams, ScreenName};
pub use state::AppState;
