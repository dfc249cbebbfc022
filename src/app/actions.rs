//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls Zellij APIs itself. It returns a `Vec<Action>`
//! and the plugin shim executes them in order after the state mutation has
//! finished.
//!
//! # Example
//!
//! ```rust
//! use storefront::app::Action;
//! use storefront::catalog::CatalogSourceSpec;
//! use storefront::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::load_catalog(CatalogSourceSpec::Bundled)),
//!     Action::ScheduleTimer { delay_ms: 300 },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Arms a runtime timer. The resulting timer event is delivered back to
    /// the handler as [`Event::Tick`](super::Event::Tick).
    ScheduleTimer {
        /// Delay in milliseconds.
        delay_ms: u64,
    },
}
