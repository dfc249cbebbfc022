//! Event handling and state transition logic.
//!
//! The handler processes user input, timer ticks and worker responses,
//! translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the plugin shim (keys, timers) or the worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `CatalogView` methods
//! 4. Actions are collected and returned for execution
//!
//! The returned flag tells the shim whether a re-render is needed.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `Select`, `GoBack`
//! - **Search input**: `SearchMode`, `Char`, `Backspace`, `ExitSearch`, `Escape`
//! - **Categories**: `TogglePicker`, `ClearCategory`
//! - **Tabs**: `NextTab`, `SwitchTab`
//! - **System**: `Tick`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use storefront::app::{handle_event, AppState, Event, Tab};
//! use storefront::catalog::CatalogSourceSpec;
//! use storefront::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default(), CatalogSourceSpec::Bundled, 300, Tab::Home);
//! let (render, actions) = handle_event(&mut state, &Event::NextTab, 0)?;
//! assert!(render);
//! assert_eq!(actions.len(), 1); // catalog load request
//! # Ok::<(), storefront::domain::StorefrontError>(())
//! ```

use super::catalog_view::CatalogView;
use super::modes::{InputMode, Tab};
use super::navigation::ScreenName;
use super::state::PURCHASE_NOTICE;
use crate::app::{Action, AppState};
use crate::catalog::Catalog;
use crate::domain::error::Result;
use crate::worker::WorkerResponse;

/// Events triggered by user input, timers, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the grid cursor (or picker cursor) down, wrapping.
    KeyDown,
    /// Moves the grid cursor (or picker cursor) up, wrapping.
    KeyUp,
    /// Confirms the focused element: picker entry, search input, card, or
    /// the purchase button.
    Select,
    /// Starts editing the search input.
    SearchMode,
    /// Stops editing the search input. The typed text stays.
    ExitSearch,
    /// Appends a character to the search input.
    Char(char),
    /// Removes the last character of the search input.
    Backspace,
    /// Closes the picker, leaves search, or goes back, whichever applies.
    Escape,
    /// Shows or hides the category picker.
    TogglePicker,
    /// Returns to showing every category.
    ClearCategory,
    /// Cycles to the next tab.
    NextTab,
    /// Jumps to a tab.
    SwitchTab(Tab),
    /// Pops the navigation stack.
    GoBack,
    /// Presses the purchase button on the detail screen.
    Purchase,
    /// Hides the plugin pane.
    CloseFocus,
    /// A runtime timer fired.
    Tick,
    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Whether the event originates from a keypress.
    #[must_use]
    pub const fn is_key(&self) -> bool {
        !matches!(self, Self::Tick | Self::WorkerResponse(_))
    }
}

/// The catalog view, if the catalog screen is on top of the Library tab.
fn catalog_screen(state: &mut AppState) -> Option<&mut CatalogView> {
    if state.navigator.current().screen != ScreenName::Catalog {
        return None;
    }
    state.library.as_mut()
}

fn schedule(delay_ms: Option<u64>) -> Vec<Action> {
    delay_ms
        .map(|delay_ms| vec![Action::ScheduleTimer { delay_ms }])
        .unwrap_or_default()
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// `now_ms` is the current wall-clock time in milliseconds. It is only used to
/// timestamp search input for debouncing.
///
/// # Returns
///
/// `(render, actions)`: whether the UI must be redrawn, and the side effects
/// to execute in order.
///
/// # Errors
///
/// Does not currently fail. Catalog load failures are stored in state and
/// rendered as the failure screen.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event, now_ms: u64) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let cleared_notice = event.is_key() && state.notice.take().is_some();

    let (render, actions) = match event {
        Event::KeyDown | Event::KeyUp => {
            let categories = state.categories().len();
            match catalog_screen(state) {
                Some(view) if view.filter.picker.visible => {
                    if *event == Event::KeyDown {
                        view.filter.picker_next(categories);
                    } else {
                        view.filter.picker_prev(categories);
                    }
                    (true, vec![])
                }
                Some(view) => {
                    if *event == Event::KeyDown {
                        view.move_selection_down();
                    } else {
                        view.move_selection_up();
                    }
                    (true, vec![])
                }
                None => (false, vec![]),
            }
        }
        Event::Select => handle_select(state),
        Event::SearchMode => match catalog_screen(state) {
            Some(view) if !view.filter.picker.visible => {
                tracing::debug!("entering search mode");
                view.input_mode = InputMode::Search;
                (true, vec![])
            }
            _ => (false, vec![]),
        },
        Event::ExitSearch => match catalog_screen(state) {
            Some(view) if view.input_mode == InputMode::Search => {
                tracing::debug!(input = %view.input_text, "leaving search mode");
                view.input_mode = InputMode::Normal;
                (true, vec![])
            }
            _ => (false, vec![]),
        },
        Event::Char(c) => match catalog_screen(state) {
            Some(view) if view.input_mode == InputMode::Search => {
                let delay = view.push_char(*c, now_ms);
                tracing::trace!(input = %view.input_text, char = %c, "search input updated");
                (true, schedule(delay))
            }
            _ => (false, vec![]),
        },
        Event::Backspace => {
            if state.on_detail_screen() {
                (state.navigator.go_back(), vec![])
            } else {
                match catalog_screen(state) {
                    Some(view) if view.input_mode == InputMode::Search => {
                        let delay = view.pop_char(now_ms);
                        (true, schedule(delay))
                    }
                    _ => (false, vec![]),
                }
            }
        }
        Event::Escape => {
            if state.on_detail_screen() {
                (state.navigator.go_back(), vec![])
            } else {
                match catalog_screen(state) {
                    Some(view) if view.filter.picker.visible => {
                        view.filter.close_picker();
                        (true, vec![])
                    }
                    Some(view) if view.input_mode == InputMode::Search => {
                        view.input_mode = InputMode::Normal;
                        (true, vec![])
                    }
                    _ => (false, vec![]),
                }
            }
        }
        Event::TogglePicker => match catalog_screen(state) {
            Some(view) => {
                view.filter.toggle_picker();
                (true, vec![])
            }
            None => (false, vec![]),
        },
        Event::ClearCategory => {
            let catalog = state.catalog.clone();
            match catalog_screen(state) {
                Some(view) if view.filter.selected_category.is_some() => {
                    view.clear_category(catalog.as_ref());
                    (true, vec![])
                }
                _ => (false, vec![]),
            }
        }
        Event::NextTab => {
            let next = state.active_tab.next();
            switch_tab(state, next)
        }
        Event::SwitchTab(tab) => switch_tab(state, *tab),
        Event::GoBack => (state.navigator.go_back(), vec![]),
        Event::Purchase => handle_purchase(state),
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::Tick => match state.library.as_mut() {
            Some(view) => {
                let (changed, rearm) = view.on_timer(state.catalog.as_ref(), now_ms);
                (changed, schedule(rearm))
            }
            None => {
                tracing::trace!("timer fired with no mounted catalog view");
                (false, vec![])
            }
        },
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    };

    Ok((render || cleared_notice, actions))
}

fn handle_select(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.on_detail_screen() {
        return handle_purchase(state);
    }

    let categories = state.categories();
    let catalog = state.catalog.clone();
    let Some(view) = catalog_screen(state) else {
        return (false, vec![]);
    };

    if view.filter.picker.visible {
        let Some(category) = categories.get(view.filter.picker.cursor) else {
            view.filter.close_picker();
            return (true, vec![]);
        };
        view.select_category(category.clone(), catalog.as_ref());
        return (true, vec![]);
    }

    if view.input_mode == InputMode::Search {
        view.input_mode = InputMode::Normal;
        return (true, vec![]);
    }

    let Some(product) = view.selected_product().cloned() else {
        tracing::debug!("no product selected");
        return (false, vec![]);
    };

    tracing::debug!(product_id = product.id, product_name = %product.name, "opening product detail");
    state.navigator.navigate_to_detail(product);
    (true, vec![])
}

fn handle_purchase(state: &mut AppState) -> (bool, Vec<Action>) {
    if !state.on_detail_screen() {
        return (false, vec![]);
    }
    let Some(product) = state.detail_product() else {
        return (false, vec![]);
    };

    tracing::info!(product_id = product.id, "purchase pressed");
    state.notice = Some(PURCHASE_NOTICE.to_string());
    (true, vec![])
}

fn switch_tab(state: &mut AppState, tab: Tab) -> (bool, Vec<Action>) {
    if !state.switch_tab(tab) {
        return (false, vec![]);
    }

    let actions = if tab == Tab::Library {
        state
            .request_catalog()
            .map(|message| vec![Action::PostToWorker(message)])
            .unwrap_or_default()
    } else {
        vec![]
    };
    (true, actions)
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::CatalogLoaded { products } => {
            match Catalog::from_products(products.clone()) {
                Ok(catalog) => state.on_catalog_loaded(catalog),
                Err(e) => state.on_catalog_failed(&e.to_string()),
            }
            (state.active_tab == Tab::Library, vec![])
        }
        WorkerResponse::Error { message } => {
            state.on_catalog_failed(message);
            (state.active_tab == Tab::Library, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSourceSpec;
    use crate::domain::Product;
    use crate::ui::theme::Theme;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Theme::default(), CatalogSourceSpec::Bundled, 300, Tab::Library);
        let products = vec![
            Product::new(1, "Ahmet Hoca TYT", "TYT", ""),
            Product::new(2, "Fizik", "AYT", ""),
        ];
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CatalogLoaded { products }),
            0,
        )
        .unwrap();
        state
    }

    #[test]
    fn typing_schedules_one_timer() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode, 0).unwrap();

        let (_, first) = handle_event(&mut state, &Event::Char('f'), 0).unwrap();
        let (_, second) = handle_event(&mut state, &Event::Char('i'), 10).unwrap();
        assert_eq!(first, vec![Action::ScheduleTimer { delay_ms: 300 }]);
        assert!(second.is_empty());

        let (_, rearm) = handle_event(&mut state, &Event::Tick, 300).unwrap();
        assert_eq!(rearm, vec![Action::ScheduleTimer { delay_ms: 10 }]);

        let (render, _) = handle_event(&mut state, &Event::Tick, 310).unwrap();
        assert!(render);
        assert_eq!(state.library.as_ref().unwrap().results.len(), 1);
    }

    #[test]
    fn chars_outside_search_mode_are_ignored() {
        let mut state = loaded_state();
        let (render, actions) = handle_event(&mut state, &Event::Char('x'), 0).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn picker_select_applies_category() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::TogglePicker, 0).unwrap();
        handle_event(&mut state, &Event::KeyDown, 0).unwrap();
        handle_event(&mut state, &Event::Select, 0).unwrap();

        let view = state.library.as_ref().unwrap();
        assert_eq!(view.filter.category(), Some("AYT"));
        assert!(!view.filter.picker.visible);
        assert_eq!(view.results.len(), 1);

        handle_event(&mut state, &Event::ClearCategory, 0).unwrap();
        assert_eq!(state.library.as_ref().unwrap().results.len(), 2);
    }

    #[test]
    fn select_opens_detail_and_purchase_sets_notice() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::Select, 0).unwrap();
        assert!(state.on_detail_screen());
        assert_eq!(state.detail_product().map(|p| p.id), Some(1));

        handle_event(&mut state, &Event::Select, 0).unwrap();
        assert_eq!(state.notice.as_deref(), Some(PURCHASE_NOTICE));
        assert!(state.on_detail_screen());

        let (render, _) = handle_event(&mut state, &Event::Escape, 0).unwrap();
        assert!(render);
        assert!(state.notice.is_none());
        assert!(!state.on_detail_screen());
    }

    #[test]
    fn leaving_library_silences_pending_timer() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode, 0).unwrap();
        handle_event(&mut state, &Event::Char('f'), 0).unwrap();
        handle_event(&mut state, &Event::SwitchTab(Tab::Cart), 50).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Tick, 300).unwrap();
        assert!(!render);
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::SwitchTab(Tab::Library), 400).unwrap();
        let view = state.library.as_ref().unwrap();
        assert!(view.input_text.is_empty());
        assert_eq!(view.results.len(), 2);
    }

    #[test]
    fn worker_error_is_recorded() {
        let mut state = AppState::new(Theme::default(), CatalogSourceSpec::Bundled, 300, Tab::Library);
        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                message: "load catalog: boom".into(),
            }),
            0,
        )
        .unwrap();
        assert!(render);
        assert_eq!(state.load_error.as_deref(), Some("load catalog: boom"));
    }
}
