//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Storefront library and Zellij. It
//! implements `ZellijPlugin`, registers the catalog worker, translates Zellij
//! events into library [`Event`]s and executes the returned [`Action`]s.
//!
//! ```text
//! ┌──────────────────────────┐
//! │   Zellij Main Thread     │
//! │  ┌───────────────────┐   │
//! │  │  State (plugin)   │   │  ← UI state, event handling
//! │  └───────────────────┘   │
//! │          │ IPC           │
//! │          ▼               │
//! │  ┌───────────────────┐   │
//! │  │ StorefrontWorker  │   │  ← Catalog load
//! │  └───────────────────┘   │
//! └──────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: `Key`, `CustomMessage`, `Timer`
//! 3. **Catalog**: Post `LoadCatalog` to the worker once the library is shown
//! 4. **Update**: Map events, delegate to `handle_event`, run actions
//! 5. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global: `Tab` next tab, `1`-`4` jump to a tab, `q` close (not while typing).
//!
//! Catalog:
//! - `j`/`k`/arrows: Move selection
//! - `Enter`: Open product detail
//! - `/`: Enter search mode
//! - `f`: Toggle category picker
//! - `x`: Clear category
//!
//! Search mode: characters and `Backspace` edit the query, `Esc`/`Enter` leave.
//!
//! Picker: `j`/`k`/arrows move, `Enter` select, `Esc`/`f` close.
//!
//! Detail: `b`/`Enter` purchase, `Esc`/`Backspace` back.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use storefront::app::{AppState, Tab};
use storefront::worker::{StorefrontWorker, WorkerMessage, WorkerResponse, CATALOG_MESSAGE};
use storefront::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);
register_worker!(StorefrontWorker, storefront_worker, STOREFRONT_WORKER);

/// Worker namespace, matching the `register_worker!` name above.
const WORKER_NAME: &str = "storefront";

/// Which key table applies to the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyContext {
    /// Home, Cart, Other: global keys only.
    Static,
    Catalog,
    Search,
    Picker,
    Detail,
}

/// Plugin state wrapper.
struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: storefront::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        storefront::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(config = ?config, "parsed configuration");

        self.app = storefront::initialize(&config);

        subscribe(&[EventType::Key, EventType::CustomMessage, EventType::Timer]);

        if self.app.library.is_some() {
            if let Some(message) = self.app.request_catalog() {
                Self::post_worker_message(&message);
            }
        }

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Tick,
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event, now_ms()) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        storefront::ui::render(&self.app, rows, cols);
    }
}

/// Wall-clock milliseconds for debouncing.
fn now_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn key_context(&self) -> KeyContext {
        if self.app.on_detail_screen() {
            return KeyContext::Detail;
        }
        match &self.app.library {
            None => KeyContext::Static,
            Some(view) if view.filter.picker.visible => KeyContext::Picker,
            Some(view) if view.input_mode == InputMode::Search => KeyContext::Search,
            Some(_) => KeyContext::Catalog,
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) || key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        let context = self.key_context();
        tracing::debug!(bare_key = ?key.bare_key, context = ?context, "key event");

        if key.bare_key == BareKey::Tab {
            return Some(Event::NextTab);
        }

        if context == KeyContext::Search {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter => Some(Event::ExitSearch),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c) => Some(Event::Char(c)),
                _ => None,
            };
        }

        if let BareKey::Char(c) = key.bare_key {
            if let Some(tab) = c.to_digit(10).and_then(Tab::from_number) {
                return Some(Event::SwitchTab(tab));
            }
        }

        Some(match (context, key.bare_key) {
            (_, BareKey::Char('q')) => Event::CloseFocus,
            (KeyContext::Static, _) => return None,

            (KeyContext::Detail, BareKey::Char('b')) => Event::Purchase,
            (KeyContext::Detail, BareKey::Enter) => Event::Select,
            (KeyContext::Detail, BareKey::Esc | BareKey::Backspace) => Event::GoBack,
            (KeyContext::Detail, _) => return None,

            (KeyContext::Picker | KeyContext::Catalog, BareKey::Down | BareKey::Char('j')) => {
                Event::KeyDown
            }
            (KeyContext::Picker | KeyContext::Catalog, BareKey::Up | BareKey::Char('k')) => {
                Event::KeyUp
            }
            (KeyContext::Picker | KeyContext::Catalog, BareKey::Enter) => Event::Select,
            (KeyContext::Picker | KeyContext::Catalog, BareKey::Char('f')) => Event::TogglePicker,
            (KeyContext::Picker | KeyContext::Catalog, BareKey::Esc) => Event::Escape,
            (KeyContext::Catalog, BareKey::Char('/')) => Event::SearchMode,
            (KeyContext::Catalog, BareKey::Char('x')) => Event::ClearCategory,
            _ => return None,
        })
    }

    /// Maps worker replies to application events.
    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != CATALOG_MESSAGE {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        let response = WorkerResponse::from_payload(payload).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to deserialize worker response");
            WorkerResponse::Error {
                message: e.to_string(),
            }
        });
        Some(Event::WorkerResponse(response))
    }

    fn post_worker_message(message: &WorkerMessage) {
        match message.to_payload() {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: CATALOG_MESSAGE.to_string(),
                    payload,
                });
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker message"),
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => Self::post_worker_message(message),
            #[allow(clippy::cast_precision_loss)]
            Action::ScheduleTimer { delay_ms } => set_timeout(*delay_ms as f64 / 1000.0),
        }
    }
}
