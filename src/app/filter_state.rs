//! Filter state and the category selector state machine.
//!
//! The selector has two independent facets:
//!
//! ```text
//! picker:    hidden ──toggle──▶ visible ──toggle──▶ hidden
//!                                  │
//!                              select(key) ──▶ hidden, category = key
//!
//! category:  None ──select(key)──▶ Some(key) ──clear──▶ None
//! ```

/// Category picker visibility and cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerState {
    /// Whether the picker overlay is shown.
    pub visible: bool,
    /// Highlighted entry within the category list.
    pub cursor: usize,
}

/// Per-mount filter inputs of the catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Committed search text (after debouncing).
    pub query: String,
    /// Active category key, `None` when every category is shown.
    pub selected_category: Option<String>,
    /// Category picker state.
    pub picker: PickerState,
}

impl FilterState {
    /// Shows the picker if hidden, hides it if shown.
    pub fn toggle_picker(&mut self) {
        self.picker.visible = !self.picker.visible;
        tracing::debug!(visible = self.picker.visible, "category picker toggled");
    }

    /// Hides the picker without touching the active category.
    pub fn close_picker(&mut self) {
        self.picker.visible = false;
    }

    /// Activates a category and closes the picker.
    pub fn select_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        tracing::debug!(category = %category, "category selected");
        self.selected_category = Some(category);
        self.picker.visible = false;
    }

    /// Returns to showing every category.
    pub fn clear_category(&mut self) {
        if let Some(previous) = self.selected_category.take() {
            tracing::debug!(category = %previous, "category cleared");
        }
    }

    /// Moves the picker cursor down, wrapping within `len` entries.
    pub fn picker_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.picker.cursor = (self.picker.cursor + 1) % len;
    }

    /// Moves the picker cursor up, wrapping within `len` entries.
    pub fn picker_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.picker.cursor = if self.picker.cursor == 0 {
            len - 1
        } else {
            (self.picker.cursor - 1).min(len - 1)
        };
    }

    /// Active category as a borrowed key.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_unset() {
        let state = FilterState::default();
        assert!(!state.picker.visible);
        assert_eq!(state.category(), None);
        assert!(state.query.is_empty());
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut state = FilterState::default();
        state.toggle_picker();
        assert!(state.picker.visible);
        state.toggle_picker();
        assert!(!state.picker.visible);
    }

    #[test]
    fn selecting_closes_picker() {
        let mut state = FilterState::default();
        state.toggle_picker();
        state.select_category("AYT");

        assert!(!state.picker.visible);
        assert_eq!(state.category(), Some("AYT"));
    }

    #[test]
    fn switching_and_clearing_category() {
        let mut state = FilterState::default();
        state.select_category("TYT");
        state.select_category("AYT");
        assert_eq!(state.category(), Some("AYT"));

        state.clear_category();
        assert_eq!(state.category(), None);
    }

    #[test]
    fn picker_cursor_wraps() {
        let mut state = FilterState::default();
        state.picker_prev(3);
        assert_eq!(state.picker.cursor, 2);
        state.picker_next(3);
        assert_eq!(state.picker.cursor, 0);
        state.picker_next(0);
        assert_eq!(state.picker.cursor, 0);
    }
}
