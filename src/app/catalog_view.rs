//! Catalog view state: the per-mount half of the Library tab.
//!
//! A [`CatalogView`] exists only while the Library tab is mounted. It owns the
//! filter inputs, the raw search input, the debouncer, and the derived result
//! list. Dropping it discards all of that, so a remount starts from defaults
//! and a debounce timer that fires after teardown has nothing to update.
//!
//! # Recomputation
//!
//! `results` is derived state. It is recomputed from scratch by
//! [`CatalogView::refresh`] after every committed query, category change, or
//! catalog arrival; it is never patched incrementally.

use super::debounce::{Debouncer, Flush};
use super::filter_state::FilterState;
use super::modes::InputMode;
use crate::catalog::{filter_products, Catalog};
use crate::domain::Product;

/// Mounted catalog view.
#[derive(Debug, Clone)]
pub struct CatalogView {
    /// Committed filter inputs and picker state.
    pub filter: FilterState,

    /// Raw search input as typed, shown in the search bar before it is
    /// committed to `filter.query`.
    pub input_text: String,

    /// Whether keystrokes edit the search input.
    pub input_mode: InputMode,

    /// Coalesces `input_text` edits into `filter.query` commits.
    pub debouncer: Debouncer,

    /// Products matching the current filter, in catalog order.
    pub results: Vec<Product>,

    /// Cursor within `results`. Clamped by `refresh`.
    pub selected_index: usize,

    /// True until the catalog is available.
    pub loading: bool,
}

impl CatalogView {
    /// Mounts the view.
    ///
    /// If the catalog is already loaded the results are computed immediately;
    /// otherwise the view starts in the loading state and waits for
    /// [`CatalogView::on_catalog_loaded`].
    #[must_use]
    pub fn mount(catalog: Option<&Catalog>, debounce_ms: u64) -> Self {
        let mut view = Self {
            filter: FilterState::default(),
            input_text: String::new(),
            input_mode: InputMode::Normal,
            debouncer: Debouncer::new(debounce_ms),
            results: Vec::new(),
            selected_index: 0,
            loading: true,
        };

        if let Some(catalog) = catalog {
            view.on_catalog_loaded(catalog);
        }

        tracing::debug!(loading = view.loading, "catalog view mounted");
        view
    }

    /// Ends the loading state and computes the first result set.
    pub fn on_catalog_loaded(&mut self, catalog: &Catalog) {
        self.loading = false;
        self.refresh(catalog);
    }

    /// Tears the view down. Pending search input is discarded.
    pub fn unmount(&mut self) {
        self.debouncer.cancel();
        tracing::debug!("catalog view unmounted");
    }

    /// Re-derives `results` from the catalog and the committed filter inputs.
    pub fn refresh(&mut self, catalog: &Catalog) {
        self.results = filter_products(
            catalog.products(),
            &self.filter.query,
            self.filter.category(),
        );

        if self.results.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.results.len() - 1);
        }
    }

    /// Appends a character to the raw search input.
    ///
    /// Returns the timer delay to schedule, if the debouncer needs one.
    pub fn push_char(&mut self, c: char, now_ms: u64) -> Option<u64> {
        self.input_text.push(c);
        self.debouncer.submit(self.input_text.clone(), now_ms)
    }

    /// Removes the last character of the raw search input.
    ///
    /// Returns the timer delay to schedule, if the debouncer needs one.
    pub fn pop_char(&mut self, now_ms: u64) -> Option<u64> {
        self.input_text.pop()?;
        self.debouncer.submit(self.input_text.clone(), now_ms)
    }

    /// Handles the debounce timer firing.
    ///
    /// Returns `(changed, rearm_delay)`: whether the results were recomputed,
    /// and a timer delay to schedule if the debouncer re-armed.
    pub fn on_timer(&mut self, catalog: Option<&Catalog>, now_ms: u64) -> (bool, Option<u64>) {
        match self.debouncer.on_timer(now_ms) {
            Flush::Commit(query) => {
                if query == self.filter.query {
                    return (false, None);
                }
                self.filter.query = query;
                if let Some(catalog) = catalog {
                    self.refresh(catalog);
                }
                (true, None)
            }
            Flush::Rearm { delay_ms } => (false, Some(delay_ms)),
            Flush::Idle => (false, None),
        }
    }

    /// Activates a category and recomputes.
    pub fn select_category(&mut self, category: impl Into<String>, catalog: Option<&Catalog>) {
        self.filter.select_category(category);
        if let Some(catalog) = catalog {
            self.refresh(catalog);
        }
    }

    /// Clears the active category and recomputes.
    pub fn clear_category(&mut self, catalog: Option<&Catalog>) {
        self.filter.clear_category();
        if let Some(catalog) = catalog {
            self.refresh(catalog);
        }
    }

    /// Moves the cursor down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.results.len();
    }

    /// Moves the cursor up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.results.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// The product under the cursor, if any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.results.get(self.selected_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_products(vec![
            Product::new(1, "Ahmet Hoca TYT", "TYT", ""),
            Product::new(2, "Fizik", "AYT", ""),
            Product::new(3, "Ahmet Hoca AYT", "AYT", ""),
        ])
        .unwrap()
    }

    #[test]
    fn mount_without_catalog_is_loading() {
        let view = CatalogView::mount(None, 300);
        assert!(view.loading);
        assert!(view.results.is_empty());
    }

    #[test]
    fn mount_with_catalog_shows_everything() {
        let catalog = catalog();
        let view = CatalogView::mount(Some(&catalog), 300);
        assert!(!view.loading);
        assert_eq!(view.results.len(), 3);
    }

    #[test]
    fn typing_commits_after_quiet_window() {
        let catalog = catalog();
        let mut view = CatalogView::mount(Some(&catalog), 300);

        assert_eq!(view.push_char('a', 0), Some(300));
        assert_eq!(view.push_char('h', 50), None);
        assert_eq!(view.input_text, "ah");
        assert!(view.filter.query.is_empty());

        assert_eq!(view.on_timer(Some(&catalog), 300), (false, Some(50)));
        assert_eq!(view.on_timer(Some(&catalog), 350), (true, None));
        assert_eq!(view.filter.query, "ah");
        assert_eq!(view.results.len(), 2);
    }

    #[test]
    fn category_change_refreshes_and_clamps_selection() {
        let catalog = catalog();
        let mut view = CatalogView::mount(Some(&catalog), 300);
        view.selected_index = 2;

        view.select_category("TYT", Some(&catalog));
        assert_eq!(view.results.len(), 1);
        assert_eq!(view.selected_index, 0);
        assert!(!view.filter.picker.visible);

        view.clear_category(Some(&catalog));
        assert_eq!(view.results.len(), 3);
    }

    #[test]
    fn unmount_discards_pending_input() {
        let catalog = catalog();
        let mut view = CatalogView::mount(Some(&catalog), 300);
        view.push_char('z', 0);
        view.unmount();

        assert_eq!(view.on_timer(Some(&catalog), 400), (false, None));
        assert!(view.filter.query.is_empty());
    }

    #[test]
    fn backspace_on_empty_input_is_noop() {
        let mut view = CatalogView::mount(None, 300);
        assert_eq!(view.pop_char(0), None);
        assert!(!view.debouncer.is_pending());
    }

    #[test]
    fn selection_wraps() {
        let catalog = catalog();
        let mut view = CatalogView::mount(Some(&catalog), 300);
        view.move_selection_up();
        assert_eq!(view.selected_product().map(|p| p.id), Some(3));
        view.move_selection_down();
        assert_eq!(view.selected_product().map(|p| p.id), Some(1));
    }
}
