//! Search input debouncer.
//!
//! Coalesces bursts of search input into a single committed query. The
//! debouncer owns exactly one timer slot: the plugin runtime is asked for a
//! timer only when the slot is empty, and when that timer fires the debouncer
//! either commits, re-arms for the remaining quiet time, or does nothing.
//!
//! Time is passed in explicitly as milliseconds, so the debouncer has no clock
//! of its own and is fully deterministic under test.
//!
//! # Example
//!
//! ```rust
//! use storefront::app::debounce::{Debouncer, Flush};
//!
//! let mut debouncer = Debouncer::new(300);
//! assert_eq!(debouncer.submit("a".into(), 0), Some(300));
//! assert_eq!(debouncer.submit("ab".into(), 100), None);
//!
//! assert_eq!(debouncer.on_timer(300), Flush::Rearm { delay_ms: 100 });
//! assert_eq!(debouncer.on_timer(400), Flush::Commit("ab".into()));
//! ```

/// Default quiet window before a query is committed.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Outcome of a timer firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flush {
    /// The quiet window elapsed; commit this value.
    Commit(String),
    /// A newer value moved the deadline. The slot has been re-armed and the
    /// runtime must schedule a timer after `delay_ms`.
    Rearm {
        /// Remaining quiet time in milliseconds.
        delay_ms: u64,
    },
    /// Nothing pending (cancelled or already committed).
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    value: String,
    deadline_ms: u64,
}

/// Trailing-edge debouncer with a single timer slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    window_ms: u64,
    pending: Option<Pending>,
    /// Time at which the armed timer fires, if one is armed.
    armed_until: Option<u64>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet window.
    #[must_use]
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
            armed_until: None,
        }
    }

    /// Records a new raw value, superseding any pending one.
    ///
    /// Returns `Some(delay_ms)` when the caller must schedule a timer, `None`
    /// when an already-armed timer will cover this value.
    pub fn submit(&mut self, value: String, now_ms: u64) -> Option<u64> {
        let deadline_ms = now_ms.saturating_add(self.window_ms);

        if let Some(previous) = &self.pending {
            tracing::trace!(dropped = %previous.value, "superseding pending query");
        }
        self.pending = Some(Pending { value, deadline_ms });

        if self.armed_until.is_some() {
            return None;
        }

        self.armed_until = Some(deadline_ms);
        Some(self.window_ms)
    }

    /// Handles the armed timer firing at `now_ms`.
    pub fn on_timer(&mut self, now_ms: u64) -> Flush {
        self.armed_until = None;

        let Some(pending) = self.pending.take() else {
            return Flush::Idle;
        };

        if now_ms >= pending.deadline_ms {
            tracing::debug!(query = %pending.value, "debounced query committed");
            return Flush::Commit(pending.value);
        }

        let delay_ms = pending.deadline_ms - now_ms;
        self.armed_until = Some(pending.deadline_ms);
        self.pending = Some(pending);
        Flush::Rearm { delay_ms }
    }

    /// Drops any pending value and releases the timer slot.
    ///
    /// A timer that was already scheduled still fires, but finds nothing to
    /// commit.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("pending query discarded");
        }
        self.armed_until = None;
    }

    /// Whether a value is waiting to be committed.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_commits_only_last_value_once() {
        let mut debouncer = Debouncer::new(300);
        let mut commits = Vec::new();

        assert_eq!(debouncer.submit("a".into(), 0), Some(300));
        assert_eq!(debouncer.submit("ab".into(), 50), None);
        assert_eq!(debouncer.submit("abc".into(), 100), None);

        for now in [300, 400, 500, 800] {
            if let Flush::Commit(value) = debouncer.on_timer(now) {
                commits.push((now, value));
            }
        }

        assert_eq!(commits, vec![(400, "abc".to_string())]);
    }

    #[test]
    fn early_timer_rearms_for_remaining_time() {
        let mut debouncer = Debouncer::new(300);
        debouncer.submit("a".into(), 0);
        debouncer.submit("ab".into(), 250);

        assert_eq!(debouncer.on_timer(300), Flush::Rearm { delay_ms: 250 });
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.submit("abc".into(), 320), None);
        assert_eq!(debouncer.on_timer(550), Flush::Rearm { delay_ms: 70 });
        assert_eq!(debouncer.on_timer(620), Flush::Commit("abc".into()));
    }

    #[test]
    fn cancel_discards_pending_value() {
        let mut debouncer = Debouncer::new(300);
        debouncer.submit("abc".into(), 0);
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.on_timer(300), Flush::Idle);
    }

    #[test]
    fn slot_is_free_after_commit() {
        let mut debouncer = Debouncer::new(100);
        debouncer.submit("a".into(), 0);
        assert_eq!(debouncer.on_timer(100), Flush::Commit("a".into()));
        assert_eq!(debouncer.submit("b".into(), 150), Some(100));
    }
}
