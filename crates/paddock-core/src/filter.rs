// ── Filter state manager ──
//
// Three layers per filter key:
//   raw       — what the user has typed, updated on every keystroke
//   debounced — raw after an uninterrupted quiet period (default 500 ms)
//   applied   — snapshot held by the list controller at fetch time
//
// Each key runs its own quiet timer; a new keystroke restarts only that
// key's timer. Settled changes bump a revision watch channel that
// consumers use to sync the controller.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tracing::trace;

/// Default quiet period before a raw edit settles.
pub const DEBOUNCE_QUIET: Duration = Duration::from_millis(500);

#[derive(Default)]
struct FilterState {
    raw: HashMap<String, String>,
    debounced: HashMap<String, String>,
    /// Per-key edit counter; a sleeping timer task only settles its key
    /// if no newer edit superseded it.
    generation: HashMap<String, u64>,
}

struct FilterInner {
    state: Mutex<FilterState>,
    settled: watch::Sender<u64>,
    quiet: Duration,
}

/// Debounced filter values for one screen.
///
/// Cheaply cloneable; timer tasks hold a clone of the shared state.
#[derive(Clone)]
pub struct FilterSet {
    inner: Arc<FilterInner>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::with_quiet(DEBOUNCE_QUIET)
    }

    pub fn with_quiet(quiet: Duration) -> Self {
        let (settled, _) = watch::channel(0);
        Self {
            inner: Arc::new(FilterInner {
                state: Mutex::new(FilterState::default()),
                settled,
                quiet,
            }),
        }
    }

    /// Record a keystroke for `key` and restart its quiet timer.
    ///
    /// Clearing a field to empty is a value change like any other and
    /// settles through the same timer.
    pub fn set_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        let generation = {
            let Ok(mut state) = self.inner.state.lock() else {
                return;
            };
            state.raw.insert(key.clone(), value);
            let generation = state.generation.entry(key.clone()).or_insert(0);
            *generation += 1;
            *generation
        };

        // Deadline is anchored to the keystroke, not to when the timer
        // task first gets polled.
        let deadline = tokio::time::Instant::now() + self.inner.quiet;
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let changed = {
                let Ok(mut state) = inner.state.lock() else {
                    return;
                };
                // A newer edit restarted the timer; let its task settle.
                if state.generation.get(&key).copied() != Some(generation) {
                    return;
                }
                let settled = state.raw.get(&key).cloned().unwrap_or_default();
                if state.debounced.get(&key) == Some(&settled) {
                    false
                } else {
                    trace!(%key, %settled, "filter settled");
                    state.debounced.insert(key, settled);
                    true
                }
            };
            if changed {
                inner.settled.send_modify(|rev| *rev += 1);
            }
        });
    }

    /// Set a filter without debouncing (dropdowns, toggles).
    ///
    /// Bumps the key's generation so any pending timer for it is voided.
    pub fn set_now(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        {
            let Ok(mut state) = self.inner.state.lock() else {
                return;
            };
            *state.generation.entry(key.clone()).or_insert(0) += 1;
            state.raw.insert(key.clone(), value.clone());
            state.debounced.insert(key, value);
        }
        self.inner.settled.send_modify(|rev| *rev += 1);
    }

    /// The raw (possibly not yet settled) value for `key`.
    pub fn raw(&self, key: &str) -> String {
        self.inner
            .state
            .lock()
            .ok()
            .and_then(|s| s.raw.get(key).cloned())
            .unwrap_or_default()
    }

    /// The settled value for `key`, if any edit has settled.
    pub fn debounced(&self, key: &str) -> Option<String> {
        self.inner
            .state
            .lock()
            .ok()
            .and_then(|s| s.debounced.get(key).cloned())
    }

    /// All settled values, empty strings dropped.
    ///
    /// This is what gets handed to
    /// [`ListController::apply_filters`](crate::list::ListController::apply_filters);
    /// an emptied field reads the same as one never touched.
    pub fn debounced_values(&self) -> BTreeMap<String, String> {
        self.inner
            .state
            .lock()
            .map(|s| {
                s.debounced
                    .iter()
                    .filter(|(_, v)| !v.trim().is_empty())
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Subscribe to settled-change notifications.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.settled.subscribe()
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn settles_only_after_quiet_period() {
        let filters = FilterSet::new();
        filters.set_raw("search", "gol");
        tokio::time::advance(Duration::from_millis(499)).await;
        assert_eq!(filters.debounced("search"), None);

        tokio::time::advance(Duration::from_millis(2)).await;
        assert_eq!(filters.debounced("search").as_deref(), Some("gol"));
    }

    #[tokio::test(start_paused = true)]
    async fn keystroke_restarts_the_timer() {
        let filters = FilterSet::new();
        filters.set_raw("search", "gol");
        tokio::time::advance(Duration::from_millis(400)).await;
        filters.set_raw("search", "golden");
        tokio::time::advance(Duration::from_millis(400)).await;

        // 800 ms since the first keystroke but only 400 since the last.
        assert_eq!(filters.debounced("search"), None);

        tokio::time::advance(Duration::from_millis(101)).await;
        assert_eq!(filters.debounced("search").as_deref(), Some("golden"));
    }

    #[tokio::test(start_paused = true)]
    async fn keys_debounce_independently() {
        let filters = FilterSet::new();
        filters.set_raw("search", "dolly");
        tokio::time::advance(Duration::from_millis(300)).await;
        filters.set_raw("status", "active");
        tokio::time::advance(Duration::from_millis(250)).await;

        // `search` has been quiet 550 ms, `status` only 250 ms.
        assert_eq!(filters.debounced("search").as_deref(), Some("dolly"));
        assert_eq!(filters.debounced("status"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_to_empty_settles_and_is_dropped_from_values() {
        let filters = FilterSet::new();
        filters.set_raw("search", "dolly");
        tokio::time::advance(Duration::from_millis(600)).await;
        assert_eq!(filters.debounced_values().len(), 1);

        filters.set_raw("search", "");
        tokio::time::advance(Duration::from_millis(600)).await;
        assert_eq!(filters.debounced("search").as_deref(), Some(""));
        assert!(filters.debounced_values().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn settled_revision_notifies_subscribers() {
        let filters = FilterSet::new();
        let mut rx = filters.subscribe();
        filters.set_raw("search", "x");
        tokio::time::advance(Duration::from_millis(600)).await;
        assert!(rx.has_changed().unwrap_or(false));
    }

    #[tokio::test(start_paused = true)]
    async fn set_now_bypasses_the_timer_and_voids_pending_edits() {
        let filters = FilterSet::new();
        filters.set_raw("status", "act");
        filters.set_now("status", "inactive");
        assert_eq!(filters.debounced("status").as_deref(), Some("inactive"));

        // The pending timer from set_raw must not overwrite the pick.
        tokio::time::advance(Duration::from_millis(600)).await;
        assert_eq!(filters.debounced("status").as_deref(), Some("inactive"));
    }
}
