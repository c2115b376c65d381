// ── Process-wide notification services ──
//
// One `LoaderGauge` and one `AlertQueue` are created per session and
// handed to every controller and executor. Both are cheap clones over
// shared state and safe for concurrent use.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

// ── Loader gauge ────────────────────────────────────────────────────

/// Reference-counted in-flight operation counter.
///
/// Every network operation holds a [`LoaderPermit`] for its duration;
/// the gauge reads busy while any permit is alive. One operation's
/// completion can never hide another's indicator, and the count never
/// goes negative.
#[derive(Clone)]
pub struct LoaderGauge {
    count: Arc<watch::Sender<usize>>,
}

impl LoaderGauge {
    pub fn new() -> Self {
        let (count, _) = watch::channel(0);
        Self {
            count: Arc::new(count),
        }
    }

    /// Acquire a permit, incrementing the in-flight count until dropped.
    pub fn acquire(&self) -> LoaderPermit {
        self.count.send_modify(|n| *n += 1);
        LoaderPermit {
            count: Arc::clone(&self.count),
        }
    }

    /// Current number of in-flight operations.
    pub fn active(&self) -> usize {
        *self.count.borrow()
    }

    pub fn is_busy(&self) -> bool {
        self.active() > 0
    }

    /// Subscribe to count changes (loading overlays, status bars).
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.count.subscribe()
    }
}

impl Default for LoaderGauge {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII handle for one in-flight operation. Dropping releases exactly once.
pub struct LoaderPermit {
    count: Arc<watch::Sender<usize>>,
}

impl Drop for LoaderPermit {
    fn drop(&mut self) {
        self.count.send_modify(|n| *n = n.saturating_sub(1));
    }
}

// ── Alert queue ─────────────────────────────────────────────────────

/// How long an alert stays visible before timed eviction.
pub const ALERT_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
}

/// One queued alert. `deadline` is when timed eviction removes it.
#[derive(Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub deadline: Instant,
}

/// Append-only alert queue with timed eviction.
///
/// Alerts display in arrival order and disappear [`ALERT_TTL`] after
/// being queued. Any number of tasks may append concurrently.
#[derive(Clone)]
pub struct AlertQueue {
    inner: Arc<Mutex<VecDeque<Alert>>>,
    /// Bumped on every append so subscribers can redraw.
    revision: Arc<watch::Sender<u64>>,
    ttl: Duration,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::with_ttl(ALERT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
            revision: Arc::new(revision),
            ttl,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(AlertKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(AlertKind::Error, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(AlertKind::Warning, message.into());
    }

    fn push(&self, kind: AlertKind, message: String) {
        tracing::debug!(%kind, %message, "alert queued");
        if let Ok(mut queue) = self.inner.lock() {
            queue.push_back(Alert {
                kind,
                message,
                deadline: Instant::now() + self.ttl,
            });
        }
        self.revision.send_modify(|rev| *rev += 1);
    }

    /// Currently visible alerts in arrival order, evicting expired ones.
    pub fn visible(&self) -> Vec<Alert> {
        let now = Instant::now();
        match self.inner.lock() {
            Ok(mut queue) => {
                queue.retain(|a| a.deadline > now);
                queue.iter().cloned().collect()
            }
            Err(_) => Vec::new(),
        }
    }

    /// Subscribe to append notifications.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl Default for AlertQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_releases_on_drop() {
        let gauge = LoaderGauge::new();
        assert!(!gauge.is_busy());

        let a = gauge.acquire();
        let b = gauge.acquire();
        assert_eq!(gauge.active(), 2);

        drop(a);
        assert_eq!(gauge.active(), 1);
        assert!(gauge.is_busy());

        drop(b);
        assert_eq!(gauge.active(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn alerts_evict_after_ttl_in_arrival_order() {
        let alerts = AlertQueue::new();
        alerts.success("saved");
        tokio::time::advance(Duration::from_secs(1)).await;
        alerts.error("broke");

        let visible = alerts.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].kind, AlertKind::Success);
        assert_eq!(visible[1].kind, AlertKind::Error);

        // First alert expires 4s after queueing; second 1s later.
        tokio::time::advance(Duration::from_millis(3500)).await;
        let visible = alerts.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "broke");

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(alerts.visible().is_empty());
    }
}
