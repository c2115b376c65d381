// ── Resource list controller ──
//
// One controller per list-bearing screen. Owns the current query
// (page, page size, sort, applied filters), dispatches fetches through
// an injected `ResourceLister`, and publishes snapshots over a watch
// channel. Every fetch carries a sequence number; a response that is
// not the latest issued is discarded, so a slow page-2 response can
// never overwrite the page-3 rows the user has already asked for.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::future::BoxFuture;
use tokio::sync::watch;
use tracing::debug;

use paddock_api::{ListPage, ListRequest, PageMeta};

use crate::filter::FilterSet;
use crate::notify::{AlertQueue, LoaderGauge};
use crate::query::{ListQuery, SortOrder};

// ── Lister seam ─────────────────────────────────────────────────────

/// Fetches one page of a resource. Implemented by closures over an
/// `AdminClient` endpoint; tests inject canned responses.
pub trait ResourceLister<T>: Send + Sync {
    fn fetch(&self, req: ListRequest) -> BoxFuture<'static, Result<ListPage<T>, paddock_api::Error>>;
}

impl<T, F> ResourceLister<T> for F
where
    F: Fn(ListRequest) -> BoxFuture<'static, Result<ListPage<T>, paddock_api::Error>>
        + Send
        + Sync,
{
    fn fetch(&self, req: ListRequest) -> BoxFuture<'static, Result<ListPage<T>, paddock_api::Error>> {
        self(req)
    }
}

// ── Snapshot ────────────────────────────────────────────────────────

/// Screen lifecycle: `Idle` until the first fetch, then `Loading` on
/// every parameter change, settling in `Ready` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Published state of one list screen.
///
/// `query` is the query that produced these rows, so its `filters` are
/// the applied filters as of the most recent completed fetch.
#[derive(Debug)]
pub struct ListSnapshot<T> {
    pub phase: Phase,
    pub rows: Arc<Vec<T>>,
    pub meta: PageMeta,
    pub query: ListQuery,
    /// Message of the failure that produced a `Failed` phase.
    pub error: Option<String>,
}

impl<T> Clone for ListSnapshot<T> {
    fn clone(&self) -> Self {
        Self {
            phase: self.phase,
            rows: Arc::clone(&self.rows),
            meta: self.meta.clone(),
            query: self.query.clone(),
            error: self.error.clone(),
        }
    }
}

impl<T> ListSnapshot<T> {
    fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            rows: Arc::new(Vec::new()),
            meta: PageMeta::empty(),
            query: ListQuery::default(),
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}

// ── Controller ──────────────────────────────────────────────────────

struct ControllerInner<T> {
    lister: Box<dyn ResourceLister<T>>,
    gauge: LoaderGauge,
    alerts: AlertQueue,
    state: watch::Sender<ListSnapshot<T>>,
    query: std::sync::Mutex<ListQuery>,
    /// Latest issued fetch sequence; stale responses are discarded.
    seq: AtomicU64,
}

/// Paginated fetch coordinator for one resource endpoint.
pub struct ListController<T> {
    inner: Arc<ControllerInner<T>>,
}

impl<T> Clone for ListController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Send + Sync + 'static> ListController<T> {
    pub fn new(lister: Box<dyn ResourceLister<T>>, gauge: LoaderGauge, alerts: AlertQueue) -> Self {
        let (state, _) = watch::channel(ListSnapshot::idle());
        Self {
            inner: Arc::new(ControllerInner {
                lister,
                gauge,
                alerts,
                state,
                query: std::sync::Mutex::new(ListQuery::default()),
                seq: AtomicU64::new(0),
            }),
        }
    }

    // ── Observation ─────────────────────────────────────────────────

    pub fn subscribe(&self) -> watch::Receiver<ListSnapshot<T>> {
        self.inner.state.subscribe()
    }

    pub fn snapshot(&self) -> ListSnapshot<T> {
        self.inner.state.borrow().clone()
    }

    /// The query the next fetch would use.
    pub fn query(&self) -> ListQuery {
        self.inner
            .query
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }

    // ── Parameter changes (each triggers a fetch) ───────────────────

    /// Jump to `page`. Does not reset anything else.
    pub async fn set_page(&self, page: u32) {
        self.edit_query(|q| q.page = page.max(1));
        self.refresh().await;
    }

    /// Change the page size; resets to page 1.
    pub async fn set_per_page(&self, per_page: u32) {
        self.edit_query(|q| {
            q.per_page = per_page.max(1);
            q.page = 1;
        });
        self.refresh().await;
    }

    /// Change the sort; resets to page 1. Sorting on the current key
    /// again flips the direction.
    pub async fn set_sort(&self, key: impl Into<String>) {
        let key = key.into();
        self.edit_query(|q| {
            let order = match &q.sort {
                Some((current, order)) if *current == key => order.toggled(),
                _ => SortOrder::Asc,
            };
            q.sort = Some((key, order));
            q.page = 1;
        });
        self.refresh().await;
    }

    /// Replace the applied filters; resets to page 1 when they differ.
    /// No-op (no fetch) when they are identical.
    pub async fn apply_filters(&self, filters: BTreeMap<String, String>) {
        let changed = self
            .inner
            .query
            .lock()
            .map(|mut q| {
                if q.filters == filters {
                    false
                } else {
                    q.filters = filters;
                    q.page = 1;
                    true
                }
            })
            .unwrap_or(false);
        if changed {
            self.refresh().await;
        }
    }

    /// Pull the settled values out of a [`FilterSet`] and apply them.
    pub async fn sync_filters(&self, filters: &FilterSet) {
        self.apply_filters(filters.debounced_values()).await;
    }

    /// Re-fetch after a row was deleted. Deleting the sole row of page
    /// N > 1 lands on page N − 1 instead of an empty page.
    pub async fn refetch_after_delete(&self) {
        let back_one = {
            let snap = self.inner.state.borrow();
            if snap.rows.len() == 1 && snap.meta.page > 1 {
                Some(snap.meta.page - 1)
            } else {
                None
            }
        };
        if let Some(page) = back_one {
            self.edit_query(|q| q.page = page);
        }
        self.refresh().await;
    }

    // ── Fetch ───────────────────────────────────────────────────────

    /// Run one fetch with the current query.
    ///
    /// Holds a loader permit for the duration; the permit is released
    /// by drop on every path, including a discarded stale response.
    pub async fn refresh(&self) {
        let query = self.query();
        let issue = self.inner.seq.fetch_add(1, Ordering::SeqCst) + 1;

        self.inner.state.send_modify(|snap| {
            snap.phase = Phase::Loading;
            snap.error = None;
        });

        let _permit = self.inner.gauge.acquire();
        let result = self.inner.lister.fetch(query.to_request()).await;

        if issue != self.inner.seq.load(Ordering::SeqCst) {
            debug!(issue, "discarding stale list response");
            return;
        }

        match result {
            Ok(ListPage { rows, meta }) => {
                // Server-echoed pagination is authoritative.
                let page = meta.page.clamp(1, meta.total_pages.max(1));
                self.edit_query(|q| q.page = page);
                let mut applied = query;
                applied.page = page;
                let _ = self.inner.state.send(ListSnapshot {
                    phase: Phase::Ready,
                    rows: Arc::new(rows),
                    meta: PageMeta { page, ..meta },
                    query: applied,
                    error: None,
                });
            }
            Err(err) => {
                debug!(error = %err, "list fetch failed");
                self.inner.alerts.error(err.to_string());
                self.edit_query(|q| q.page = 1);
                let mut applied = query;
                applied.page = 1;
                let _ = self.inner.state.send(ListSnapshot {
                    phase: Phase::Failed,
                    rows: Arc::new(Vec::new()),
                    meta: PageMeta::empty(),
                    query: applied,
                    error: Some(err.to_string()),
                });
            }
        }
    }

    fn edit_query(&self, edit: impl FnOnce(&mut ListQuery)) {
        if let Ok(mut q) = self.inner.query.lock() {
            edit(&mut q);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use futures_util::FutureExt;

    type Recorded = Arc<Mutex<Vec<ListRequest>>>;

    fn page_of(rows: Vec<&str>, page: u32, total_pages: u32) -> ListPage<String> {
        let total = u64::from(total_pages) * 25;
        ListPage {
            rows: rows.into_iter().map(String::from).collect(),
            meta: PageMeta {
                page,
                limit: 25,
                total,
                total_pages,
            },
        }
    }

    /// Controller whose lister records every request and answers from a
    /// canned queue (last response repeats).
    fn canned(
        responses: Vec<Result<ListPage<String>, paddock_api::Error>>,
    ) -> (ListController<String>, Recorded, LoaderGauge, AlertQueue) {
        let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
        let queue = Arc::new(Mutex::new(responses));
        let gauge = LoaderGauge::new();
        let alerts = AlertQueue::new();

        let rec = Arc::clone(&recorded);
        let lister = move |req: ListRequest| {
            rec.lock().unwrap().push(req);
            let response = {
                let mut q = queue.lock().unwrap();
                if q.len() > 1 {
                    q.remove(0)
                } else {
                    q.first()
                        .map(|r| match r {
                            Ok(p) => Ok(p.clone()),
                            Err(_) => Err(paddock_api::Error::SessionExpired),
                        })
                        .unwrap_or(Err(paddock_api::Error::SessionExpired))
                }
            };
            async move { response }.boxed()
        };

        let controller = ListController::new(Box::new(lister), gauge.clone(), alerts.clone());
        (controller, recorded, gauge, alerts)
    }

    #[tokio::test]
    async fn success_replaces_rows_and_trusts_server_pagination() {
        let (controller, _, _, _) = canned(vec![Ok(page_of(vec!["a", "b"], 2, 4))]);

        controller.set_page(9).await;

        let snap = controller.snapshot();
        assert_eq!(snap.phase, Phase::Ready);
        assert_eq!(snap.rows.len(), 2);
        // Server said it served page 2; the controller follows.
        assert_eq!(snap.meta.page, 2);
        assert_eq!(controller.query().page, 2);
    }

    #[tokio::test]
    async fn failure_clears_rows_queues_alert_and_releases_loader() {
        let (controller, _, gauge, alerts) = canned(vec![Err(paddock_api::Error::SessionExpired)]);

        controller.refresh().await;

        let snap = controller.snapshot();
        assert_eq!(snap.phase, Phase::Failed);
        assert!(snap.rows.is_empty());
        assert_eq!(snap.meta.page, 1);
        assert_eq!(snap.meta.total_pages, 1);
        assert_eq!(gauge.active(), 0);

        let visible = alerts.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind, crate::notify::AlertKind::Error);
    }

    #[tokio::test]
    async fn filter_change_resets_page_and_sends_settled_value() {
        let (controller, recorded, _, _) = canned(vec![Ok(page_of(vec!["x"], 1, 1))]);

        controller.set_page(3).await;
        controller
            .apply_filters(BTreeMap::from([("search".into(), "golden".into())]))
            .await;

        let reqs = recorded.lock().unwrap();
        let last = reqs.last().unwrap();
        assert_eq!(last.page, 1);
        assert!(
            last.params()
                .contains(&("search".into(), "golden".into()))
        );
    }

    #[tokio::test]
    async fn identical_filters_do_not_refetch() {
        let (controller, recorded, _, _) = canned(vec![Ok(page_of(vec!["x"], 1, 1))]);
        let filters = BTreeMap::from([("search".into(), "golden".into())]);

        controller.apply_filters(filters.clone()).await;
        controller.apply_filters(filters).await;

        assert_eq!(recorded.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn debounced_filter_drives_one_fetch_with_page_reset() {
        tokio::time::pause();
        let (controller, recorded, _, _) = canned(vec![Ok(page_of(vec!["x"], 1, 1))]);
        let filters = FilterSet::new();

        filters.set_raw("search", "gol");
        tokio::time::advance(std::time::Duration::from_millis(200)).await;
        filters.set_raw("search", "golden");
        tokio::time::advance(std::time::Duration::from_millis(501)).await;

        controller.sync_filters(&filters).await;

        let reqs = recorded.lock().unwrap();
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].page, 1);
        assert!(
            reqs[0]
                .params()
                .contains(&("search".into(), "golden".into()))
        );
    }

    #[tokio::test]
    async fn sort_toggles_direction_on_same_key() {
        let (controller, recorded, _, _) = canned(vec![Ok(page_of(vec!["x"], 1, 1))]);

        controller.set_sort("name").await;
        controller.set_sort("name").await;

        let reqs = recorded.lock().unwrap();
        assert!(reqs[0].params().contains(&("sortOrder".into(), "asc".into())));
        assert!(reqs[1].params().contains(&("sortOrder".into(), "desc".into())));
    }

    #[tokio::test]
    async fn deleting_sole_row_on_page_two_refetches_page_one() {
        let (controller, recorded, _, _) = canned(vec![
            Ok(page_of(vec!["only"], 2, 2)),
            Ok(page_of(vec!["a"], 1, 1)),
        ]);

        controller.set_page(2).await;
        assert_eq!(controller.snapshot().meta.page, 2);

        // The sole row on page 2 was deleted elsewhere.
        controller.refetch_after_delete().await;

        let reqs = recorded.lock().unwrap();
        assert_eq!(reqs.last().unwrap().page, 1);
    }

    #[tokio::test]
    async fn stale_responses_are_discarded() {
        // A lister that parks the first request until released, then a
        // second fast request overtakes it.
        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();
        let release_rx = Arc::new(Mutex::new(Some(release_rx)));
        let calls = Arc::new(Mutex::new(0_u32));

        let calls_in = Arc::clone(&calls);
        let lister = move |_req: ListRequest| {
            let call = {
                let mut c = calls_in.lock().unwrap();
                *c += 1;
                *c
            };
            let release_rx = Arc::clone(&release_rx);
            async move {
                if call == 1 {
                    let rx = release_rx.lock().unwrap().take().unwrap();
                    let _ = rx.await;
                    Ok(page_of(vec!["slow", "stale"], 1, 9))
                } else {
                    Ok(page_of(vec!["fresh"], 2, 9))
                }
            }
            .boxed()
        };

        let controller =
            ListController::new(Box::new(lister), LoaderGauge::new(), AlertQueue::new());

        let slow = {
            let c = controller.clone();
            tokio::spawn(async move { c.refresh().await })
        };
        // Let the slow fetch dispatch before issuing the next one.
        tokio::task::yield_now().await;

        controller.set_page(2).await;
        assert_eq!(controller.snapshot().rows.as_slice(), ["fresh"]);

        // Release the slow response; it must be discarded, not applied.
        let _ = release_tx.send(());
        slow.await.unwrap();

        let snap = controller.snapshot();
        assert_eq!(snap.rows.as_slice(), ["fresh"]);
        assert_eq!(snap.meta.page, 2);
        assert_eq!(snap.phase, Phase::Ready);
    }
}
