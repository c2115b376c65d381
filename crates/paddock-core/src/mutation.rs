// ── Mutation executor and modal state ──
//
// Mutations follow one sequence: acquire loader → request → alert on
// either outcome → release loader. Deletes are gated by a
// `DeleteTicket`, which can only be minted by affirming an open
// `ConfirmDelete` modal — there is no code path that deletes without
// a confirmed intent.

use futures_util::future::BoxFuture;
use tracing::debug;

use paddock_api::MutationAck;

use crate::error::CoreError;
use crate::notify::{AlertQueue, LoaderGauge};

// ── Modal state machine ─────────────────────────────────────────────

/// What an open modal is for. Exactly one intent is active per screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalIntent<T> {
    /// Blank form for a new record.
    Create,
    /// Form pre-filled from an existing row.
    Edit(T),
    /// Ask before destroying a row.
    ConfirmDelete(T),
    /// Ask before a named non-delete action (e.g. "cancel order").
    ConfirmAction { row: T, action: String },
}

/// Per-screen modal lifecycle: `Closed`, `Open` awaiting user input, or
/// `Submitting` while the request is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState<T> {
    #[default]
    Closed,
    Open(ModalIntent<T>),
    Submitting(ModalIntent<T>),
}

impl<T: Clone> ModalState<T> {
    pub fn open(&mut self, intent: ModalIntent<T>) {
        *self = Self::Open(intent);
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn intent(&self) -> Option<&ModalIntent<T>> {
        match self {
            Self::Closed => None,
            Self::Open(intent) | Self::Submitting(intent) => Some(intent),
        }
    }

    /// Move an `Open` modal into `Submitting`. Returns `false` when the
    /// modal was not open (already submitting, or closed).
    pub fn begin_submit(&mut self) -> bool {
        match self {
            Self::Open(intent) => {
                *self = Self::Submitting(intent.clone());
                true
            }
            _ => false,
        }
    }

    /// Affirm an open delete confirmation, yielding the only proof the
    /// executor accepts for a delete. The modal moves to `Submitting`.
    pub fn affirm_delete(&mut self) -> Option<DeleteTicket<T>> {
        match self {
            Self::Open(ModalIntent::ConfirmDelete(row)) => {
                let row = row.clone();
                *self = Self::Submitting(ModalIntent::ConfirmDelete(row.clone()));
                Some(DeleteTicket { row })
            }
            _ => None,
        }
    }
}

/// Proof that a delete was explicitly confirmed. Only
/// [`ModalState::affirm_delete`] can mint one.
#[derive(Debug)]
pub struct DeleteTicket<T> {
    row: T,
}

impl<T> DeleteTicket<T> {
    pub fn row(&self) -> &T {
        &self.row
    }

    pub fn into_row(self) -> T {
        self.row
    }
}

// ── Validation ──────────────────────────────────────────────────────

/// Reject an empty or whitespace-only required field.
pub fn require_nonempty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::validation(field, "must not be empty"))
    } else {
        Ok(())
    }
}

// ── Executor ────────────────────────────────────────────────────────

/// Runs mutations with the loader/alert bookkeeping every screen needs.
///
/// The caller closes its modal and triggers a re-fetch on success;
/// [`run`](Self::run) reports which branch was taken.
#[derive(Clone)]
pub struct MutationExecutor {
    gauge: LoaderGauge,
    alerts: AlertQueue,
}

impl MutationExecutor {
    pub fn new(gauge: LoaderGauge, alerts: AlertQueue) -> Self {
        Self { gauge, alerts }
    }

    /// Execute one mutation. Queues a success alert (the server message
    /// when present, otherwise `success_message`) or an error alert.
    /// Returns `true` on success. The loader permit is released by drop
    /// on both branches.
    pub async fn run(
        &self,
        success_message: &str,
        fut: BoxFuture<'_, Result<MutationAck, paddock_api::Error>>,
    ) -> bool {
        let _permit = self.gauge.acquire();
        match fut.await {
            Ok(ack) => {
                let message = ack
                    .message
                    .unwrap_or_else(|| success_message.to_owned());
                self.alerts.success(message);
                true
            }
            Err(err) => {
                debug!(error = %err, "mutation failed");
                self.alerts.error(err.to_string());
                false
            }
        }
    }

    /// Execute a delete. The ticket is consumed either way; obtaining
    /// one requires an affirmed [`ModalIntent::ConfirmDelete`].
    pub async fn run_delete<T, F>(
        &self,
        ticket: DeleteTicket<T>,
        success_message: &str,
        delete: F,
    ) -> bool
    where
        F: FnOnce(T) -> BoxFuture<'static, Result<MutationAck, paddock_api::Error>>,
    {
        self.run(success_message, delete(ticket.into_row())).await
    }

    /// Surface a client-side validation failure. No request is made.
    pub fn reject(&self, err: &CoreError) {
        self.alerts.warning(err.to_string());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    use crate::notify::AlertKind;

    fn executor() -> (MutationExecutor, LoaderGauge, AlertQueue) {
        let gauge = LoaderGauge::new();
        let alerts = AlertQueue::new();
        (
            MutationExecutor::new(gauge.clone(), alerts.clone()),
            gauge,
            alerts,
        )
    }

    #[tokio::test]
    async fn success_queues_alert_and_releases_loader() {
        let (executor, gauge, alerts) = executor();

        let ok = executor
            .run("Breed created", async { Ok(MutationAck::default()) }.boxed())
            .await;

        assert!(ok);
        assert_eq!(gauge.active(), 0);
        let visible = alerts.visible();
        assert_eq!(visible[0].kind, AlertKind::Success);
        assert_eq!(visible[0].message, "Breed created");
    }

    #[tokio::test]
    async fn server_message_wins_over_fallback() {
        let (executor, _, alerts) = executor();

        executor
            .run(
                "fallback",
                async {
                    Ok(MutationAck {
                        message: Some("8 animals imported".into()),
                        summary: None,
                    })
                }
                .boxed(),
            )
            .await;

        assert_eq!(alerts.visible()[0].message, "8 animals imported");
    }

    #[tokio::test]
    async fn failure_queues_error_and_releases_loader() {
        let (executor, gauge, alerts) = executor();

        let ok = executor
            .run(
                "unused",
                async { Err(paddock_api::Error::SessionExpired) }.boxed(),
            )
            .await;

        assert!(!ok);
        assert_eq!(gauge.active(), 0);
        assert_eq!(alerts.visible()[0].kind, AlertKind::Error);
    }

    #[test]
    fn delete_ticket_requires_an_open_confirmation() {
        let mut modal: ModalState<&str> = ModalState::Closed;
        assert!(modal.affirm_delete().is_none());

        modal.open(ModalIntent::Edit("row"));
        assert!(modal.affirm_delete().is_none());

        modal.open(ModalIntent::ConfirmDelete("row"));
        let ticket = modal.affirm_delete().unwrap();
        assert_eq!(*ticket.row(), "row");
        assert!(matches!(
            modal,
            ModalState::Submitting(ModalIntent::ConfirmDelete("row"))
        ));

        // A second affirm on the now-submitting modal mints nothing.
        assert!(modal.affirm_delete().is_none());
    }

    #[test]
    fn begin_submit_only_from_open() {
        let mut modal: ModalState<&str> = ModalState::Open(ModalIntent::Create);
        assert!(modal.begin_submit());
        assert!(!modal.begin_submit());
    }

    #[test]
    fn empty_required_field_is_rejected() {
        assert!(require_nonempty("name_en", "  ").is_err());
        assert!(require_nonempty("name_en", "Barki").is_ok());
    }
}
