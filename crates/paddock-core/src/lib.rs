//! Resource list controllers and shared services for the paddock admin
//! console.
//!
//! Every list-bearing surface (TUI screen, CLI list command) is built
//! from the same four pieces:
//!
//! - **[`FilterSet`]** — per-key raw/debounced filter values; each key
//!   runs its own 500 ms quiet timer.
//! - **[`ListController`]** — owns the query (page, page size, sort,
//!   applied filters), dispatches fetches through an injected
//!   [`ResourceLister`], and publishes [`ListSnapshot`]s over a watch
//!   channel. Stale responses are discarded by sequence number.
//! - **[`MutationExecutor`]** — create/update/toggle/delete with the
//!   loader and alert bookkeeping; deletes require a [`DeleteTicket`]
//!   minted by affirming a [`ModalIntent::ConfirmDelete`].
//! - **[`LoaderGauge`] / [`AlertQueue`]** — process-wide busy indicator
//!   and toast queue, created once per [`Session`] and injected
//!   everywhere.

pub mod error;
pub mod filter;
pub mod list;
pub mod mutation;
pub mod notify;
pub mod query;
pub mod schema;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use filter::{DEBOUNCE_QUIET, FilterSet};
pub use list::{ListController, ListSnapshot, Phase, ResourceLister};
pub use mutation::{DeleteTicket, ModalIntent, ModalState, MutationExecutor, require_nonempty};
pub use notify::{Alert, AlertKind, AlertQueue, LoaderGauge, LoaderPermit};
pub use query::{ListQuery, SortOrder};
pub use schema::{Column, ColumnWidth};
pub use session::{Session, SessionConfig};
