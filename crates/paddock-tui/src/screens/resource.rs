//! Generic resource list screen.
//!
//! One instance per admin resource. Each screen owns a
//! [`ListController`] for fetching, a [`FilterSet`] for the debounced
//! search field, and a [`ModalState`] gating destructive row actions.
//! Rendering reads the controller's latest snapshot directly, so the
//! screen needs no data-carrying actions of its own.

use std::sync::{Arc, Mutex};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use futures_util::future::BoxFuture;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use paddock_api::MutationAck;
use paddock_core::{
    Column, DeleteTicket, FilterSet, ListController, ListSnapshot, ModalIntent, ModalState,
    MutationExecutor, Phase,
};

use crate::action::Action;
use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;
use crate::widgets::resource_table;

/// Page sizes cycled with `+` / `-`.
const PAGE_SIZES: [u32; 4] = [10, 25, 50, 100];

type ApiResult = Result<MutationAck, paddock_api::Error>;

/// Deletes consume the row; only a [`DeleteTicket`] reaches this.
pub type DeleteFn<T> = Arc<dyn Fn(T) -> BoxFuture<'static, ApiResult> + Send + Sync>;

/// Row mutations that leave the row in place (toggles, status moves).
pub type RowFn<T> = Arc<dyn Fn(&T) -> BoxFuture<'static, ApiResult> + Send + Sync>;

/// A named row action: `verb` labels the key hint and confirmation
/// prompt, `done` is the fallback success alert.
pub struct RowCommand<T> {
    pub verb: &'static str,
    pub done: &'static str,
    pub run: RowFn<T>,
}

impl<T> Clone for RowCommand<T> {
    fn clone(&self) -> Self {
        Self {
            verb: self.verb,
            done: self.done,
            run: Arc::clone(&self.run),
        }
    }
}

/// Everything that differs between two resource screens.
pub struct ResourceConfig<T> {
    pub id: ScreenId,
    pub columns: Vec<Column<T>>,
    /// Sort keys cycled with `o`, wire-format (camelCase).
    pub sort_keys: Vec<&'static str>,
    pub empty_message: &'static str,
    /// Human name of one row, used in prompts and alerts.
    pub label: Arc<dyn Fn(&T) -> String + Send + Sync>,
    /// Label/value pairs for the detail pane.
    pub detail: Arc<dyn Fn(&T) -> Vec<(String, String)> + Send + Sync>,
    pub delete: Option<DeleteFn<T>>,
    pub toggle: Option<RowCommand<T>>,
    /// A non-delete action that still needs confirmation.
    pub confirm: Option<RowCommand<T>>,
}

/// List screen driven by a [`ResourceConfig`].
pub struct ResourceScreen<T> {
    config: ResourceConfig<T>,
    controller: ListController<T>,
    executor: MutationExecutor,
    filters: FilterSet,
    /// Search overlay; `Some` while the input is open.
    search: Option<Input>,
    /// Shared with spawned mutation tasks, which close it on completion.
    modal: Arc<Mutex<ModalState<T>>>,
    table_state: ratatui::widgets::TableState,
    throbber: ThrobberState,
    sort_idx: usize,
    show_detail: bool,
    focused: bool,
}

impl<T> ResourceScreen<T>
where
    T: Clone + Send + Sync + serde::Serialize + 'static,
{
    pub fn new(
        config: ResourceConfig<T>,
        controller: ListController<T>,
        executor: MutationExecutor,
    ) -> Self {
        Self {
            config,
            controller,
            executor,
            filters: FilterSet::new(),
            search: None,
            modal: Arc::new(Mutex::new(ModalState::Closed)),
            table_state: ratatui::widgets::TableState::default(),
            throbber: ThrobberState::default(),
            sort_idx: 0,
            show_detail: false,
            focused: false,
        }
    }

    fn snapshot(&self) -> ListSnapshot<T> {
        self.controller.snapshot()
    }

    fn modal_open(&self) -> bool {
        self.modal.lock().map(|m| m.is_open()).unwrap_or(false)
    }

    // ── Selection ───────────────────────────────────────────────────

    fn selected(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    fn select(&mut self, index: usize, len: usize) {
        if len == 0 {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(index.min(len - 1)));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.snapshot().rows.len();
        if len == 0 {
            return;
        }
        let current = isize::try_from(self.selected()).unwrap_or(0);
        let next = current.saturating_add(delta).clamp(0, isize::try_from(len - 1).unwrap_or(0));
        self.select(usize::try_from(next).unwrap_or(0), len);
    }

    fn selected_row(&self) -> Option<T> {
        let snap = self.snapshot();
        snap.rows.get(self.selected()).cloned()
    }

    // ── Fetch triggers ──────────────────────────────────────────────

    fn spawn_refresh(&self) {
        let controller = self.controller.clone();
        tokio::spawn(async move { controller.refresh().await });
    }

    fn spawn_set_page(&self, page: u32) {
        let controller = self.controller.clone();
        tokio::spawn(async move { controller.set_page(page).await });
    }

    fn change_page(&self, delta: i64) {
        let meta = self.snapshot().meta;
        let current = i64::from(meta.page);
        let target = (current + delta).clamp(1, i64::from(meta.total_pages.max(1)));
        if target != current {
            self.spawn_set_page(u32::try_from(target).unwrap_or(1));
        }
    }

    fn change_page_size(&self, step: isize) {
        let current = self.controller.query().per_page;
        let idx = PAGE_SIZES
            .iter()
            .position(|&s| s == current)
            .unwrap_or(1);
        let next = idx
            .saturating_add_signed(step)
            .min(PAGE_SIZES.len() - 1);
        if PAGE_SIZES[next] != current {
            let controller = self.controller.clone();
            let size = PAGE_SIZES[next];
            tokio::spawn(async move { controller.set_per_page(size).await });
        }
    }

    fn apply_sort(&self) {
        if let Some(key) = self.config.sort_keys.get(self.sort_idx) {
            let controller = self.controller.clone();
            let key = (*key).to_owned();
            tokio::spawn(async move { controller.set_sort(key).await });
        }
    }

    fn cycle_sort_key(&mut self) {
        if self.config.sort_keys.is_empty() {
            return;
        }
        self.sort_idx = (self.sort_idx + 1) % self.config.sort_keys.len();
        self.apply_sort();
    }

    // ── Mutations ───────────────────────────────────────────────────

    fn open_delete_modal(&mut self) {
        if self.config.delete.is_none() {
            return;
        }
        if let Some(row) = self.selected_row() {
            if let Ok(mut modal) = self.modal.lock() {
                modal.open(ModalIntent::ConfirmDelete(row));
            }
        }
    }

    fn open_confirm_modal(&mut self) {
        let Some(command) = &self.config.confirm else {
            return;
        };
        if let Some(row) = self.selected_row() {
            if let Ok(mut modal) = self.modal.lock() {
                modal.open(ModalIntent::ConfirmAction {
                    row,
                    action: command.verb.to_owned(),
                });
            }
        }
    }

    fn affirm_modal(&mut self) {
        let Ok(mut modal) = self.modal.lock() else {
            return;
        };
        if let Some(ticket) = modal.affirm_delete() {
            drop(modal);
            self.spawn_delete(ticket);
            return;
        }
        if let Some(ModalIntent::ConfirmAction { row, .. }) = modal.intent().cloned() {
            if modal.begin_submit() {
                drop(modal);
                self.spawn_confirmed(row);
            }
        }
    }

    fn dismiss_modal(&self) {
        if let Ok(mut modal) = self.modal.lock() {
            // A submitting modal closes itself when the task completes.
            if matches!(*modal, ModalState::Open(_)) {
                modal.close();
            }
        }
    }

    fn spawn_delete(&self, ticket: DeleteTicket<T>) {
        let Some(delete) = self.config.delete.clone() else {
            return;
        };
        let message = format!("{} deleted", (self.config.label)(ticket.row()));
        let executor = self.executor.clone();
        let controller = self.controller.clone();
        let modal = Arc::clone(&self.modal);
        tokio::spawn(async move {
            let ok = executor
                .run_delete(ticket, &message, move |row| delete(row))
                .await;
            if let Ok(mut m) = modal.lock() {
                m.close();
            }
            if ok {
                controller.refetch_after_delete().await;
            }
        });
    }

    fn spawn_confirmed(&self, row: T) {
        let Some(command) = self.config.confirm.clone() else {
            return;
        };
        let fut = (command.run)(&row);
        let executor = self.executor.clone();
        let controller = self.controller.clone();
        let modal = Arc::clone(&self.modal);
        tokio::spawn(async move {
            let ok = executor.run(command.done, fut).await;
            if let Ok(mut m) = modal.lock() {
                m.close();
            }
            if ok {
                controller.refresh().await;
            }
        });
    }

    /// Toggles fire directly from the row, no confirmation.
    fn spawn_toggle(&self) {
        let Some(command) = self.config.toggle.clone() else {
            return;
        };
        let Some(row) = self.selected_row() else {
            return;
        };
        let fut = (command.run)(&row);
        let executor = self.executor.clone();
        let controller = self.controller.clone();
        tokio::spawn(async move {
            if executor.run(command.done, fut).await {
                controller.refresh().await;
            }
        });
    }

    // ── Key handling ────────────────────────────────────────────────

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::CloseSearch),
            _ => {
                if let Some(input) = self.search.as_mut() {
                    input.handle_event(&crossterm::event::Event::Key(key));
                    let value = input.value().to_owned();
                    self.filters.set_raw("search", value);
                }
                None
            }
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => self.affirm_modal(),
            KeyCode::Char('n') | KeyCode::Esc => self.dismiss_modal(),
            _ => {}
        }
        None
    }

    // ── Rendering ───────────────────────────────────────────────────

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let Some(input) = &self.search else { return };
        let block = Block::default()
            .title(" Search ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(input.value()), inner);
        let cursor = u16::try_from(input.visual_cursor()).unwrap_or(0);
        frame.set_cursor_position((inner.x + cursor, inner.y));
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, snap: &ListSnapshot<T>) {
        match snap.phase {
            Phase::Idle | Phase::Loading if snap.rows.is_empty() => {
                resource_table::render_loading(frame, area, &self.throbber);
            }
            Phase::Failed => {
                resource_table::render_failed(
                    frame,
                    area,
                    snap.error.as_deref().unwrap_or("unknown error"),
                );
            }
            _ if snap.rows.is_empty() => {
                resource_table::render_empty(frame, area, self.config.empty_message);
            }
            _ => {
                let table = resource_table::build_table(&self.config.columns, &snap.rows);
                let mut state = self.table_state.clone();
                if state.selected().is_none_or(|s| s >= snap.rows.len()) {
                    state.select(Some(snap.rows.len().saturating_sub(1)));
                }
                frame.render_stateful_widget(table, area, &mut state);
            }
        }
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, row: &T) {
        let block = Block::default()
            .title(format!(" {} ", (self.config.label)(row)))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = (self.config.detail)(row)
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label:>14}  "), theme::key_hint()),
                    Span::styled(value, theme::table_row()),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect, snap: &ListSnapshot<T>) {
        let meta = &snap.meta;
        let mut parts = vec![format!(
            "page {}/{} · {} total · size {}",
            meta.page,
            meta.total_pages.max(1),
            meta.total,
            snap.query.per_page
        )];
        if let Some((key, order)) = &snap.query.sort {
            let arrow = match order {
                paddock_core::SortOrder::Asc => "↑",
                paddock_core::SortOrder::Desc => "↓",
            };
            parts.push(format!("sort {key} {arrow}"));
        }
        if let Some(search) = snap.query.filters.get("search") {
            parts.push(format!("search \"{search}\""));
        }
        if snap.is_loading() {
            parts.push("loading…".into());
        }
        let line = Line::styled(format!(" {}", parts.join("  ·  ")), theme::key_hint());
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let mut hints = String::from(" j/k move  ←/→ page  +/- size  o sort  s dir  / search  ⏎ detail  r refresh");
        if self.config.toggle.is_some() {
            hints.push_str("  t toggle");
        }
        if let Some(command) = &self.config.confirm {
            hints.push_str(&format!("  c {}", command.verb.to_lowercase()));
        }
        if self.config.delete.is_some() {
            hints.push_str("  d delete");
        }
        frame.render_widget(
            Paragraph::new(Line::styled(hints, theme::key_hint())),
            area,
        );
    }

    fn render_modal(&self, frame: &mut Frame, area: Rect) {
        let Ok(modal) = self.modal.lock() else { return };
        let Some(intent) = modal.intent() else { return };

        let (title, message) = match intent {
            ModalIntent::ConfirmDelete(row) => (
                " Confirm delete ",
                format!("Delete {}? This cannot be undone.", (self.config.label)(row)),
            ),
            ModalIntent::ConfirmAction { row, action } => (
                " Confirm ",
                format!("{action}: {}?", (self.config.label)(row)),
            ),
            ModalIntent::Create | ModalIntent::Edit(_) => return,
        };
        let submitting = matches!(*modal, ModalState::Submitting(_));

        let width = 52u16.min(area.width.saturating_sub(4));
        let height = 5;
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let popup = Rect::new(x, y, width, height);

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(ratatui::style::Style::default().fg(theme::ERROR_RED))
            .style(ratatui::style::Style::default().bg(theme::BG_DARK));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let footer = if submitting {
            Line::styled("working…", theme::key_hint())
        } else {
            Line::from(vec![
                Span::styled("y", theme::key_hint_key()),
                Span::styled(" confirm   ", theme::key_hint()),
                Span::styled("n", theme::key_hint_key()),
                Span::styled(" cancel", theme::key_hint()),
            ])
        };
        let lines = vec![
            Line::styled(message, theme::table_row()),
            Line::from(""),
            footer,
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl<T> Component for ResourceScreen<T>
where
    T: Clone + Send + Sync + serde::Serialize + 'static,
{
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        self.spawn_refresh();

        // Settled filter edits flow into the controller for as long as
        // the screen lives.
        let controller = self.controller.clone();
        let filters = self.filters.clone();
        tokio::spawn(async move {
            let mut settled = filters.subscribe();
            while settled.changed().await.is_ok() {
                controller.sync_filters(&filters).await;
            }
        });
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.search.is_some() {
            return Ok(self.handle_search_key(key));
        }
        if self.modal_open() {
            return Ok(self.handle_modal_key(key));
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => self.move_selection(1),
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => self.move_selection(-1),
            (KeyModifiers::NONE, KeyCode::Char('g')) => self.move_selection(isize::MIN + 1),
            (KeyModifiers::SHIFT, KeyCode::Char('G')) => self.move_selection(isize::MAX - 1),
            (KeyModifiers::CONTROL, KeyCode::Char('d')) => self.move_selection(10),
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => self.move_selection(-10),

            (KeyModifiers::NONE, KeyCode::Right | KeyCode::Char('n')) => self.change_page(1),
            (KeyModifiers::NONE, KeyCode::Left | KeyCode::Char('p')) => self.change_page(-1),
            (_, KeyCode::Char('+') | KeyCode::Char('=')) => self.change_page_size(1),
            (KeyModifiers::NONE, KeyCode::Char('-')) => self.change_page_size(-1),

            (KeyModifiers::NONE, KeyCode::Char('o')) => self.cycle_sort_key(),
            (KeyModifiers::NONE, KeyCode::Char('s')) => self.apply_sort(),
            (KeyModifiers::NONE, KeyCode::Char('r')) => self.spawn_refresh(),

            (KeyModifiers::NONE, KeyCode::Enter) => self.show_detail = !self.show_detail,
            (KeyModifiers::NONE, KeyCode::Char('d')) => self.open_delete_modal(),
            (KeyModifiers::NONE, KeyCode::Char('t')) => self.spawn_toggle(),
            (KeyModifiers::NONE, KeyCode::Char('c')) => self.open_confirm_modal(),
            _ => {}
        }
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.move_selection(1),
            MouseEventKind::ScrollUp => self.move_selection(-1),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::OpenSearch => {
                debug!(screen = %self.config.id, "search opened");
                self.search = Some(Input::new(self.filters.raw("search")));
            }
            Action::CloseSearch => {
                self.search = None;
            }
            Action::Tick => {
                if self.snapshot().is_loading() {
                    self.throbber.calc_next();
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let snap = self.snapshot();

        let block = Block::default()
            .title(format!(" {} ", self.config.id))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let search_height = if self.search.is_some() { 3 } else { 0 };
        let detail_row = self.selected_row().filter(|_| self.show_detail);
        let detail_height = if detail_row.is_some() {
            inner.height / 2
        } else {
            0
        };

        let layout = Layout::vertical([
            Constraint::Length(search_height),
            Constraint::Min(1),
            Constraint::Length(detail_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        if self.search.is_some() {
            self.render_search(frame, layout[0]);
        }
        self.render_table(frame, layout[1], &snap);
        if let Some(row) = &detail_row {
            self.render_detail(frame, layout[2], row);
        }
        self.render_status_line(frame, layout[3], &snap);
        self.render_hints(frame, layout[4]);

        self.render_modal(frame, area);
    }

    fn captures_input(&self) -> bool {
        self.search.is_some() || self.modal_open()
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        self.config.id.label()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use serde::Serialize;

    use paddock_api::{ListPage, ListRequest, PageMeta};
    use paddock_core::{AlertQueue, LoaderGauge};

    #[derive(Debug, Clone, Serialize, PartialEq)]
    struct Pen {
        name: String,
    }

    fn pens(names: &[&str]) -> ListPage<Pen> {
        ListPage {
            rows: names
                .iter()
                .map(|n| Pen {
                    name: (*n).to_owned(),
                })
                .collect(),
            meta: PageMeta {
                page: 1,
                limit: 25,
                total: names.len() as u64,
                total_pages: 1,
            },
        }
    }

    fn screen(rows: ListPage<Pen>) -> ResourceScreen<Pen> {
        let gauge = LoaderGauge::new();
        let alerts = AlertQueue::new();
        let lister = move |_req: ListRequest| {
            let rows = rows.clone();
            async move { Ok(rows) }.boxed()
        };
        let controller = ListController::new(Box::new(lister), gauge.clone(), alerts.clone());
        let executor = MutationExecutor::new(gauge, alerts);
        let config = ResourceConfig {
            id: ScreenId::Breeds,
            columns: vec![Column::new("name", "Name")],
            sort_keys: vec!["name"],
            empty_message: "no pens",
            label: Arc::new(|p: &Pen| p.name.clone()),
            detail: Arc::new(|p: &Pen| vec![("Name".to_owned(), p.name.clone())]),
            delete: Some(Arc::new(|_pen| {
                async { Ok(MutationAck::default()) }.boxed()
            })),
            toggle: None,
            confirm: None,
        };
        ResourceScreen::new(config, controller, executor)
    }

    #[tokio::test]
    async fn selection_clamps_to_row_count() {
        let mut screen = screen(pens(&["a", "b", "c"]));
        screen.controller.refresh().await;

        screen.move_selection(10);
        assert_eq!(screen.selected(), 2);
        screen.move_selection(-10);
        assert_eq!(screen.selected(), 0);
    }

    #[tokio::test]
    async fn delete_key_opens_a_confirmation_modal() {
        let mut screen = screen(pens(&["a"]));
        screen.controller.refresh().await;
        screen.move_selection(0);

        assert!(!screen.modal_open());
        screen.open_delete_modal();
        assert!(screen.modal_open());
        assert!(screen.captures_input());

        // Dismissing returns to closed without minting a ticket.
        screen.dismiss_modal();
        assert!(!screen.modal_open());
    }

    #[tokio::test]
    async fn search_keys_feed_the_filter_set() {
        let mut screen = screen(pens(&["a"]));
        screen
            .update(&Action::OpenSearch)
            .unwrap();
        assert!(screen.captures_input());

        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(screen.handle_search_key(key).is_none());
        assert_eq!(screen.filters.raw("search"), "x");

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(screen.handle_search_key(esc), Some(Action::CloseSearch));
    }
}
