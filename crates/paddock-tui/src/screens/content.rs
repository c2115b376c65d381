//! Legal content preview screen.
//!
//! Read-only: slugs on the left, the fetched per-language body on the
//! right. Editing happens through the CLI (`paddock content set`).

use std::sync::{Arc, Mutex};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use tokio::sync::mpsc::UnboundedSender;

use paddock_api::AdminClient;
use paddock_api::types::LegalPage;
use paddock_core::{AlertQueue, LoaderGauge, Session};

use crate::action::Action;
use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;

/// Slugs the platform serves.
const SLUGS: [&str; 3] = ["terms", "privacy", "refund-policy"];
const LANGS: [&str; 2] = ["en", "ar"];

pub struct ContentScreen {
    client: AdminClient,
    gauge: LoaderGauge,
    alerts: AlertQueue,
    selected: usize,
    lang_idx: usize,
    /// Written by the fetch task; keyed so a stale body for another
    /// slug/lang pair is never shown.
    body: Arc<Mutex<Option<LegalPage>>>,
    scroll: u16,
    focused: bool,
}

impl ContentScreen {
    pub fn new(session: &Session) -> Self {
        Self {
            client: session.client().clone(),
            gauge: session.gauge().clone(),
            alerts: session.alerts().clone(),
            selected: 0,
            lang_idx: 0,
            body: Arc::new(Mutex::new(None)),
            scroll: 0,
            focused: false,
        }
    }

    fn lang(&self) -> &'static str {
        LANGS[self.lang_idx % LANGS.len()]
    }

    fn slug(&self) -> &'static str {
        SLUGS[self.selected % SLUGS.len()]
    }

    fn fetch(&mut self) {
        self.scroll = 0;
        let client = self.client.clone();
        let gauge = self.gauge.clone();
        let alerts = self.alerts.clone();
        let body = Arc::clone(&self.body);
        let slug = self.slug().to_owned();
        let lang = self.lang().to_owned();
        tokio::spawn(async move {
            let _permit = gauge.acquire();
            match client.get_legal_page(&slug, &lang).await {
                Ok(page) => {
                    if let Ok(mut slot) = body.lock() {
                        *slot = Some(page);
                    }
                }
                Err(err) => alerts.error(err.to_string()),
            }
        });
    }

    fn current_page(&self) -> Option<LegalPage> {
        self.body
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
            .filter(|page| page.slug == self.slug() && page.lang == self.lang())
    }

    fn render_slug_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Pages ")
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

        let items: Vec<ListItem> = SLUGS
            .iter()
            .enumerate()
            .map(|(i, slug)| {
                let style = if i == self.selected {
                    theme::table_selected()
                } else {
                    theme::table_row()
                };
                ListItem::new(Line::styled(format!(" {slug}"), style))
            })
            .collect();

        let layout =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        frame.render_widget(List::new(items), layout[0]);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" lang ", theme::key_hint()),
                Span::styled(self.lang(), theme::key_hint_key()),
            ])),
            layout[1],
        );
    }

    fn render_preview(&self, frame: &mut Frame, area: Rect) {
        let page = self.current_page();
        let title = match &page {
            Some(p) => format!(" {} ({}) — read-only ", p.slug, p.lang),
            None => " Preview ".to_owned(),
        };
        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match page {
            Some(p) => {
                let updated = p
                    .updated_at
                    .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
                    .unwrap_or_else(|| "-".to_owned());
                let mut lines = vec![
                    Line::styled(format!("updated {updated}"), theme::key_hint()),
                    Line::from(""),
                ];
                lines.extend(p.body.lines().map(|l| Line::styled(l.to_owned(), theme::table_row())));
                frame.render_widget(
                    Paragraph::new(lines)
                        .wrap(Wrap { trim: false })
                        .scroll((self.scroll, 0)),
                    inner,
                );
            }
            None => {
                frame.render_widget(
                    Paragraph::new(Line::styled(
                        "press Enter to load the selected page",
                        theme::key_hint(),
                    ))
                    .centered(),
                    inner,
                );
            }
        }
    }
}

impl Component for ContentScreen {
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('j')) => {
                self.selected = (self.selected + 1) % SLUGS.len();
            }
            (KeyModifiers::NONE, KeyCode::Char('k')) => {
                self.selected = (self.selected + SLUGS.len() - 1) % SLUGS.len();
            }
            (KeyModifiers::NONE, KeyCode::Char('l')) => {
                self.lang_idx = (self.lang_idx + 1) % LANGS.len();
            }
            (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char('r')) => self.fetch(),
            (KeyModifiers::NONE, KeyCode::Down) => {
                self.scroll = self.scroll.saturating_add(1);
            }
            (KeyModifiers::NONE, KeyCode::Up) => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            (KeyModifiers::CONTROL, KeyCode::Char('d')) => {
                self.scroll = self.scroll.saturating_add(10);
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.scroll = self.scroll.saturating_sub(10);
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let layout =
            Layout::horizontal([Constraint::Length(24), Constraint::Min(1)]).split(area);
        self.render_slug_list(frame, layout[0]);
        self.render_preview(frame, layout[1]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        ScreenId::Pages.label()
    }
}
