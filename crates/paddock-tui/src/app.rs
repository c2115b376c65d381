//! Application core — event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use futures::StreamExt;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use paddock_core::{AlertQueue, LoaderGauge, Session};

use crate::action::Action;
use crate::component::Component;
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;

/// Busy-indicator frames cycled on every tick.
const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Top-level application state and event loop.
pub struct App {
    /// Current active screen.
    active_screen: ScreenId,
    /// Previous screen for GoBack.
    previous_screen: Option<ScreenId>,
    /// All screen components, keyed by ScreenId.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Help overlay visibility.
    help_visible: bool,
    /// Profile name shown in the status bar.
    profile: String,
    /// Shared busy indicator; reads >0 while any fetch or mutation runs.
    gauge: LoaderGauge,
    /// Shared toast queue.
    alerts: AlertQueue,
    /// Spinner animation frame, advanced on Tick.
    spinner_frame: usize,
    /// Action sender — components can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Create the app with one screen per admin resource.
    pub fn new(session: &Session, profile: String) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let screens: HashMap<ScreenId, Box<dyn Component>> =
            create_screens(session).into_iter().collect();

        Self {
            active_screen: ScreenId::Animals,
            previous_screen: None,
            screens,
            running: true,
            help_visible: false,
            profile,
            gauge: session.gauge().clone(),
            alerts: session.alerts().clone(),
            spinner_frame: 0,
            action_tx,
            action_rx,
        }
    }

    /// Initialize all screen components with the action sender.
    fn init_screens(&mut self) -> Result<()> {
        for screen in self.screens.values_mut() {
            screen.init(self.action_tx.clone())?;
        }
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
        Ok(())
    }

    /// Run the main event loop.
    ///
    /// Multiplexes terminal input with two timers: a 4 Hz tick for
    /// animation state and a ~30 FPS render pulse. Skipped intervals are
    /// dropped rather than bursted when a slow frame falls behind.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.init_screens()?;

        let mut terminal_events = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));
        let mut render = tokio::time::interval(Duration::from_millis(33));
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        render.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("event loop started");

        while self.running {
            tokio::select! {
                _ = tick.tick() => {
                    self.action_tx.send(Action::Tick)?;
                }

                _ = render.tick() => {
                    self.action_tx.send(Action::Render)?;
                }

                maybe_event = terminal_events.next() => match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Some(action) = self.handle_key_event(key)? {
                            self.action_tx.send(action)?;
                        }
                    }
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => {
                        if let Some(action) = self.handle_mouse_event(mouse)? {
                            self.action_tx.send(action)?;
                        }
                    }
                    Some(Ok(CrosstermEvent::Resize(w, h))) => {
                        self.action_tx.send(Action::Resize(w, h))?;
                    }
                    // Key release/repeat, focus, and paste events
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
            }

            // Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        info!("event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys go to the active screen component.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Ctrl-C always quits, even with an open modal.
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // A screen with an open search field or modal sees raw keys
        // before any global binding applies.
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            if screen.captures_input() {
                return screen.handle_key_event(key);
            }
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),
            (KeyModifiers::NONE, KeyCode::Char('/')) => return Ok(Some(Action::OpenSearch)),

            // Screen navigation via keycaps
            (KeyModifiers::NONE, KeyCode::Char(c @ ('0'..='9'))) => {
                if let Some(screen) = ScreenId::from_keycap(c) {
                    return Ok(Some(Action::SwitchScreen(screen)));
                }
            }

            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }

            (KeyModifiers::NONE, KeyCode::Esc) => return Ok(Some(Action::GoBack)),

            _ => {}
        }

        // Delegate to the active screen component
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }

        Ok(None)
    }

    /// Handle mouse events (delegate to the active screen).
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_mouse_event(mouse);
        }
        Ok(None)
    }

    /// Process a single action — update app state and propagate to screens.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            // ratatui re-measures on the next draw
            Action::Resize(..) => {}

            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    debug!("switching screen: {} → {}", self.active_screen, target);
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(false);
                    }
                    self.previous_screen = Some(self.active_screen);
                    self.active_screen = *target;
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(true);
                    }
                }
            }

            Action::GoBack => {
                if let Some(prev) = self.previous_screen.take() {
                    self.action_tx.send(Action::SwitchScreen(prev))?;
                }
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            // Render is handled in the main loop, not here
            Action::Render => {}

            // Tick, search toggles, and anything else reach the screen
            other => {
                if let Action::Tick = other {
                    self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
                }
                if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                    if let Some(follow_up) = screen.update(other)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::vertical([
            Constraint::Min(1),    // Screen content
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, layout[0]);
        }

        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        // Toasts float over the content area
        crate::widgets::toast::render_toasts(frame, layout[0], &self.alerts.visible());

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    /// Bottom tab bar listing every screen.
    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                let caption = match id.keycap() {
                    Some(c) => format!(" {c} {} ", id.label()),
                    None => format!(" {} ", id.label()),
                };
                Line::from(Span::styled(caption, style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );

        frame.render_widget(tabs, area);
    }

    /// Bottom status bar: profile, busy indicator, key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let busy = if self.gauge.is_busy() {
            Span::styled(
                format!("{} busy", SPINNER[self.spinner_frame % SPINNER.len()]),
                Style::default().fg(theme::WHEAT_GOLD),
            )
        } else {
            Span::styled("● idle", Style::default().fg(theme::SUCCESS_GREEN))
        };

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.profile.clone(), theme::key_hint_key()),
            Span::styled("  ", theme::key_hint()),
            busy,
            Span::styled(" │ ? help  / search  Tab next  q quit", theme::key_hint()),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    /// Centered help overlay.
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 62u16.min(area.width.saturating_sub(4));
        let help_height = 20u16.min(area.height.saturating_sub(4));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;
        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let hint = |key: &str, text: &str| {
            Line::from(vec![
                Span::styled(format!("  {key:<10}"), theme::key_hint_key()),
                Span::styled(text.to_owned(), theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Navigation",
                Style::default().fg(theme::SKY_BLUE),
            )),
            hint("1-9, 0", "Jump to screen"),
            hint("Tab", "Next screen"),
            hint("j/k ↑/↓", "Move selection"),
            hint("←/→", "Previous / next page"),
            hint("+/-", "Page size"),
            hint("Enter", "Toggle detail pane"),
            hint("Esc", "Back / close"),
            Line::from(""),
            Line::from(Span::styled(
                "  Actions",
                Style::default().fg(theme::SKY_BLUE),
            )),
            hint("/", "Search (debounced)"),
            hint("o / s", "Sort column / direction"),
            hint("r", "Refresh"),
            hint("t", "Toggle active/visible"),
            hint("d", "Delete (with confirmation)"),
            hint("q", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "                          Esc or ? to close",
                theme::key_hint(),
            )),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}
