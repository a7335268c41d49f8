//! Main application struct and event loop for the pettype TUI.

use std::cell::Cell;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pettype_core::{Screen, SessionController};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    widgets::Block,
};
use tracing::{debug, warn};

use crate::clipboard::copy_to_clipboard;
use crate::keybindings::{Action, KeyBindings};
use crate::theme::{Theme, ThemeMode};
use crate::views::view_for;
use crate::widgets::HintBarWidget;
use crate::{PetTerminal, restore_terminal, setup_terminal};

/// How long the event loop waits for input before ticking.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Main TUI application.
#[derive(Debug)]
pub struct App {
    pub controller: SessionController,
    pub keybindings: KeyBindings,
    pub theme: Theme,
    pub running: bool,
    /// Highlighted option on the quiz screen.
    pub cursor: usize,
    /// Scroll offset of the result screen.
    pub scroll: u16,
    /// Largest useful `scroll`, recorded by the result view on each render.
    /// `u16::MAX` until the first render.
    pub scroll_limit: Cell<u16>,
    /// Ticks since startup; drives the loading animation.
    pub ticks: u64,
    /// Latest status message for the hint bar.
    pub status: Option<String>,
}

impl App {
    pub fn new(controller: SessionController, mode: ThemeMode) -> Self {
        Self {
            controller,
            keybindings: KeyBindings::default(),
            theme: Theme::for_mode(mode),
            running: true,
            cursor: 0,
            scroll: 0,
            scroll_limit: Cell::new(u16::MAX),
            ticks: 0,
            status: None,
        }
    }

    /// Resolve `key` for the current screen and execute it.
    ///
    /// Ctrl-C always quits.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if let Some(action) = self.keybindings.resolve(key, self.controller.screen()) {
            self.execute_action(action);
        }
    }

    fn execute_action(&mut self, action: Action) {
        let screen = self.controller.screen();
        match action {
            Action::Quit => self.running = false,
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                debug!(mode = %self.theme.mode, "Theme toggled");
            }
            Action::NavigateUp => match screen {
                Screen::Quiz => self.cursor = self.cursor.saturating_sub(1),
                Screen::Result => self.scroll = self.scroll.saturating_sub(1),
                Screen::Start | Screen::Loading => {}
            },
            Action::NavigateDown => match screen {
                Screen::Quiz => {
                    let last = self.controller.choices().len().saturating_sub(1);
                    self.cursor = (self.cursor + 1).min(last);
                }
                Screen::Result => {
                    self.scroll = self.scroll.saturating_add(1).min(self.scroll_limit.get());
                }
                Screen::Start | Screen::Loading => {}
            },
            Action::Select => match screen {
                Screen::Start => self.start(),
                Screen::Quiz => self.answer(self.cursor),
                Screen::Loading | Screen::Result => {}
            },
            Action::SelectOption(option) => {
                if screen == Screen::Quiz {
                    self.answer(option);
                }
            }
            Action::Restart => {
                if screen == Screen::Result {
                    self.controller.restart();
                    self.reset_view_state();
                }
            }
            Action::Share => {
                if screen == Screen::Result {
                    self.share();
                }
            }
        }
    }

    fn start(&mut self) {
        self.controller.start();
        self.reset_view_state();
    }

    fn answer(&mut self, option: usize) {
        let Some(choice) = self.controller.choice(option) else {
            return;
        };
        self.controller.answer(choice);
        self.cursor = 0;
    }

    fn share(&mut self) {
        let Some(text) = self.controller.share_text() else {
            return;
        };
        self.status = Some(match copy_to_clipboard(&text) {
            Ok(()) => "Copied to clipboard".to_string(),
            Err(e) => {
                warn!(error = %e, "Share failed");
                format!("Share failed: {e}")
            }
        });
    }

    fn reset_view_state(&mut self) {
        self.cursor = 0;
        self.scroll = 0;
        self.scroll_limit.set(u16::MAX);
        self.status = None;
    }

    /// Render the current screen and the hint bar.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(self.theme.base()), area);

        let [view_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let screen = self.controller.screen();
        view_for(screen).render(frame, view_area, self);

        let hints = HintBarWidget::for_screen(screen).with_status(self.status.clone());
        frame.render_widget(hints.to_paragraph(&self.theme), hint_area);
    }

    /// Advance the animation and apply any fired timers.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        if self.controller.poll_timers() {
            self.reset_view_state();
        }
    }

    /// Set up the terminal, run until quit, then restore it.
    pub async fn run(&mut self) -> io::Result<()> {
        let mut terminal = setup_terminal()?;
        self.controller.notify_current_screen();

        let result = self.event_loop(&mut terminal).await;

        restore_terminal(&mut terminal)?;
        self.controller.flush_telemetry().await;

        result
    }

    async fn event_loop(&mut self, terminal: &mut PetTerminal) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| self.render(f))?;

            if event::poll(TICK_RATE)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }

            self.tick();
            // Let spawned timers and telemetry make progress
            tokio::task::yield_now().await;
        }

        Ok(())
    }
}
