//! Application core: event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tracing::{debug, info};

use brandly_core::BrandSource;

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::brand_detail::BrandDetailScreen;
use crate::screens::brand_list::BrandListScreen;
use crate::theme;
use crate::tui::Tui;

/// Spinner frame rate while a screen is loading.
const SPINNER_RATE: Duration = Duration::from_millis(250);

/// Top-level application state and event loop.
pub struct App {
    active_screen: ScreenId,
    /// Screen to return to on GoBack.
    previous_screen: Option<ScreenId>,
    /// Mounted screens. The detail screen only exists while it is shown.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    running: bool,
    help_visible: bool,
    /// Terminal input plus one view watcher per mounted screen.
    events: EventReader,
    /// Shared catalogue handle, passed to every screen controller.
    source: Arc<dyn BrandSource>,
    /// Shown in the status bar.
    endpoint: String,
}

impl App {
    pub fn new(source: Arc<dyn BrandSource>, endpoint: String) -> Self {
        let mut screens: HashMap<ScreenId, Box<dyn Component>> = HashMap::new();
        screens.insert(
            ScreenId::BrandList,
            Box::new(BrandListScreen::new(Arc::clone(&source))),
        );

        Self {
            active_screen: ScreenId::BrandList,
            previous_screen: None,
            screens,
            running: true,
            help_visible: false,
            events: EventReader::new(),
            source,
            endpoint,
        }
    }

    fn mount_screens(&mut self) {
        let events = self.events.sender();
        for screen in self.screens.values_mut() {
            screen.mount(&events);
        }
    }

    /// Run the main event loop. A frame is drawn up front and then only
    /// when an event changes what is on screen.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.mount_screens();
        self.events.start_terminal(SPINNER_RATE);
        tui.draw(|frame| self.render(frame))?;

        info!("TUI event loop started");

        while self.running {
            let Some(event) = self.events.next().await else {
                break;
            };
            if self.handle_event(event) && self.running {
                tui.draw(|frame| self.render(frame))?;
            }
        }

        self.events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Apply one event. Returns whether the frame needs redrawing.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                if let Some(action) = self.handle_key_event(key) {
                    self.process_action(action);
                }
                true
            }
            Event::Mouse(mouse) => {
                let action = self
                    .screens
                    .get_mut(&self.active_screen)
                    .and_then(|screen| screen.handle_mouse_event(mouse));
                if let Some(action) = action {
                    self.process_action(action);
                }
                matches!(
                    mouse.kind,
                    MouseEventKind::ScrollDown | MouseEventKind::ScrollUp
                )
            }
            Event::Resize(w, h) => {
                debug!(width = w, height = h, "terminal resized");
                true
            }
            Event::Tick => self
                .screens
                .get_mut(&self.active_screen)
                .is_some_and(|screen| screen.tick()),
            // Hidden screens and already-dropped detail screens don't matter.
            Event::ViewChanged(screen) => screen == self.active_screen,
        }
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys are delegated to the active screen component.
    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        if self.help_visible {
            return matches!(key.code, KeyCode::Esc | KeyCode::Char('?'))
                .then_some(Action::ToggleHelp);
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::NONE, KeyCode::Char('q')) => return Some(Action::Quit),
            (_, KeyCode::Char('?')) => return Some(Action::ToggleHelp),
            (KeyModifiers::NONE, KeyCode::Esc) => return Some(Action::GoBack),
            _ => {}
        }

        self.screens
            .get_mut(&self.active_screen)
            .and_then(|screen| screen.handle_key_event(key))
    }

    fn process_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::OpenBrand(id) => {
                debug!(%id, "opening brand detail");
                let mut screen = BrandDetailScreen::new(Arc::clone(&self.source), id);
                screen.mount(&self.events.sender());
                self.screens.insert(ScreenId::BrandDetail, Box::new(screen));
                self.switch_to(ScreenId::BrandDetail);
            }

            Action::GoBack => {
                if self.active_screen == ScreenId::BrandDetail {
                    // Dropping the screen drops its controller; an in-flight
                    // fetch then settles into nothing and its watcher ends.
                    self.screens.remove(&ScreenId::BrandDetail);
                    self.active_screen = self.previous_screen.take().unwrap_or_default();
                }
            }
        }
    }

    fn switch_to(&mut self, target: ScreenId) {
        if target == self.active_screen {
            return;
        }
        debug!("switching screen: {} → {target}", self.active_screen);
        self.previous_screen = Some(self.active_screen);
        self.active_screen = target;
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let [content_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, content_area);
        }

        self.render_status_bar(frame, status_area);

        if self.help_visible {
            Self::render_help_overlay(frame, area);
        }
    }

    /// Render the bottom status bar with the screen, endpoint, and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.active_screen),
                theme::key_hint_key(),
            ),
            Span::styled(format!("│ {} ", self.endpoint), theme::key_hint()),
            Span::styled("│ ? help  q quit", theme::key_hint()),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    /// Render the help overlay centered on screen.
    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let help_width = 52u16.min(area.width.saturating_sub(4));
        let help_height = 19u16.min(area.height.saturating_sub(2));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;

        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        frame.render_widget(Clear, help_area);
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

        let entry = |keys: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<10}"), theme::key_hint_key()),
                Span::styled(what, theme::key_hint()),
            ])
        };
        let heading = |title: &'static str| {
            Line::from(Span::styled(
                format!("  {title}"),
                Style::default().fg(theme::NEON_CYAN),
            ))
        };

        let help_text = vec![
            heading("Brands"),
            entry("j/k ↑/↓", "Move up/down"),
            entry("g/G", "Top / bottom"),
            entry("Enter", "Open brand"),
            entry("r", "Reload / try again"),
            Line::from(""),
            heading("Brand detail"),
            entry("f/Space", "Follow / unfollow"),
            entry("r", "Reload"),
            entry("Esc/h/⌫", "Back to list"),
            Line::from(""),
            heading("Global"),
            entry("?", "This help"),
            entry("q/Ctrl+c", "Quit"),
            Line::from(""),
            Line::from(Span::styled("  Esc or ? to close", theme::key_hint())),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}
