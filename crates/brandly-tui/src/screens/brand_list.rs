//! Brand list screen: header plus one card per brand.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::ThrobberState;
use tokio::sync::watch;
use tracing::debug;

use brandly_core::{BrandList, BrandListController, BrandSource, ViewState};

use crate::action::Action;
use crate::component::Component;
use crate::event::EventSender;
use crate::screen::ScreenId;
use crate::theme;
use crate::widgets::brand_card::{CARD_HEIGHT, render_brand_card};
use crate::widgets::error_view::render_error;
use crate::widgets::loading::render_loading;

pub const LIST_TITLE: &str = "Top Brands Today";
pub const LIST_SUBTITLE: &str = "Discover amazing brands & creators";

pub struct BrandListScreen {
    controller: BrandListController,
    state_rx: watch::Receiver<ViewState<BrandList>>,
    selected: usize,
    throbber_state: ThrobberState,
}

impl BrandListScreen {
    pub fn new(source: Arc<dyn BrandSource>) -> Self {
        let controller = BrandListController::new(source);
        let state_rx = controller.subscribe();
        Self {
            controller,
            state_rx,
            selected: 0,
            throbber_state: ThrobberState::default(),
        }
    }

    fn brands(&self) -> Option<BrandList> {
        self.state_rx.borrow().ready().cloned()
    }

    fn brand_count(&self) -> usize {
        self.brands().map_or(0, |b| b.len())
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.brand_count();
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    fn reload(&mut self) {
        debug!("reloading brand list");
        self.selected = 0;
        drop(self.controller.retry());
    }

    /// First card index drawn so that `selected` stays on screen.
    fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 {
            return 0;
        }
        self.selected.saturating_sub(visible - 1)
    }

    fn render_header(frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(LIST_TITLE, theme::title_style())),
            Line::from(Span::styled(LIST_SUBTITLE, theme::subtitle_style())),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect, brands: &BrandList) {
        if brands.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("No brands to show.", theme::key_hint())),
                area,
            );
            return;
        }

        let visible = usize::from(area.height / CARD_HEIGHT).max(1);
        let selected = self.selected.min(brands.len() - 1);
        let offset = self.scroll_offset(visible).min(brands.len() - 1);

        let mut y = area.y;
        for (idx, brand) in brands.iter().enumerate().skip(offset).take(visible) {
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let card = Rect::new(area.x, y, area.width, height);
            render_brand_card(frame, card, brand, idx == selected);
            y += height;
        }
    }
}

impl Component for BrandListScreen {
    fn id(&self) -> ScreenId {
        ScreenId::BrandList
    }

    fn mount(&mut self, events: &EventSender) {
        events.watch_view(self.id(), self.state_rx.clone());
        drop(self.controller.activate());
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        let state = self.state_rx.borrow().clone();
        match state {
            ViewState::Loading => None,
            ViewState::Error(_) => {
                if matches!(key.code, KeyCode::Char('r') | KeyCode::Enter) {
                    self.reload();
                }
                None
            }
            ViewState::Ready(brands) => {
                match key.code {
                    KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
                    KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
                    KeyCode::Char('g') | KeyCode::Home => self.selected = 0,
                    KeyCode::Char('G') | KeyCode::End => {
                        self.selected = brands.len().saturating_sub(1);
                    }
                    KeyCode::Enter => {
                        return brands
                            .get(self.selected)
                            .map(|b| Action::OpenBrand(b.id.clone()));
                    }
                    KeyCode::Char('r') => self.reload(),
                    _ => {}
                }
                None
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.move_selection(1),
            MouseEventKind::ScrollUp => self.move_selection(-1),
            _ => {}
        }
        None
    }

    fn tick(&mut self) -> bool {
        let loading = self.state_rx.borrow().is_loading();
        if loading {
            self.throbber_state.calc_next();
        }
        loading
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let [header, _, body] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        Self::render_header(frame, header);

        let state = self.state_rx.borrow().clone();
        match state {
            ViewState::Loading => render_loading(frame, body, &self.throbber_state),
            ViewState::Error(message) => render_error(frame, body, &message),
            ViewState::Ready(brands) => self.render_cards(frame, body, &brands),
        }
    }
}
