//! Brand detail screen: identity, follow button, about, stats, and the
//! latest campaign when the server reports one.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::watch;

use brandly_core::{Brand, BrandDetailController, BrandId, BrandSource, RecentCampaign, ViewState};

use crate::action::Action;
use crate::component::Component;
use crate::event::EventSender;
use crate::screen::ScreenId;
use crate::theme;
use crate::widgets::error_view::render_error;
use crate::widgets::follow_button::follow_button;
use crate::widgets::loading::render_loading;

pub struct BrandDetailScreen {
    controller: BrandDetailController,
    state_rx: watch::Receiver<ViewState<Arc<Brand>>>,
    throbber_state: ThrobberState,
}

impl BrandDetailScreen {
    pub fn new(source: Arc<dyn BrandSource>, id: BrandId) -> Self {
        let controller = BrandDetailController::new(source, id);
        let state_rx = controller.subscribe();
        Self {
            controller,
            state_rx,
            throbber_state: ThrobberState::default(),
        }
    }

    fn render_brand(&self, frame: &mut Frame, area: Rect, brand: &Brand) {
        let campaign_height = if brand.recent_campaign.is_some() { 6 } else { 0 };
        let [identity, _, about, stats, campaign, hints] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(4),
            Constraint::Length(campaign_height),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_identity(frame, identity, brand);
        render_about(frame, about, &brand.description);
        render_stats(frame, stats, brand);
        if let Some(ref recent) = brand.recent_campaign {
            render_campaign(frame, campaign, recent);
        }
        render_hints(frame, hints);
    }

    fn render_identity(&self, frame: &mut Frame, area: Rect, brand: &Brand) {
        let logo = brand
            .logo_host()
            .map_or_else(|| "◯".to_owned(), |host| format!("◯ {host}"));
        let lines = vec![
            Line::from(Span::styled(logo, theme::key_hint())),
            Line::from(Span::styled(brand.name.clone(), theme::title_style())),
            Line::from(Span::styled(brand.category.to_uppercase(), theme::category())),
            Line::default(),
            Line::from(follow_button(self.controller.is_following())),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default())
}

fn render_about(frame: &mut Frame, area: Rect, description: &str) {
    let paragraph = Paragraph::new(Span::styled(description, theme::body()))
        .wrap(Wrap { trim: true })
        .block(section_block("About"));
    frame.render_widget(paragraph, area);
}

fn render_stats(frame: &mut Frame, area: Rect, brand: &Brand) {
    let columns: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);
    let stats = [
        (brand.followers.as_str(), "Followers"),
        (brand.campaigns.as_str(), "Campaigns"),
        (brand.rating.as_str(), "Rating"),
    ];

    for (column, (value, label)) in columns.into_iter().zip(stats) {
        let lines = vec![
            Line::from(Span::styled(value, theme::stat_value())),
            Line::from(Span::styled(label, theme::stat_label())),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            column,
        );
    }
}

fn render_campaign(frame: &mut Frame, area: Rect, campaign: &RecentCampaign) {
    let lines = vec![
        Line::from(Span::styled(&campaign.title, theme::card_name(false))),
        Line::from(Span::styled(&campaign.description, theme::body())),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(section_block("Latest Campaign")),
        area,
    );
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" f", theme::key_hint_key()),
        Span::styled(" follow  ", theme::key_hint()),
        Span::styled("r", theme::key_hint_key()),
        Span::styled(" reload  ", theme::key_hint()),
        Span::styled("Esc", theme::key_hint_key()),
        Span::styled(" back", theme::key_hint()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

impl Component for BrandDetailScreen {
    fn id(&self) -> ScreenId {
        ScreenId::BrandDetail
    }

    fn mount(&mut self, events: &EventSender) {
        events.watch_view(self.id(), self.state_rx.clone());
        drop(self.controller.activate());
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Backspace) {
            return Some(Action::GoBack);
        }

        let (ready, failed) = {
            let state = self.state_rx.borrow();
            (state.ready().is_some(), state.error_message().is_some())
        };
        match key.code {
            KeyCode::Char('f' | ' ') if ready => {
                self.controller.toggle_follow();
            }
            KeyCode::Char('r') if !self.state_rx.borrow().is_loading() => {
                drop(self.controller.retry());
            }
            KeyCode::Enter if failed => {
                drop(self.controller.retry());
            }
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
        let state = self.state_rx.borrow().clone();
        match state {
            ViewState::Loading => render_loading(frame, area, &self.throbber_state),
            ViewState::Error(message) => render_error(frame, area, &message),
            ViewState::Ready(brand) => self.render_brand(frame, area, &brand),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    use brandly_core::{DETAIL_FAILURE_MESSAGE, FetchError};

    use super::*;
    use crate::event::EventReader;

    struct Single {
        brand: Option<Brand>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl BrandSource for Single {
        async fn list_brands(&self) -> Result<Vec<Brand>, FetchError> {
            unreachable!()
        }

        async fn get_brand(&self, _id: &BrandId) -> Result<Brand, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.brand.clone().ok_or(FetchError::HttpStatus {
                status: 404,
                message: "Not found".into(),
            })
        }
    }

    fn acme(with_campaign: bool) -> Brand {
        Brand {
            id: BrandId::from("1"),
            name: "Acme".into(),
            logo: "https://cdn.example.test/acme.png".into(),
            description: "Anvils, rockets and other fine products".into(),
            category: "Hardware".into(),
            followers: "12.5K".into(),
            campaigns: "8".into(),
            rating: "4.8".into(),
            recent_campaign: with_campaign.then(|| RecentCampaign {
                title: "Road Runner".into(),
                description: "Beep beep".into(),
            }),
        }
    }

    async fn loaded(source: Arc<Single>) -> BrandDetailScreen {
        let mut screen = BrandDetailScreen::new(source, BrandId::from("1"));
        screen.mount(&EventReader::new().sender());
        let mut rx = screen.state_rx.clone();
        rx.wait_for(|s| !s.is_loading()).await.unwrap();
        screen
    }

    fn source(brand: Option<Brand>) -> Arc<Single> {
        Arc::new(Single {
            brand,
            calls: AtomicUsize::new(0),
        })
    }

    fn draw(screen: &BrandDetailScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn renders_all_sections() {
        let screen = loaded(source(Some(acme(true)))).await;
        let text = draw(&screen);
        for needle in [
            "Acme",
            "HARDWARE",
            "cdn.example.test",
            "Follow",
            "About",
            "Anvils",
            "12.5K",
            "Followers",
            "Campaigns",
            "Rating",
            "Latest Campaign",
            "Road Runner",
        ] {
            assert!(text.contains(needle), "missing {needle:?} in\n{text}");
        }
        assert!(!text.contains("Following"));
    }

    #[tokio::test]
    async fn campaign_section_only_when_present() {
        let screen = loaded(source(Some(acme(false)))).await;
        assert!(!draw(&screen).contains("Latest Campaign"));
    }

    #[tokio::test]
    async fn follow_toggles_locally() {
        let src = source(Some(acme(false)));
        let mut screen = loaded(Arc::clone(&src)).await;

        screen.handle_key_event(key(KeyCode::Char('f')));
        assert!(draw(&screen).contains("Following"));

        screen.handle_key_event(key(KeyCode::Char(' ')));
        assert!(!draw(&screen).contains("Following"));
        assert_eq!(src.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn back_keys_emit_go_back() {
        let mut screen = loaded(source(Some(acme(false)))).await;
        for code in [KeyCode::Esc, KeyCode::Char('h'), KeyCode::Backspace] {
            assert_eq!(
                screen.handle_key_event(key(code)),
                Some(Action::GoBack)
            );
        }
    }

    #[tokio::test]
    async fn failure_shows_fixed_message() {
        let screen = loaded(source(None)).await;
        let text = draw(&screen);
        assert!(text.contains(DETAIL_FAILURE_MESSAGE));
        assert!(text.contains("Try Again"));
    }

    #[tokio::test]
    async fn retry_from_error_issues_one_call() {
        let src = source(None);
        let mut screen = loaded(Arc::clone(&src)).await;

        screen.handle_key_event(key(KeyCode::Enter));
        let mut rx = screen.state_rx.clone();
        rx.wait_for(|s| !s.is_loading()).await.unwrap();
        assert_eq!(src.calls.load(Ordering::SeqCst), 2);
    }
}
