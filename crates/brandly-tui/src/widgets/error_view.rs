//! Failure message with a "Try Again" affordance.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::theme;

/// Draw `message` and the retry hint, centered in `area`.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let [body] = Layout::vertical([Constraint::Length(4)])
        .flex(Flex::Center)
        .areas(area);

    let lines = vec![
        Line::from(Span::styled(format!("✗ {message}"), theme::error())),
        Line::default(),
        Line::from(vec![
            Span::styled("[r]", theme::key_hint_key()),
            Span::styled(" ↻ Try Again", theme::body()),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
}
