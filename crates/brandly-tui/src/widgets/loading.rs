//! Centered spinner with a label.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::theme;

pub const LOADING_LABEL: &str = "Loading brands...";

/// Draw the loading view. `state` is ticked by the owning screen.
pub fn render_loading(frame: &mut Frame, area: Rect, state: &ThrobberState) {
    let width = u16::try_from(LOADING_LABEL.len() + 4).unwrap_or(u16::MAX);
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    let throbber = Throbber::default()
        .label(LOADING_LABEL)
        .style(Style::default().fg(theme::DIM_WHITE))
        .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));

    frame.render_stateful_widget(throbber, cell, &mut state.clone());
}
