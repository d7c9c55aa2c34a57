//! One brand in the list: name, two-line description, category, chevron.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use brandly_core::Brand;

use crate::theme;

/// Rows a card occupies, borders included.
pub const CARD_HEIGHT: u16 = 6;

const DESCRIPTION_LINES: usize = 2;

/// Draw `brand` as a bordered card filling `area`.
pub fn render_brand_card(frame: &mut Frame, area: Rect, brand: &Brand, selected: bool) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if selected {
            theme::border_focused()
        } else {
            theme::border_default()
        });
    if selected {
        block = block.style(theme::card_selected_bg());
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width < 4 {
        return;
    }

    let [text_area, chevron_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

    let mut lines = vec![Line::from(Span::styled(
        brand.name.clone(),
        theme::card_name(selected),
    ))];
    let description = clamp_lines(
        &brand.description,
        usize::from(text_area.width.saturating_sub(1)),
        DESCRIPTION_LINES,
    );
    for line in description {
        lines.push(Line::from(Span::styled(line, theme::body())));
    }
    for _ in lines.len()..=DESCRIPTION_LINES {
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        brand.category.to_uppercase(),
        theme::category(),
    )));
    frame.render_widget(Paragraph::new(lines), text_area);

    // Chevron sits on the middle row.
    let mid = Rect {
        y: chevron_area.y + chevron_area.height / 2,
        height: 1,
        ..chevron_area
    };
    let chevron_style = if selected {
        theme::border_focused()
    } else {
        theme::key_hint()
    };
    frame.render_widget(Paragraph::new(Span::styled("›", chevron_style)), mid);
}

/// Greedy word wrap of `text` into at most `max_lines` lines of `width`
/// chars. Overflow is marked with a trailing `…` on the last line.
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let mut lines = wrap(text, width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let kept: String = last.chars().take(width - 1).collect();
            *last = format!("{}…", kept.trim_end());
        }
    }
    lines
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        // Hard-split words longer than a full line.
        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        if chars.is_empty() {
            continue;
        }

        let len = chars.len();
        if current_len > 0 && current_len + 1 + len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars);
        current_len += len;
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}
