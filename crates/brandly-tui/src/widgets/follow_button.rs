//! Follow / Following toggle button.

use ratatui::text::Span;

use crate::theme;

/// The button as a single styled span.
pub fn follow_button(following: bool) -> Span<'static> {
    if following {
        Span::styled(" ♥ Following ", theme::follow_active())
    } else {
        Span::styled(" + Follow ", theme::follow_idle())
    }
}
