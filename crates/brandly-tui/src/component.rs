//! The `Component` trait implemented by the brand list and brand detail
//! screens.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

use crate::action::Action;
use crate::event::EventSender;
use crate::screen::ScreenId;

/// A screen backed by one view controller.
///
/// Lifecycle: `mount` once, then any mix of input, `tick` and `render`
/// until the app drops it. Dropping the screen drops its controller.
pub trait Component: Send {
    fn id(&self) -> ScreenId;

    /// Subscribe `events` to the controller's state and start the first
    /// fetch.
    fn mount(&mut self, events: &EventSender);

    /// Screen keys. Global keys never reach here.
    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action>;

    fn handle_mouse_event(&mut self, _mouse: MouseEvent) -> Option<Action> {
        None
    }

    /// Advance the loading spinner. Returns whether anything moved.
    fn tick(&mut self) -> bool;

    fn render(&self, frame: &mut Frame, area: Rect);
}
