//! Event source for the app loop.
//!
//! Two producers feed one channel: the terminal reader (keys, mouse,
//! resize, and the spinner tick) and one watcher per mounted screen that
//! reports every `ViewState` transition of its controller. The loop only
//! redraws in response to these events; there is no frame-rate timer.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use brandly_core::ViewState;

use crate::screen::ScreenId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal was resized to (cols, rows).
    Resize(u16, u16),
    /// Advance loading spinners.
    Tick,
    /// The controller behind this screen entered a new `ViewState`.
    ViewChanged(ScreenId),
}

/// Cloneable handle screens use to report controller transitions.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<Event>,
    cancel: CancellationToken,
}

impl EventSender {
    /// Emit `Event::ViewChanged(screen)` for every transition seen on `rx`.
    ///
    /// The watcher ends once the controller is dropped (its sender goes
    /// away) or the reader stops, so unmounting a screen needs no cleanup.
    pub fn watch_view<T>(
        &self,
        screen: ScreenId,
        mut rx: watch::Receiver<ViewState<T>>,
    ) -> JoinHandle<()>
    where
        T: Send + Sync + 'static,
    {
        let tx = self.tx.clone();
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    () = cancel.cancelled() => break,
                    changed = rx.changed() => {
                        if changed.is_err() || tx.send(Event::ViewChanged(screen)).is_err() {
                            break;
                        }
                    }
                }
            }
            debug!(%screen, "view watcher finished");
        })
    }
}

/// Receiving end of the event channel.
pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    sender: EventSender,
}

impl EventReader {
    /// Channel with no producers yet. Screens attach through
    /// [`sender`](Self::sender); [`start_terminal`](Self::start_terminal)
    /// adds the terminal.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            rx,
            sender: EventSender {
                tx,
                cancel: CancellationToken::new(),
            },
        }
    }

    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    /// Spawn the crossterm reader. `Tick` fires every `spinner_rate`.
    pub fn start_terminal(&self, spinner_rate: Duration) {
        let tx = self.sender.tx.clone();
        let cancel = self.sender.cancel.clone();

        tokio::spawn(async move {
            let mut terminal = EventStream::new();
            let mut spinner = tokio::time::interval(spinner_rate);
            spinner.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                let event = tokio::select! {
                    () = cancel.cancelled() => break,

                    _ = spinner.tick() => Event::Tick,

                    Some(Ok(input)) = terminal.next() => match input {
                        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
                        CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
                        CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
                        _ => continue,
                    },
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });
    }

    /// Next event, or `None` once every producer is gone.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Stop the terminal reader and every view watcher.
    pub fn stop(&self) {
        self.sender.cancel.cancel();
    }
}

impl Default for EventReader {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.stop();
    }
}
