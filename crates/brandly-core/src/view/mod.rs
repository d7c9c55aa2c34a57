// ── View-state controllers ──
//
// Each screen owns one controller. A controller runs at most one logical
// fetch at a time: every activation bumps a generation counter, and a
// result is only applied when its generation is still the latest.

pub mod detail;
pub mod list;

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::FetchError;

pub use detail::{BrandDetailController, DETAIL_FAILURE_MESSAGE, FollowState};
pub use list::{BrandList, BrandListController, LIST_FAILURE_MESSAGE};

/// The three mutually exclusive states a screen can be in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    /// Fixed, user-facing message. The cause is only logged.
    Error(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Proof that a fetch was issued; redeemed once via [`ViewController::settle`].
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Generation-tagged holder of a [`ViewState`].
#[derive(Debug)]
pub struct ViewController<T> {
    label: &'static str,
    failure_message: &'static str,
    state: watch::Sender<ViewState<T>>,
    generation: AtomicU64,
}

impl<T> ViewController<T> {
    /// New controller in `Loading`.
    pub fn new(label: &'static str, failure_message: &'static str) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        Self {
            label,
            failure_message,
            state,
            generation: AtomicU64::new(0),
        }
    }

    /// Start a new fetch: invalidate any in-flight one and enter `Loading`.
    pub fn begin(&self) -> LoadTicket {
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = ViewState::Loading;
        });
        debug!(view = self.label, generation, "load started");
        LoadTicket(generation)
    }

    /// Apply a fetch result if `ticket` is still current.
    ///
    /// Returns `false` when a newer fetch has started since; the result is
    /// dropped in that case.
    pub fn settle(&self, ticket: LoadTicket, result: Result<T, FetchError>) -> bool {
        let applied = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != ticket.0 {
                return false;
            }
            *state = match result {
                Ok(data) => ViewState::Ready(data),
                Err(e) => {
                    warn!(
                        view = self.label,
                        kind = %e.kind(),
                        error = %e,
                        "load failed"
                    );
                    ViewState::Error(self.failure_message.to_owned())
                }
            };
            true
        });
        if !applied {
            debug!(view = self.label, generation = ticket.0, "stale result discarded");
        }
        applied
    }

    /// Receiver for renderers; marked changed on every transition.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.state.subscribe()
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

impl<T: Clone> ViewController<T> {
    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState<T> {
        self.state.borrow().clone()
    }
}

impl<T: Send + Sync + 'static> ViewController<T> {
    /// `begin()` now, then settle with `fetch`'s output on a spawned task.
    ///
    /// The task holds only a weak reference: if the controller is dropped
    /// before the fetch resolves, the result goes nowhere.
    pub fn spawn_load<F>(self: &Arc<Self>, fetch: F) -> JoinHandle<()>
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let ticket = self.begin();
        let weak: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            let result = fetch.await;
            match weak.upgrade() {
                Some(controller) => {
                    controller.settle(ticket, result);
                }
                None => debug!("controller dropped before load finished"),
            }
        })
    }
}
