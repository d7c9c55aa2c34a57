// ── Brand detail controller ──

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use super::{ViewController, ViewState};
use crate::model::{Brand, BrandId};
use crate::source::BrandSource;

/// Shown whenever the detail fetch fails, whatever the cause.
pub const DETAIL_FAILURE_MESSAGE: &str = "Failed to load brand details. Please try again.";

/// Local, never-persisted "following" flag of one detail screen session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowState {
    following: bool,
}

impl FollowState {
    pub fn is_following(self) -> bool {
        self.following
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.following = !self.following;
        self.following
    }

    pub fn reset(&mut self) {
        self.following = false;
    }
}

/// Drives the detail screen for one brand id.
pub struct BrandDetailController {
    source: Arc<dyn BrandSource>,
    id: BrandId,
    view: Arc<ViewController<Arc<Brand>>>,
    follow: FollowState,
}

impl BrandDetailController {
    pub fn new(source: Arc<dyn BrandSource>, id: BrandId) -> Self {
        Self {
            source,
            id,
            view: Arc::new(ViewController::new("brand_detail", DETAIL_FAILURE_MESSAGE)),
            follow: FollowState::default(),
        }
    }

    pub fn id(&self) -> &BrandId {
        &self.id
    }

    /// Start a fresh screen session: clear the follow flag and fetch.
    pub fn activate(&mut self) -> JoinHandle<()> {
        self.follow.reset();
        self.fetch()
    }

    /// Re-fetch after an error or on reload. The follow flag is kept.
    pub fn retry(&self) -> JoinHandle<()> {
        self.fetch()
    }

    fn fetch(&self) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let id = self.id.clone();
        self.view
            .spawn_load(async move { source.get_brand(&id).await.map(Arc::new) })
    }

    pub fn is_following(&self) -> bool {
        self.follow.is_following()
    }

    /// Purely local; never touches the network.
    pub fn toggle_follow(&mut self) -> bool {
        let following = self.follow.toggle();
        debug!(id = %self.id, following, "follow toggled");
        following
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Arc<Brand>>> {
        self.view.subscribe()
    }

    pub fn state(&self) -> ViewState<Arc<Brand>> {
        self.view.state()
    }
}
