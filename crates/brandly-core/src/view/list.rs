// ── Brand list controller ──

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::{ViewController, ViewState};
use crate::model::Brand;
use crate::source::BrandSource;

/// Shown whenever the list fetch fails, whatever the cause.
pub const LIST_FAILURE_MESSAGE: &str = "Failed to load brands. Please try again.";

/// Brands in server order, shared cheaply with renderers.
pub type BrandList = Arc<Vec<Brand>>;

/// Drives the list screen: one `list_brands` call per activation.
pub struct BrandListController {
    source: Arc<dyn BrandSource>,
    view: Arc<ViewController<BrandList>>,
}

impl BrandListController {
    pub fn new(source: Arc<dyn BrandSource>) -> Self {
        Self {
            source,
            view: Arc::new(ViewController::new("brand_list", LIST_FAILURE_MESSAGE)),
        }
    }

    /// Enter `Loading` and fetch the list.
    pub fn activate(&self) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        self.view
            .spawn_load(async move { source.list_brands().await.map(Arc::new) })
    }

    /// Same as [`activate`](Self::activate); bound to the "Try Again" action.
    pub fn retry(&self) -> JoinHandle<()> {
        self.activate()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<BrandList>> {
        self.view.subscribe()
    }

    pub fn state(&self) -> ViewState<BrandList> {
        self.view.state()
    }
}
