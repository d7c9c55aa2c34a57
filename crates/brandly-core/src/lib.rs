//! Domain layer between `brandly-api` and the UI consumers (CLI / TUI).
//!
//! - **[`Brand`]** and **[`BrandId`]**: the read-only catalogue record and its
//!   identifier. [`IdPolicy`] decides how an id becomes a URL path segment.
//!
//! - **[`FetchError`]**: every transport, status, decode, and validation
//!   failure collapsed into one value.
//!
//! - **[`BrandSource`]**: async seam the controllers fetch through.
//!   [`Catalog`] is the HTTP implementation built from a [`ClientConfig`].
//!
//! - **View-state controllers** ([`view`]): [`BrandListController`] and
//!   [`BrandDetailController`] expose `Loading` / `Ready` / `Error` through
//!   `tokio::sync::watch` receivers. Each fetch is generation-tagged so a
//!   slow, superseded response never overwrites a newer one.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod source;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ClientConfig, DEFAULT_BASE_URL, TlsVerification};
pub use error::{FetchError, FetchErrorKind};
pub use model::{Brand, BrandId, IdPolicy, RecentCampaign};
pub use source::{BrandSource, Catalog};
pub use view::{
    BrandDetailController, BrandList, BrandListController, DETAIL_FAILURE_MESSAGE, FollowState,
    LIST_FAILURE_MESSAGE, LoadTicket, ViewController, ViewState,
};
