// brandly-api: Async Rust client for the brand catalogue HTTP API

pub mod brands;
pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::BrandClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
pub use types::{BrandResponse, RecentCampaignResponse};
