// ── Domain model ──

pub mod brand;
pub mod brand_id;

pub use brand::{Brand, RecentCampaign};
pub use brand_id::{BrandId, IdPolicy};
