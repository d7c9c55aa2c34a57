//! Screen implementations. Each screen is a top-level Component that owns
//! its view-state controller.

pub mod brand_detail;
pub mod brand_list;
