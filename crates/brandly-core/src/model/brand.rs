// ── Brand domain type ──
//
// Read-only record sourced from the catalogue API. The counters are
// pre-formatted display strings ("12.5K", "4.8"); nothing parses them.

use serde::{Deserialize, Serialize};
use url::Url;

use super::brand_id::BrandId;

/// A brand as shown on the list and detail screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    /// Logo image URI.
    pub logo: String,
    pub description: String,
    pub category: String,
    pub followers: String,
    pub campaigns: String,
    pub rating: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_campaign: Option<RecentCampaign>,
}

/// The brand's latest campaign, when the server reports one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentCampaign {
    pub title: String,
    pub description: String,
}

impl Brand {
    /// Host part of the logo URI, for places that cannot draw the image.
    pub fn logo_host(&self) -> Option<String> {
        Url::parse(&self.logo)
            .ok()
            .and_then(|u| u.host_str().map(str::to_owned))
    }
}
