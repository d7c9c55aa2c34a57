// ── API-to-domain type conversions ──
//
// Bridges raw `brandly_api` response types into `brandly_core::model`.
// Field values pass through unchanged; the counters stay display strings.

use brandly_api::{BrandResponse, RecentCampaignResponse};

use crate::model::{Brand, BrandId, RecentCampaign};

impl From<RecentCampaignResponse> for RecentCampaign {
    fn from(r: RecentCampaignResponse) -> Self {
        Self {
            title: r.title,
            description: r.description,
        }
    }
}

impl From<BrandResponse> for Brand {
    fn from(r: BrandResponse) -> Self {
        Self {
            id: BrandId::from(r.id),
            name: r.name,
            logo: r.logo,
            description: r.description,
            category: r.category,
            followers: r.followers,
            campaigns: r.campaigns,
            rating: r.rating,
            recent_campaign: r.recent_campaign.map(RecentCampaign::from),
        }
    }
}
