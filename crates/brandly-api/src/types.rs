// Wire types for the catalogue API.
//
// Field names follow the JSON payload (camelCase). Unknown fields are
// ignored so server-side additions never break decoding.

use serde::{Deserialize, Deserializer, Serialize};

/// A brand record as returned by `GET /brands` and `GET /brands/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub logo: String,
    pub description: String,
    pub category: String,
    pub followers: String,
    pub campaigns: String,
    pub rating: String,
    #[serde(default)]
    pub recent_campaign: Option<RecentCampaignResponse>,
}

/// The optional nested `recentCampaign` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentCampaignResponse {
    pub title: String,
    pub description: String,
}

/// Accept ids serialized either as JSON strings or bare integers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Unsigned(n) => n.to_string(),
        RawId::Signed(n) => n.to_string(),
    })
}
