use serde::{Deserialize, Serialize};

use crate::models::domain::Tier;

/// Discovery filter and sort selection for one page view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryFilter {
    #[serde(alias = "min_age", rename = "minAge", default)]
    pub min_age: Option<u8>,
    #[serde(alias = "max_age", rename = "maxAge", default)]
    pub max_age: Option<u8>,
    #[serde(alias = "min_score", rename = "minScore", default)]
    pub min_score: f64,
    #[serde(alias = "min_tier", rename = "minTier", default)]
    pub min_tier: Option<Tier>,
    #[serde(alias = "require_props_only", rename = "requirePropsOnly", default)]
    pub require_props_only: bool,
    #[serde(alias = "search_text", rename = "searchText", default)]
    pub search_text: Option<String>,
    #[serde(alias = "sort_by", rename = "sortBy", default)]
    pub sort_by: SortKey,
    #[serde(alias = "exclude_user_ids", rename = "excludeUserIds", default)]
    pub exclude_user_ids: Vec<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl DiscoveryFilter {
    /// Score threshold after folding the tier floor into `min_score`
    pub fn effective_min_score(&self) -> f64 {
        let tier_floor = self.min_tier.map(Tier::min_score).unwrap_or(0.0);
        self.min_score.max(tier_floor)
    }
}

/// Discovery sort order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Score,
    Recent,
    PropCount,
    Random,
}
