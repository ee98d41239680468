use serde::{Deserialize, Serialize};
use crate::models::domain::{Profile, Tier};

/// Score and tier for a single profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustEvaluation {
    pub score: f64,
    pub tier: Tier,
    pub breakdown: TrustBreakdown,
}

/// The parts the trust score was summed from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustBreakdown {
    #[serde(rename = "propsComponent")]
    pub props_component: f64,
    #[serde(rename = "ratingComponent")]
    pub rating_component: f64,
    #[serde(rename = "completenessComponent")]
    pub completeness_component: u8,
    #[serde(rename = "propCount")]
    pub prop_count: usize,
    #[serde(rename = "meanRating")]
    pub mean_rating: f64,
}

/// Profile annotated with its trust score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredProfile {
    pub profile: Profile,
    pub score: f64,
    pub tier: Tier,
    #[serde(rename = "propCount")]
    pub prop_count: usize,
}

/// Ordered, filtered discovery page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryResult {
    pub profiles: Vec<ScoredProfile>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    pub skipped: usize,
}
