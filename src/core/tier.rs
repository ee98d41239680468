use crate::models::Tier;

/// Map a trust score onto its tier
///
/// Thresholds are inclusive lower bounds checked from the top down:
/// 85 Verified, 70 Trusted, 50 Emerging, anything below (or NaN) New.
#[inline]
pub fn classify(score: f64) -> Tier {
    [Tier::Verified, Tier::Trusted, Tier::Emerging]
        .into_iter()
        .find(|tier| score >= tier.min_score())
        .unwrap_or(Tier::New)
}
