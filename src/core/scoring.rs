use crate::models::{Profile, Testimonial, TrustBreakdown, TrustEvaluation};
use crate::core::{
    completeness::evaluate_completeness,
    testimonials::{aggregate, TestimonialSummary},
    tier::classify,
};

/// Points awarded per approved prop
pub const POINTS_PER_PROP: f64 = 15.0;
/// Cap on the props component (reached at four props)
pub const MAX_PROPS_POINTS: f64 = 60.0;
/// Weight of a perfect 5/5 mean rating
pub const MAX_RATING_POINTS: f64 = 30.0;
pub const MAX_TRUST_SCORE: f64 = 100.0;

/// Calculate the trust score (0-100), a.k.a. the RealBar
///
/// Scoring formula:
/// score = min(
///     min(props * 15, 60) +        # Approved testimonials
///     (mean_rating / 5) * 30 +     # Mean trait rating
///     completeness,                # Profile completeness (0-10)
///     100
/// )
pub fn calculate_trust_score(completeness: u8, summary: &TestimonialSummary) -> f64 {
    breakdown(completeness, summary).total()
}

/// Evaluate a profile end to end: completeness, aggregation, score and tier
pub fn evaluate_profile(profile: &Profile, testimonials: &[Testimonial]) -> TrustEvaluation {
    let completeness = evaluate_completeness(profile);
    let summary = aggregate(testimonials);
    let breakdown = breakdown(completeness, &summary);
    let score = breakdown.total();

    tracing::trace!(
        "Profile {} scored {:.1} (props: {}, rating: {:.2}, completeness: {})",
        profile.id,
        score,
        summary.count,
        summary.mean_rating,
        completeness
    );

    TrustEvaluation {
        score,
        tier: classify(score),
        breakdown,
    }
}

fn breakdown(completeness: u8, summary: &TestimonialSummary) -> TrustBreakdown {
    TrustBreakdown {
        props_component: calculate_props_component(summary.count),
        rating_component: calculate_rating_component(summary.mean_rating),
        completeness_component: completeness,
        prop_count: summary.count,
        mean_rating: summary.mean_rating,
    }
}

impl TrustBreakdown {
    /// Sum of the components, capped at 100
    pub fn total(&self) -> f64 {
        let total = self.props_component + self.rating_component + f64::from(self.completeness_component);
        total.min(MAX_TRUST_SCORE)
    }
}

#[inline]
fn calculate_props_component(count: usize) -> f64 {
    (count as f64 * POINTS_PER_PROP).min(MAX_PROPS_POINTS)
}

#[inline]
fn calculate_rating_component(mean_rating: f64) -> f64 {
    mean_rating * MAX_RATING_POINTS / 5.0
}
