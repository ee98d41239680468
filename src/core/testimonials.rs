use std::collections::BTreeMap;

use crate::error::HeartlinkError;
use crate::models::{Profile, ReviewDecision, Testimonial};

pub const MIN_TRAIT_RATING: f64 = 1.0;
pub const MAX_TRAIT_RATING: f64 = 5.0;

/// Aggregate of a profile's approved testimonials
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialSummary {
    /// Number of approved testimonials
    pub count: usize,
    /// Mean over every valid rating of every approved testimonial (0-5)
    pub mean_rating: f64,
    /// Mean per trait across approved testimonials
    pub trait_means: BTreeMap<String, f64>,
}

/// Reduce testimonials into a prop count and mean rating
///
/// Only approved testimonials count. Ratings are flattened across all
/// approved testimonials before averaging, so a testimonial rating five
/// traits weighs more than one rating two. Values that are not numbers in
/// the 1-5 range are ignored. No valid ratings yields a mean of 0.
pub fn aggregate(testimonials: &[Testimonial]) -> TestimonialSummary {
    let mut count = 0;
    let mut total = 0.0;
    let mut rated = 0usize;
    let mut per_trait: BTreeMap<String, (f64, usize)> = BTreeMap::new();

    for testimonial in testimonials.iter().filter(|t| t.approved) {
        count += 1;
        for (name, value) in valid_ratings(testimonial) {
            total += value;
            rated += 1;
            let entry = per_trait.entry(name.clone()).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }

    let trait_means = per_trait
        .into_iter()
        .map(|(name, (sum, n))| (name, sum / n as f64))
        .collect();

    TestimonialSummary {
        count,
        mean_rating: mean(total, rated),
        trait_means,
    }
}

/// Mean of a single testimonial's valid ratings, 0 when it has none
pub fn testimonial_mean(testimonial: &Testimonial) -> f64 {
    let (sum, n) = valid_ratings(testimonial).fold((0.0, 0usize), |(sum, n), (_, v)| (sum + v, n + 1));
    mean(sum, n)
}

#[inline]
fn mean(sum: f64, n: usize) -> f64 {
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

fn valid_ratings(testimonial: &Testimonial) -> impl Iterator<Item = (&String, f64)> {
    testimonial.ratings.iter().filter_map(|(name, value)| {
        value
            .as_f64()
            .filter(|v| v.is_finite() && (MIN_TRAIT_RATING..=MAX_TRAIT_RATING).contains(v))
            .map(|v| (name, v))
    })
}

/// Apply the profile owner's decision to a pending testimonial
///
/// Approving marks it approved; rejecting removes it for good.
pub fn apply_review(
    testimonials: &mut Vec<Testimonial>,
    testimonial_id: i64,
    decision: ReviewDecision,
) -> Result<(), HeartlinkError> {
    let index = testimonials
        .iter()
        .position(|t| t.id == testimonial_id)
        .ok_or(HeartlinkError::TestimonialNotFound(testimonial_id))?;

    match decision {
        ReviewDecision::Approve => {
            testimonials[index].approved = true;
        }
        ReviewDecision::Reject => {
            testimonials.remove(index);
        }
    }

    tracing::debug!("Testimonial {} reviewed: {:?}", testimonial_id, decision);
    Ok(())
}

/// Write the aggregate rating and review count back onto the profile
pub fn refresh_profile_rating(profile: &mut Profile, testimonials: &[Testimonial]) {
    let summary = aggregate(testimonials);
    profile.rating = summary.mean_rating;
    profile.review_count = u32::try_from(summary.count).unwrap_or(u32::MAX);
}

/// Approved testimonials whose relationship tag contains `query`, ignoring case
///
/// An empty query returns every approved testimonial.
pub fn browse_by_relationship<'a>(testimonials: &'a [Testimonial], query: &str) -> Vec<&'a Testimonial> {
    testimonials
        .iter()
        .filter(|t| t.approved)
        .filter(|t| super::filters::matches_relationship(&t.relationship, query))
        .collect()
}
