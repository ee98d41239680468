// Core algorithm exports
pub mod completeness;
pub mod discovery;
pub mod filters;
pub mod matching;
pub mod scoring;
pub mod testimonials;
pub mod tier;

pub use completeness::{completeness_checklist, evaluate_completeness, CompletenessItem};
pub use discovery::{parse_candidates, sort_profiles, DiscoveryPipeline};
pub use filters::{matches_age, matches_discovery_filter, matches_relationship, matches_search};
pub use matching::{is_mutual_like, mutual_matches, swiped_user_ids};
pub use scoring::{calculate_trust_score, evaluate_profile};
pub use testimonials::{aggregate, apply_review, browse_by_relationship, refresh_profile_rating, testimonial_mean, TestimonialSummary};
pub use tier::classify;
