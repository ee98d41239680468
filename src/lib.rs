//! Heartlink Trust - trust scoring and discovery for the Heartlink dating app
//!
//! This library computes the RealBar trust score of a profile from its
//! completeness and approved testimonials, classifies it into a tier, and
//! runs the discovery pipeline that filters and orders profiles for a viewer.
//! Every operation is a pure, synchronous computation over records the
//! caller has already loaded.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use crate::core::{classify, evaluate_profile, DiscoveryPipeline};
pub use error::HeartlinkError;
pub use models::{Candidate, DiscoveryFilter, DiscoveryResult, Profile, ScoredProfile, SortKey, Testimonial, Tier, TrustEvaluation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(classify(85.0), Tier::Verified);
        let result = DiscoveryPipeline::default().discover(vec![None], &DiscoveryFilter::default());
        assert!(result.profiles.is_empty());
    }
}
