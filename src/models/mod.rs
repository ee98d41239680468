// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, MatchEvent, MatchEventType, Profile, RelationshipStage, ReviewDecision, Testimonial, Tier, UserMatch};
pub use requests::{DiscoveryFilter, SortKey};
pub use responses::{DiscoveryResult, ScoredProfile, TrustBreakdown, TrustEvaluation};
