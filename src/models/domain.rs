use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use crate::error::HeartlinkError;

/// Dating profile as handed over by the data-access layer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Profile {
    pub id: i64,
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 18))]
    pub age: u8,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "relationshipStage", default)]
    pub relationship_stage: Option<RelationshipStage>,
    /// Cached testimonial mean, written back by `refresh_profile_rating`
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "reviewCount", default)]
    pub review_count: u32,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(rename = "heightCm", default)]
    pub height_cm: Option<u16>,
    #[serde(rename = "weightKg", default)]
    pub weight_kg: Option<u16>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub drinking: Option<String>,
    #[serde(default)]
    pub smoking: Option<String>,
    #[serde(rename = "lookingFor", default)]
    pub looking_for: Option<String>,
}

impl Profile {
    /// Run boundary validation, handing the profile back on success
    pub fn validated(self) -> Result<Self, HeartlinkError> {
        self.validate()?;
        Ok(self)
    }

    pub fn has_bio(&self) -> bool {
        is_present(&self.bio)
    }

    pub fn has_location(&self) -> bool {
        is_present(&self.location)
    }

    pub fn has_occupation(&self) -> bool {
        is_present(&self.occupation)
    }

    pub fn has_education(&self) -> bool {
        is_present(&self.education)
    }
}

/// Blank strings count as absent.
pub(crate) fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.trim().is_empty())
}

/// Where the profile owner currently is, ordered from least to most committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipStage {
    Single,
    Talking,
    Dating,
    Exclusive,
    #[serde(other)]
    Unspecified,
}

/// Testimonial ("prop") written by an acquaintance about a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    #[serde(rename = "profileId")]
    pub profile_id: i64,
    #[serde(rename = "authorName")]
    pub author_name: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub body: String,
    /// Trait name to rating. Values are meant to be numbers 1-5 but arrive unchecked.
    #[serde(default)]
    pub ratings: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(rename = "photoDescriptions", default)]
    pub photo_descriptions: Vec<String>,
    #[serde(rename = "photoConsent", default)]
    pub photo_consent: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Testimonial {
    /// Shared photos are only exposed when the author consented
    pub fn visible_photos(&self) -> &[String] {
        if self.photo_consent {
            &self.photos
        } else {
            &[]
        }
    }
}

/// Owner decision on a pending testimonial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// Trust tier derived from the trust score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    New,
    Emerging,
    Trusted,
    Verified,
}

impl Tier {
    /// Inclusive lower score bound of the tier
    pub fn min_score(self) -> f64 {
        match self {
            Tier::New => 0.0,
            Tier::Emerging => 50.0,
            Tier::Trusted => 70.0,
            Tier::Verified => 85.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::New => "New",
            Tier::Emerging => "Emerging",
            Tier::Trusted => "Trusted",
            Tier::Verified => "Verified",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A profile together with every testimonial written about it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub profile: Profile,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

/// Swipe event for tracking user interactions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEvent {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "targetUserId")]
    pub target_user_id: String,
    #[serde(rename = "eventType")]
    pub event_type: MatchEventType,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchEventType {
    Viewed,
    Liked,
    Passed,
    Matched,
}

/// Mutual match between two users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMatch {
    #[serde(rename = "user1Id")]
    pub user1_id: String,
    #[serde(rename = "user2Id")]
    pub user2_id: String,
    #[serde(rename = "matchedAt")]
    pub matched_at: chrono::DateTime<chrono::Utc>,
}
