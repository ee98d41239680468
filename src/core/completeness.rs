use serde::Serialize;

use crate::models::Profile;

pub const PHOTOS_POINTS: u8 = 2;
pub const BIO_POINTS: u8 = 2;
pub const INTERESTS_POINTS: u8 = 2;
pub const OCCUPATION_POINTS: u8 = 1;
pub const EDUCATION_POINTS: u8 = 1;
pub const HEIGHT_POINTS: u8 = 1;
pub const LOCATION_POINTS: u8 = 1;

/// Upper bound of the completeness sub-score
pub const MAX_COMPLETENESS: u8 = 10;

const _: () = assert!(
    PHOTOS_POINTS
        + BIO_POINTS
        + INTERESTS_POINTS
        + OCCUPATION_POINTS
        + EDUCATION_POINTS
        + HEIGHT_POINTS
        + LOCATION_POINTS
        == MAX_COMPLETENESS,
    "completeness points must sum to MAX_COMPLETENESS"
);

/// One line of the "complete your profile" checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletenessItem {
    pub field: &'static str,
    pub points: u8,
    pub awarded: bool,
}

/// Score how filled-in a profile is (0-10)
///
/// Missing, empty and blank fields contribute nothing.
#[inline]
pub fn evaluate_completeness(profile: &Profile) -> u8 {
    completeness_checklist(profile)
        .iter()
        .filter(|item| item.awarded)
        .map(|item| item.points)
        .sum()
}

/// Per-field view of the completeness score
pub fn completeness_checklist(profile: &Profile) -> [CompletenessItem; 7] {
    [
        item("photos", PHOTOS_POINTS, !profile.photos.is_empty()),
        item("bio", BIO_POINTS, profile.has_bio()),
        item("interests", INTERESTS_POINTS, !profile.interests.is_empty()),
        item("occupation", OCCUPATION_POINTS, profile.has_occupation()),
        item("education", EDUCATION_POINTS, profile.has_education()),
        item("height", HEIGHT_POINTS, profile.height_cm.is_some()),
        item("location", LOCATION_POINTS, profile.has_location()),
    ]
}

fn item(field: &'static str, points: u8, awarded: bool) -> CompletenessItem {
    CompletenessItem { field, points, awarded }
}
