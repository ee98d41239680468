use crate::models::{DiscoveryFilter, Profile, ScoredProfile};

/// Check the profile's age against the optional bounds
///
/// An unset bound never excludes anyone. Inverted bounds simply match nothing.
#[inline]
pub fn matches_age(profile: &Profile, filter: &DiscoveryFilter) -> bool {
    filter.min_age.map_or(true, |min| profile.age >= min)
        && filter.max_age.map_or(true, |max| profile.age <= max)
}

/// Case-insensitive substring search over name, bio and location
///
/// A missing or blank search term matches every profile.
#[inline]
pub fn matches_search(profile: &Profile, search_text: Option<&str>) -> bool {
    let needle = match search_text.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_lowercase(),
        _ => return true,
    };

    [Some(profile.name.as_str()), profile.bio.as_deref(), profile.location.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Case-insensitive match of a testimonial relationship tag
///
/// Exact matches are a special case of the substring check. An empty query
/// matches every tag.
#[inline]
pub fn matches_relationship(relationship: &str, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || relationship.trim().to_lowercase().contains(&query)
}

/// Check a scored profile against every active discovery predicate
#[inline]
pub fn matches_discovery_filter(scored: &ScoredProfile, filter: &DiscoveryFilter) -> bool {
    // Excluded users (self, already swiped)
    if filter.exclude_user_ids.contains(&scored.profile.user_id) {
        return false;
    }

    if !matches_age(&scored.profile, filter) {
        return false;
    }

    if scored.score < filter.effective_min_score() {
        return false;
    }

    if filter.require_props_only && scored.prop_count == 0 {
        return false;
    }

    matches_search(&scored.profile, filter.search_text.as_deref())
}
