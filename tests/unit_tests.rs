// Unit tests for Heartlink Trust

use heartlink_trust::core::{
    completeness::evaluate_completeness,
    filters::{matches_discovery_filter, matches_search},
    scoring::{calculate_trust_score, evaluate_profile},
    testimonials::{aggregate, TestimonialSummary},
    tier::classify,
};
use heartlink_trust::models::{DiscoveryFilter, Profile, ScoredProfile, Testimonial, Tier};
use serde_json::json;

fn bare_profile() -> Profile {
    serde_json::from_value(json!({
        "id": 1,
        "userId": "user_1",
        "name": "Jordan Reyes",
        "age": 28
    }))
    .unwrap()
}

fn complete_profile() -> Profile {
    let mut profile = bare_profile();
    profile.photos = vec!["one.jpg".to_string(), "two.jpg".to_string()];
    profile.bio = Some("Trail runner who bakes sourdough".to_string());
    profile.interests = vec!["running".to_string(), "baking".to_string(), "board games".to_string()];
    profile.occupation = Some("Architect".to_string());
    profile.education = Some("MArch".to_string());
    profile.height_cm = Some(178);
    profile.location = Some("Chicago, IL".to_string());
    profile
}

fn approved_testimonial(id: i64, rating: u8, traits: usize) -> Testimonial {
    let ratings: serde_json::Map<String, serde_json::Value> = ["kindness", "humor", "honesty", "loyalty", "adventure"]
        .iter()
        .take(traits)
        .map(|name| (name.to_string(), json!(rating)))
        .collect();

    serde_json::from_value(json!({
        "id": id,
        "profileId": 1,
        "authorName": format!("Friend {}", id),
        "relationship": "friend",
        "body": "Would trust them with my dog",
        "ratings": ratings,
        "approved": true
    }))
    .unwrap()
}

#[test]
fn test_completeness_full_profile() {
    assert_eq!(evaluate_completeness(&complete_profile()), 10);
}

#[test]
fn test_completeness_bare_profile() {
    assert_eq!(evaluate_completeness(&bare_profile()), 0);
}

#[test]
fn test_top_scenario_is_verified() {
    let testimonials: Vec<Testimonial> = (1..=4).map(|id| approved_testimonial(id, 5, 5)).collect();

    let evaluation = evaluate_profile(&complete_profile(), &testimonials);

    assert_eq!(evaluation.breakdown.props_component, 60.0);
    assert_eq!(evaluation.breakdown.rating_component, 30.0);
    assert_eq!(evaluation.breakdown.completeness_component, 10);
    assert_eq!(evaluation.score, 100.0);
    assert_eq!(evaluation.tier, Tier::Verified);
}

#[test]
fn test_empty_scenario_is_new() {
    let evaluation = evaluate_profile(&bare_profile(), &[]);

    assert_eq!(evaluation.score, 0.0);
    assert_eq!(evaluation.tier, Tier::New);
}

#[test]
fn test_middle_scenario_is_emerging() {
    let mut profile = bare_profile();
    profile.photos = vec!["one.jpg".to_string()];
    profile.bio = Some("Hi".to_string());
    profile.interests = vec!["chess".to_string()];
    assert_eq!(evaluate_completeness(&profile), 6);

    let testimonials = vec![approved_testimonial(1, 4, 3), approved_testimonial(2, 4, 2)];
    let evaluation = evaluate_profile(&profile, &testimonials);

    assert_eq!(evaluation.score, 60.0);
    assert_eq!(evaluation.tier, Tier::Emerging);
}

#[test]
fn test_unapproved_testimonials_do_not_count() {
    let mut pending = approved_testimonial(1, 5, 5);
    pending.approved = false;

    let summary = aggregate(&[pending]);

    assert_eq!(summary, TestimonialSummary::default());
}

#[test]
fn test_props_beyond_four_add_nothing() {
    let four: Vec<Testimonial> = (1..=4).map(|id| approved_testimonial(id, 3, 2)).collect();
    let six: Vec<Testimonial> = (1..=6).map(|id| approved_testimonial(id, 3, 2)).collect();

    let profile = bare_profile();
    assert_eq!(evaluate_profile(&profile, &four).score, evaluate_profile(&profile, &six).score);
}

#[test]
fn test_evaluation_is_idempotent() {
    let testimonials = vec![approved_testimonial(1, 4, 5), approved_testimonial(2, 2, 1)];
    let profile = complete_profile();

    assert_eq!(evaluate_profile(&profile, &testimonials), evaluate_profile(&profile, &testimonials));
}

#[test]
fn test_tier_partition_boundaries() {
    assert_eq!(classify(85.0), Tier::Verified);
    assert_eq!(classify(84.999), Tier::Trusted);
    assert_eq!(classify(70.0), Tier::Trusted);
    assert_eq!(classify(69.999), Tier::Emerging);
    assert_eq!(classify(50.0), Tier::Emerging);
    assert_eq!(classify(49.999), Tier::New);
}

#[test]
fn test_score_is_bounded() {
    let summary = TestimonialSummary {
        count: 100,
        mean_rating: 5.0,
        ..Default::default()
    };
    assert_eq!(calculate_trust_score(10, &summary), 100.0);
}

#[test]
fn test_search_matches_location() {
    let profile = complete_profile();

    assert!(matches_search(&profile, Some("chicago")));
    assert!(matches_search(&profile, Some("SOURDOUGH")));
    assert!(!matches_search(&profile, Some("boston")));
}

#[test]
fn test_disabling_a_filter_never_removes_profiles() {
    let scored = ScoredProfile {
        profile: complete_profile(),
        score: 55.0,
        tier: Tier::Emerging,
        prop_count: 1,
    };

    let strict = DiscoveryFilter {
        min_age: Some(30),
        min_score: 50.0,
        require_props_only: true,
        search_text: Some("architect".to_string()),
        ..Default::default()
    };
    assert!(!matches_discovery_filter(&scored, &strict));

    let relaxed = DiscoveryFilter {
        min_age: None,
        ..strict.clone()
    };
    // Occupation is not searched, so the text filter still excludes
    assert!(!matches_discovery_filter(&scored, &relaxed));

    let relaxed = DiscoveryFilter {
        search_text: None,
        ..relaxed
    };
    assert!(matches_discovery_filter(&scored, &relaxed));
}
