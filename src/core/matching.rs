use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::models::{MatchEvent, MatchEventType, UserMatch};

#[inline]
fn is_like(event: &MatchEvent) -> bool {
    matches!(event.event_type, MatchEventType::Liked | MatchEventType::Matched)
}

/// Latest like from `from` to `to`, if any
fn latest_like(events: &[MatchEvent], from: &str, to: &str) -> Option<DateTime<Utc>> {
    events
        .iter()
        .filter(|e| is_like(e) && e.user_id == from && e.target_user_id == to)
        .map(|e| e.created_at)
        .max()
}

/// True when both users liked each other
pub fn is_mutual_like(events: &[MatchEvent], user_a: &str, user_b: &str) -> bool {
    latest_like(events, user_a, user_b).is_some() && latest_like(events, user_b, user_a).is_some()
}

/// All mutual matches of `user_id`, newest first
///
/// The match time is the later of the two likes.
pub fn mutual_matches(user_id: &str, events: &[MatchEvent]) -> Vec<UserMatch> {
    let mut outgoing: HashMap<&str, DateTime<Utc>> = HashMap::new();
    let mut incoming: HashMap<&str, DateTime<Utc>> = HashMap::new();

    for event in events.iter().filter(|e| is_like(e)) {
        if event.user_id == user_id {
            let at = outgoing.entry(event.target_user_id.as_str()).or_insert(event.created_at);
            *at = (*at).max(event.created_at);
        } else if event.target_user_id == user_id {
            let at = incoming.entry(event.user_id.as_str()).or_insert(event.created_at);
            *at = (*at).max(event.created_at);
        }
    }

    let mut matches: Vec<UserMatch> = outgoing
        .into_iter()
        .filter(|(other, _)| *other != user_id)
        .filter_map(|(other, liked_at)| {
            incoming.get(other).map(|liked_back_at| UserMatch {
                user1_id: user_id.to_string(),
                user2_id: other.to_string(),
                matched_at: liked_at.max(*liked_back_at),
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.matched_at
            .cmp(&a.matched_at)
            .then_with(|| a.user2_id.cmp(&b.user2_id))
    });
    matches
}

/// Users `user_id` already swiped on (liked, passed or matched)
///
/// Plain views are not swipes. Returned in first-swipe order without duplicates.
pub fn swiped_user_ids(user_id: &str, events: &[MatchEvent]) -> Vec<String> {
    let mut seen = HashSet::new();
    events
        .iter()
        .filter(|e| e.user_id == user_id && e.event_type != MatchEventType::Viewed)
        .filter(|e| seen.insert(e.target_user_id.as_str()))
        .map(|e| e.target_user_id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn event(from: &str, to: &str, event_type: MatchEventType, minute: i64) -> MatchEvent {
        MatchEvent {
            user_id: from.to_string(),
            target_user_id: to.to_string(),
            event_type,
            created_at: Utc.with_ymd_and_hms(2024, 2, 14, 12, 0, 0).unwrap() + Duration::minutes(minute),
        }
    }

    #[test]
    fn test_mutual_like() {
        let events = vec![
            event("alice", "bob", MatchEventType::Liked, 0),
            event("bob", "alice", MatchEventType::Liked, 5),
            event("alice", "carol", MatchEventType::Liked, 1),
            event("carol", "alice", MatchEventType::Passed, 2),
        ];

        assert!(is_mutual_like(&events, "alice", "bob"));
        assert!(is_mutual_like(&events, "bob", "alice"));
        assert!(!is_mutual_like(&events, "alice", "carol"));
    }

    #[test]
    fn test_mutual_matches_newest_first() {
        let events = vec![
            event("alice", "bob", MatchEventType::Liked, 0),
            event("bob", "alice", MatchEventType::Liked, 5),
            event("dave", "alice", MatchEventType::Liked, 1),
            event("alice", "dave", MatchEventType::Liked, 9),
            event("alice", "erin", MatchEventType::Liked, 3),
        ];

        let matches = mutual_matches("alice", &events);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].user2_id, "dave");
        assert_eq!(matches[0].matched_at, events[3].created_at);
        assert_eq!(matches[1].user2_id, "bob");
        assert_eq!(matches[1].matched_at, events[1].created_at);
    }

    #[test]
    fn test_swiped_ignores_views_and_duplicates() {
        let events = vec![
            event("alice", "bob", MatchEventType::Viewed, 0),
            event("alice", "carol", MatchEventType::Passed, 1),
            event("alice", "bob", MatchEventType::Liked, 2),
            event("alice", "carol", MatchEventType::Passed, 3),
            event("bob", "alice", MatchEventType::Liked, 4),
        ];

        assert_eq!(swiped_user_ids("alice", &events), vec!["carol", "bob"]);
    }
}
