//! Event-type taxonomy and category classification.
//!
//! The provider describes events with free-text event-type tokens. This
//! module owns the closed set of tokens the system recognizes and maps each
//! of them to a [`Category`]. The lookup table is built once and is
//! read-only afterwards.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::Category;

/// Provider event-type tokens recognized by this system, in fan-out order.
pub const EVENT_TYPES: [&str; 16] = [
    "running_race",
    "virtual_race",
    "running_only",
    "trail_race",
    "ultra",
    "open_course_trail",
    "walking_only",
    "race_walk",
    "obstacle_course",
    "bike_race",
    "bike_ride",
    "swim",
    "aqua_bike",
    "duathlon",
    "swim_run",
    "triathlon",
];

lazy_static! {
    static ref EVENT_TYPE_TO_CATEGORY: HashMap<&'static str, Category> = {
        let mut m = HashMap::with_capacity(EVENT_TYPES.len());
        m.insert("running_race", Category::Runs);
        m.insert("virtual_race", Category::Runs);
        m.insert("running_only", Category::Runs);
        m.insert("trail_race", Category::Runs);
        m.insert("ultra", Category::Runs);
        m.insert("open_course_trail", Category::Runs);
        m.insert("walking_only", Category::Walks);
        m.insert("race_walk", Category::Walks);
        m.insert("obstacle_course", Category::Obstacle);
        m.insert("bike_race", Category::Bike);
        m.insert("bike_ride", Category::Bike);
        m.insert("swim", Category::Swim);
        // Multisport formats without a dedicated category.
        m.insert("aqua_bike", Category::Other);
        m.insert("duathlon", Category::Other);
        m.insert("swim_run", Category::Other);
        m.insert("triathlon", Category::Triathlon);
        m
    };
}

fn normalize_token(token: &str) -> String {
    token.trim().to_ascii_lowercase()
}

/// Map a provider event-type token to its category.
///
/// Total: empty or unrecognized tokens resolve to [`Category::Other`].
pub fn classify(token: &str) -> Category {
    EVENT_TYPE_TO_CATEGORY
        .get(normalize_token(token).as_str())
        .copied()
        .unwrap_or(Category::Other)
}

/// Whether `token` is part of the recognized taxonomy.
pub fn is_valid_event_type(token: &str) -> bool {
    EVENT_TYPE_TO_CATEGORY.contains_key(normalize_token(token).as_str())
}

/// Canonical form of a recognized token, if any.
pub(crate) fn canonical_event_type(token: &str) -> Option<&'static str> {
    let normalized = normalize_token(token);
    EVENT_TYPES.iter().copied().find(|t| *t == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_token_has_a_mapping() {
        assert_eq!(EVENT_TYPE_TO_CATEGORY.len(), EVENT_TYPES.len());
        for token in EVENT_TYPES {
            assert!(is_valid_event_type(token), "{} missing from table", token);
        }
    }

    #[test]
    fn test_known_tokens() {
        assert_eq!(classify("triathlon"), Category::Triathlon);
        assert_eq!(classify("running_race"), Category::Runs);
        assert_eq!(classify("open_course_trail"), Category::Runs);
        assert_eq!(classify("race_walk"), Category::Walks);
        assert_eq!(classify("obstacle_course"), Category::Obstacle);
        assert_eq!(classify("bike_ride"), Category::Bike);
        assert_eq!(classify("swim"), Category::Swim);
        assert_eq!(classify("duathlon"), Category::Other);
    }

    #[test]
    fn test_unknown_and_empty_tokens_fall_back_to_other() {
        assert_eq!(classify("zorb_race"), Category::Other);
        assert_eq!(classify(""), Category::Other);
        assert_eq!(classify("   "), Category::Other);
        assert!(!is_valid_event_type("zorb_race"));
    }

    #[test]
    fn test_tokens_are_matched_case_insensitively() {
        assert_eq!(classify(" Trail_Race "), Category::Runs);
        assert_eq!(canonical_event_type("SWIM"), Some("swim"));
        assert_eq!(canonical_event_type("bogus"), None);
    }

    #[test]
    fn test_every_category_is_reachable() {
        for category in Category::ALL {
            assert!(
                EVENT_TYPES.iter().any(|t| classify(t) == category),
                "{} is unreachable",
                category
            );
        }
    }
}
