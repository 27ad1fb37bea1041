//! Scoring, ordinal, and resolution tests.

use wayfarer_parser::fuzzy::{partial_ratio, ratio, token_set_ratio, token_sort_ratio};
use wayfarer_parser::{complex_match, parse_ordinal, resolve, score, score_breakdown};

const ROOM: [&str; 4] = ["rusty sword blade", "brass lamp", "shiny sword", "oak chest"];

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn exact_and_contained_text_score_full() {
    assert_eq!(score("brass lamp", "brass lamp"), 100);
    assert_eq!(score("lamp", "brass lamp"), 100);
    assert_eq!(score("lamp brass", "brass lamp"), 100);
}

#[test]
fn unrelated_text_scores_low() {
    assert!(score("xylophone", "oak chest") < 50);
}

#[test]
fn breakdown_components() {
    let breakdown = score_breakdown("lamp", "brass lamp");
    assert!(breakdown.partial_token_sort > 99.9);
    assert!(breakdown.token_set > 99.9);
    assert!(breakdown.ratio < 60.0);
    assert_eq!(breakdown.score, 100);
}

#[test]
fn component_scorers() {
    assert!((ratio("lamp", "lump") - 75.0).abs() < 1e-9);
    assert!((partial_ratio("lamp", "brass lamp") - 100.0).abs() < 1e-9);
    assert!((token_sort_ratio("sword rusty", "rusty sword") - 100.0).abs() < 1e-9);
    assert!(token_set_ratio("", "lamp").abs() < 1e-9);
}

// =============================================================================
// Ordinals
// =============================================================================

#[test]
fn ordinal_words_and_numbers() {
    let cases = [
        ("first", Some(1)),
        ("Seventh", Some(7)),
        ("thirty-third", Some(33)),
        ("4th", Some(4)),
        ("11TH", Some(11)),
        ("sword", None),
        ("0th", None),
    ];
    for (word, expected) in cases {
        assert_eq!(parse_ordinal(word).ordinal, expected, "parse_ordinal({word})");
    }
}

#[test]
fn dotted_ordinal_keeps_remainder() {
    let parsed = parse_ordinal("3.chest");
    assert_eq!(parsed.ordinal, Some(3));
    assert_eq!(parsed.remainder, "chest");
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn hits_in_candidate_order() {
    assert_eq!(complex_match("sword", &ROOM, 70), vec![0, 2]);
    assert_eq!(complex_match("chest", &ROOM, 70), vec![3]);
    assert!(complex_match("anvil", &ROOM, 70).is_empty());
}

#[test]
fn ordinal_selects_one_hit() {
    assert_eq!(complex_match("second sword", &ROOM, 70), vec![2]);
    assert_eq!(complex_match("1.sword", &ROOM, 70), vec![0]);
}

#[test]
fn ordinal_can_be_disabled() {
    let with = resolve("first lamp", &ROOM, 70, true);
    assert_eq!(with, vec![1]);
    assert_eq!(resolve("lamp", &ROOM, 70, false), vec![1]);
}

#[test]
fn threshold_is_clamped() {
    assert_eq!(complex_match("sword", &ROOM, 500), complex_match("sword", &ROOM, 100));
    assert_eq!(complex_match("zzz", &ROOM, -20).len(), ROOM.len());
}

#[test]
fn owned_texts_are_accepted() {
    let texts: Vec<String> = ROOM.iter().map(ToString::to_string).collect();
    assert_eq!(complex_match("blade", &texts, 70), vec![0]);
}
