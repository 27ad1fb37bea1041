//! Integration tests for SharedValue and the text helpers

use wayfarer_foundation::{
    ObjectRef, SharedValue, join_tokens, lowercase_tokens, merge_unique, tokenize,
};

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn clones_share_composite_payloads() {
    let names = SharedValue::from(vec!["blade", "weapon"]);
    let copy = names.clone();
    assert_eq!(names.share_count(), 2);
    assert_eq!(copy, names);
}

#[test]
fn mutation_detaches_from_other_holders() {
    let original = SharedValue::from(vec![ObjectRef::new(1)]);
    let mut edited = original.clone();
    assert!(edited.seq_push(ObjectRef::new(2).into()));

    assert_eq!(original.object_items(), vec![ObjectRef::new(1)]);
    assert_eq!(edited.object_items(), vec![ObjectRef::new(1), ObjectRef::new(2)]);
    assert_eq!(original.share_count(), 1);
}

#[test]
fn seq_remove_counts_every_copy() {
    let mut contents: SharedValue = [1, 2, 1].into_iter().map(ObjectRef::new).collect();
    assert_eq!(contents.seq_remove(&ObjectRef::new(1).into()), 2);
    assert_eq!(contents.object_items(), vec![ObjectRef::new(2)]);
    assert_eq!(contents.seq_remove(&ObjectRef::new(9).into()), 0);
}

#[test]
fn non_sequences_reject_sequence_edits() {
    let mut name = SharedValue::from("lamp");
    assert!(!name.seq_push(SharedValue::Int(1)));
    assert_eq!(name.seq_remove(&SharedValue::Int(1)), 0);
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn string_items_skip_other_members() {
    let mixed = SharedValue::from(vec![
        SharedValue::from("blade"),
        SharedValue::Int(3),
        SharedValue::from("weapon"),
    ]);
    assert_eq!(mixed.string_items(), vec!["blade", "weapon"]);
    assert_eq!(SharedValue::from("lamp").string_items(), vec!["lamp"]);
    assert!(SharedValue::Int(4).string_items().is_empty());
}

#[test]
fn display_uses_braces_for_sequences() {
    let value = SharedValue::from(vec![
        SharedValue::Int(1),
        SharedValue::from("two"),
        ObjectRef::new(3).into(),
    ]);
    assert_eq!(value.to_string(), "{1, \"two\", #3}");
}

// =============================================================================
// Text Helpers
// =============================================================================

#[test]
fn tokens_round_trip_through_join() {
    let tokens = lowercase_tokens("  The RUSTY   Sword ");
    assert_eq!(tokens, vec!["the", "rusty", "sword"]);
    assert_eq!(join_tokens(&tokens), "the rusty sword");
    assert_eq!(tokenize("a\tb\nc").len(), 3);
}

#[test]
fn merge_unique_keeps_first_seen_order() {
    let merged = merge_unique(vec![3, 1, 3], vec![2, 1, 4]);
    assert_eq!(merged, vec![3, 1, 2, 4]);
}
