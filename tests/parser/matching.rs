//! Object matching tests.
//!
//! Runs the full pipeline over a small world: candidates from the actor and
//! the room, names and aliases, ordinals, and special forms.

use wayfarer_foundation::ObjectRef;
use wayfarer_parser::{MatchOutcome, ObjectMatcher, nearby_objects, searchable_text};
use wayfarer_storage::{MATCH_THRESHOLD_OPTION, World};

struct Smithy {
    world: World,
    room: ObjectRef,
    smith: ObjectRef,
    apprentice: ObjectRef,
    rusty: ObjectRef,
    shiny: ObjectRef,
    hammer: ObjectRef,
}

/// Smithy #0 holds the smith #1 (a wizard), the apprentice #2, a rusty
/// sword #3 and a shiny sword #4. The apprentice carries a hammer #5.
fn smithy() -> Smithy {
    let (world, room) = World::new().create("Smithy");
    let (world, smith) = world.create("Smith");
    let (world, apprentice) = world.create("Apprentice");
    let (world, rusty) = world.create("rusty sword");
    let (world, shiny) = world.create("shiny sword");
    let (world, hammer) = world.create("iron hammer");

    let world = [smith, apprentice, rusty, shiny]
        .into_iter()
        .try_fold(world, |world, obj| world.move_to(obj, room))
        .unwrap();
    let world = world.move_to(hammer, apprentice).unwrap();
    let world = world.set_aliases(rusty, &["blade"]).unwrap();
    let world = world.set_aliases(hammer, &["tool", "Mallet"]).unwrap();
    let world = world.set_privilege(smith, true).unwrap();

    Smithy {
        world,
        room,
        smith,
        apprentice,
        rusty,
        shiny,
        hammer,
    }
}

// =============================================================================
// Candidates
// =============================================================================

#[test]
fn carried_objects_come_first() {
    let s = smithy();
    assert_eq!(
        nearby_objects(&s.world, s.apprentice),
        vec![s.hammer, s.smith, s.apprentice, s.rusty, s.shiny]
    );
}

#[test]
fn aliases_extend_searchable_text() {
    let s = smithy();
    assert_eq!(searchable_text(&s.world, s.rusty), "rusty sword blade");
    assert_eq!(searchable_text(&s.world, s.hammer), "iron hammer tool mallet");
}

// =============================================================================
// Matching
// =============================================================================

#[test]
fn alias_finds_object() {
    let s = smithy();
    let matcher = ObjectMatcher::new(&s.world);
    assert_eq!(matcher.match_object(s.apprentice, "blade"), s.rusty);
    assert_eq!(matcher.match_object(s.apprentice, "MALLET"), s.hammer);
}

#[test]
fn carried_objects_are_only_seen_by_holder() {
    let s = smithy();
    let matcher = ObjectMatcher::new(&s.world);
    assert_eq!(matcher.match_object(s.apprentice, "hammer"), s.hammer);
    assert_eq!(
        matcher.match_object(s.smith, "hammer"),
        ObjectRef::FAILED_MATCH
    );
}

#[test]
fn ordinals_pick_in_candidate_order() {
    let s = smithy();
    let matcher = ObjectMatcher::new(&s.world);
    assert_eq!(matcher.match_object(s.apprentice, "sword"), ObjectRef::AMBIGUOUS);
    assert_eq!(matcher.match_object(s.apprentice, "first sword"), s.rusty);
    assert_eq!(matcher.match_object(s.apprentice, "2.sword"), s.shiny);
    assert_eq!(matcher.match_object(s.apprentice, "2nd sword"), s.shiny);
}

#[test]
fn stricter_threshold_separates_similar_names() {
    let s = smithy();
    let strict = s.world.with_option(MATCH_THRESHOLD_OPTION, 80);
    assert_eq!(
        ObjectMatcher::new(&s.world).match_object(s.apprentice, "rusty sword"),
        ObjectRef::AMBIGUOUS
    );
    assert_eq!(
        ObjectMatcher::new(&strict).match_object(s.apprentice, "rusty sword"),
        s.rusty
    );
}

#[test]
fn special_forms() {
    let s = smithy();
    let matcher = ObjectMatcher::new(&s.world);
    assert_eq!(matcher.match_object(s.apprentice, "me"), s.apprentice);
    assert_eq!(matcher.match_object(s.apprentice, " here "), s.room);
    assert_eq!(matcher.match_object(s.apprentice, ""), ObjectRef::NOTHING);
    assert_eq!(matcher.match_object(s.smith, "#5"), s.hammer);
    assert_eq!(
        matcher.match_object(ObjectRef::new(40), "sword"),
        ObjectRef::FAILED_MATCH
    );
}

#[test]
fn outcomes_mirror_sentinels() {
    let s = smithy();
    let matcher = ObjectMatcher::new(&s.world);
    assert_eq!(
        matcher.match_outcome(s.apprentice, "blade"),
        MatchOutcome::Found(s.rusty)
    );
    assert_eq!(
        matcher.match_outcome(s.apprentice, "sword"),
        MatchOutcome::Ambiguous
    );
    assert_eq!(
        matcher.match_outcome(s.apprentice, "anvil"),
        MatchOutcome::Failed
    );
    assert_eq!(matcher.match_outcome(s.apprentice, "  "), MatchOutcome::Nothing);
}

#[test]
fn token_match_limits_candidates() {
    let s = smithy();
    let matcher = ObjectMatcher::new(&s.world);
    assert_eq!(
        matcher.token_match(s.smith, "sword", &[s.shiny, s.hammer]),
        Some(s.shiny)
    );
    assert_eq!(matcher.token_match(s.smith, "sword", &[s.rusty, s.shiny]), None);
    assert_eq!(matcher.token_match(s.smith, "me", &[s.rusty]), Some(s.smith));
}
