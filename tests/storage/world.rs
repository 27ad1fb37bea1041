//! Integration tests for World object lifecycle and attributes

use wayfarer_foundation::{ErrorKind, ObjectRef, SharedValue};
use wayfarer_storage::{ALIASES_ATTRIBUTE, ObjectStore, World};

// =============================================================================
// Creation
// =============================================================================

#[test]
fn create_hands_out_sequential_ids() {
    let (world, a) = World::new().create("a");
    let (world, b) = world.create("b");
    assert_eq!(a, ObjectRef::new(0));
    assert_eq!(b, ObjectRef::new(1));
    assert_eq!(world.object_count(), 2);
}

#[test]
fn create_at_skips_ahead() {
    let world = World::new().create_at(ObjectRef::new(10), "vault").unwrap();
    let (_, next) = world.create("coin");
    assert_eq!(next, ObjectRef::new(11));
}

#[test]
fn create_at_rejects_taken_and_negative_ids() {
    let world = World::new().create_at(ObjectRef::new(2), "vault").unwrap();
    let err = world.create_at(ObjectRef::new(2), "again").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateObject(_)));
    assert!(world.create_at(ObjectRef::NOTHING, "ghost").is_err());
}

#[test]
fn snapshots_are_independent() {
    let (before, lamp) = World::new().create("lamp");
    let after = before.set_name(lamp, "brass lamp").unwrap();
    assert_eq!(before.object_name(lamp).as_deref(), Some("lamp"));
    assert_eq!(after.object_name(lamp).as_deref(), Some("brass lamp"));
}

// =============================================================================
// Attributes
// =============================================================================

#[test]
fn attributes_set_and_remove() {
    let (world, lamp) = World::new().create("lamp");
    let world = world.set_attribute(lamp, "weight", 3_i64).unwrap();
    assert_eq!(world.read_attribute(lamp, "weight"), Some(SharedValue::Int(3)));

    let world = world.remove_attribute(lamp, "weight").unwrap();
    assert_eq!(world.read_attribute(lamp, "weight"), None);
}

#[test]
fn aliases_are_stored_as_a_list() {
    let (world, sword) = World::new().create("sword");
    let world = world.set_aliases(sword, &["blade", "weapon"]).unwrap();
    assert_eq!(
        world.read_attribute(sword, ALIASES_ATTRIBUTE),
        Some(SharedValue::from(vec!["blade", "weapon"]))
    );
}

#[test]
fn edits_to_missing_objects_fail() {
    let world = World::new();
    let ghost = ObjectRef::new(5);
    assert!(world.set_name(ghost, "x").is_err());
    assert!(world.set_privilege(ghost, true).is_err());
    assert!(world.set_attribute(ghost, "a", 1_i64).is_err());
}

// =============================================================================
// ObjectStore Reads
// =============================================================================

#[test]
fn reads_of_invalid_objects_are_empty() {
    let world = World::new();
    let ghost = ObjectRef::new(0);
    assert!(!world.valid(ghost));
    assert!(!world.valid(ObjectRef::NOTHING));
    assert_eq!(world.location_of(ghost), ObjectRef::NOTHING);
    assert_eq!(world.object_name(ghost), None);
    assert_eq!(world.read_attribute(ghost, "contents"), None);
    assert!(!world.has_privilege(ghost));
}

#[test]
fn privilege_flag() {
    let (world, wizard) = World::new().create("Wizard");
    assert!(!world.has_privilege(wizard));
    let world = world.set_privilege(wizard, true).unwrap();
    assert!(world.has_privilege(wizard));
}

#[test]
fn store_reads_through_a_reference() {
    fn name_of<S: ObjectStore>(store: S, obj: ObjectRef) -> Option<String> {
        store.object_name(obj).map(|name| name.to_string())
    }
    let (world, lamp) = World::new().create("lamp");
    assert_eq!(name_of(&world, lamp).as_deref(), Some("lamp"));
}
