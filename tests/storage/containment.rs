//! Integration tests for locations and contents

use wayfarer_foundation::{ErrorKind, ObjectRef, SharedValue};
use wayfarer_storage::{CONTENTS_ATTRIBUTE, ObjectStore, World};

fn room_with_chest() -> (World, ObjectRef, ObjectRef, ObjectRef) {
    let (world, room) = World::new().create("Cellar");
    let (world, chest) = world.create("chest");
    let (world, coin) = world.create("coin");
    let world = world.move_to(chest, room).unwrap();
    let world = world.move_to(coin, chest).unwrap();
    (world, room, chest, coin)
}

#[test]
fn move_updates_both_sides() {
    let (world, room, chest, coin) = room_with_chest();
    assert_eq!(world.location_of(coin), chest);
    assert_eq!(world.contents(chest), vec![coin]);

    let world = world.move_to(coin, room).unwrap();
    assert_eq!(world.location_of(coin), room);
    assert!(world.contents(chest).is_empty());
    assert_eq!(world.contents(room), vec![chest, coin]);
}

#[test]
fn contents_is_an_attribute() {
    let (world, room, chest, _) = room_with_chest();
    assert_eq!(
        world.read_attribute(room, CONTENTS_ATTRIBUTE),
        Some(SharedValue::from(vec![chest]))
    );
}

#[test]
fn moving_to_nothing_removes_from_container() {
    let (world, _, chest, coin) = room_with_chest();
    let world = world.move_to(coin, ObjectRef::NOTHING).unwrap();
    assert_eq!(world.location_of(coin), ObjectRef::NOTHING);
    assert!(world.contents(chest).is_empty());
}

#[test]
fn cycles_are_rejected() {
    let (world, room, chest, _) = room_with_chest();
    let err = world.move_to(room, chest).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Recursion { .. }));
    assert!(world.move_to(chest, chest).is_err());
    assert!(world.is_within(chest, room));
    assert!(!world.is_within(room, chest));
}

#[test]
fn moving_in_place_keeps_order() {
    let (world, room, chest, coin) = room_with_chest();
    let world = world.move_to(coin, room).unwrap();
    let world = world.move_to(chest, room).unwrap();
    assert_eq!(world.contents(room), vec![chest, coin]);
}

#[test]
fn destroy_orphans_children() {
    let (world, room, chest, coin) = room_with_chest();
    let world = world.destroy(chest).unwrap();
    assert!(!world.valid(chest));
    assert!(world.contents(room).is_empty());
    assert_eq!(world.location_of(coin), ObjectRef::NOTHING);
    assert!(world.destroy(chest).is_err());
}
