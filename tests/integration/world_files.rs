//! World file to matcher, and snapshot round trips.

use wayfarer_foundation::ObjectRef;
use wayfarer_parser::ObjectMatcher;
use wayfarer_runtime::serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
use wayfarer_runtime::session::load_world;
use wayfarer_runtime::world_file::parse_world_toml;
use wayfarer_storage::{MATCH_THRESHOLD_OPTION, ObjectStore};

pub const TAVERN: &str = r#"
[options]
match_threshold = 75

[[object]]
id = 0
name = "Tavern"

[[object]]
id = 1
name = "Innkeeper"
location = 0
wizard = true

[[object]]
id = 2
name = "Traveller"
location = 0

[[object]]
id = 3
name = "pewter mug"
location = 0
aliases = ["tankard", "cup"]

[[object]]
id = 4
name = "clay mug"
location = 0

[[object]]
id = 5
name = "copper coin"
location = 2
aliases = "money"
"#;

#[test]
fn world_file_feeds_the_matcher() {
    let world = parse_world_toml(TAVERN).unwrap();
    let matcher = ObjectMatcher::new(&world);
    let traveller = ObjectRef::new(2);

    assert_eq!(matcher.match_object(traveller, "tankard"), ObjectRef::new(3));
    assert_eq!(matcher.match_object(traveller, "money"), ObjectRef::new(5));
    assert_eq!(matcher.match_object(traveller, "mug"), ObjectRef::AMBIGUOUS);
    assert_eq!(matcher.match_object(traveller, "second mug"), ObjectRef::new(4));
    assert_eq!(matcher.match_object(traveller, "here"), ObjectRef::new(0));
}

#[test]
fn threshold_option_comes_from_the_file() {
    let world = parse_world_toml(TAVERN).unwrap();
    assert_eq!(world.configured_threshold(MATCH_THRESHOLD_OPTION, 70), 75);
}

#[test]
fn snapshot_preserves_matching() {
    let world = parse_world_toml(TAVERN).unwrap();
    let restored = from_bytes(&to_bytes(&world).unwrap()).unwrap();
    assert_eq!(restored, world);

    let traveller = ObjectRef::new(2);
    for query in ["tankard", "mug", "second mug", "coin", "me"] {
        assert_eq!(
            ObjectMatcher::new(&restored).match_object(traveller, query),
            ObjectMatcher::new(&world).match_object(traveller, query),
            "query {query}"
        );
    }
}

#[test]
fn load_world_picks_format_by_extension() {
    let dir = std::env::temp_dir();
    let toml_path = dir.join("wayfarer_integration_tavern.toml");
    let snapshot_path = dir.join("wayfarer_integration_tavern.msgpack");

    std::fs::write(&toml_path, TAVERN).unwrap();
    let from_toml = load_world(&toml_path).unwrap();
    save_to_file(&from_toml, &snapshot_path).unwrap();
    let from_snapshot = load_world(&snapshot_path).unwrap();

    assert_eq!(from_snapshot, from_toml);
    assert_eq!(load_from_file(&snapshot_path).unwrap(), from_toml);

    let _ = std::fs::remove_file(&toml_path);
    let _ = std::fs::remove_file(&snapshot_path);
}
