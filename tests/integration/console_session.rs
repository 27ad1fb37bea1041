//! Console sessions driven over a world file.

use wayfarer_foundation::{ErrorKind, ObjectRef};
use wayfarer_runtime::world_file::parse_world_toml;
use wayfarer_runtime::{Reply, Session};

use crate::world_files::TAVERN;

fn text(reply: Reply) -> String {
    match reply {
        Reply::Text(text) => text,
        Reply::Quit => panic!("unexpected quit"),
    }
}

fn tavern_session() -> Session {
    Session::new(parse_world_toml(TAVERN).unwrap())
}

#[test]
fn session_starts_as_the_wizard() {
    let session = tavern_session();
    assert_eq!(session.actor(), ObjectRef::new(1));
}

#[test]
fn wizard_reaches_objects_by_id() {
    let mut session = tavern_session();
    assert_eq!(text(session.execute("#5").unwrap()), "#5 (copper coin)");
    assert_eq!(text(session.execute("match coin").unwrap()), "no match (#-3)");
}

#[test]
fn switching_actor_changes_what_is_in_reach() {
    let mut session = tavern_session();
    session.execute("as #2").unwrap();
    assert_eq!(text(session.execute("coin").unwrap()), "#5 (copper coin)");
    assert_eq!(text(session.execute("#5").unwrap()), "no match (#-3)");
}

#[test]
fn threshold_changes_take_effect() {
    let mut session = tavern_session();
    session.execute("as #2").unwrap();
    assert_eq!(text(session.execute("mug").unwrap()), "ambiguous (#-2)");
    assert_eq!(text(session.execute("threshold").unwrap()), "threshold is 75");
    session.execute("threshold 0").unwrap();
    assert_eq!(text(session.execute("copper coin").unwrap()), "ambiguous (#-2)");
}

#[test]
fn rejected_commands_leave_state_alone() {
    let mut session = tavern_session();
    let err = session.execute("threshold 101").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidOption { .. }));
    assert_eq!(text(session.execute("threshold").unwrap()), "threshold is 75");
}
