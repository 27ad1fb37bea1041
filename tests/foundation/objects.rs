//! Integration tests for ObjectRef and its sentinels

use std::collections::HashSet;

use wayfarer_foundation::{ObjectRef, Sentinel};

#[test]
fn sentinels_have_fixed_ids() {
    assert_eq!(ObjectRef::NOTHING.id(), -1);
    assert_eq!(ObjectRef::AMBIGUOUS.id(), -2);
    assert_eq!(ObjectRef::FAILED_MATCH.id(), -3);
}

#[test]
fn sentinel_classification() {
    assert_eq!(ObjectRef::NOTHING.sentinel(), Some(Sentinel::Nothing));
    assert_eq!(ObjectRef::AMBIGUOUS.sentinel(), Some(Sentinel::Ambiguous));
    assert_eq!(ObjectRef::FAILED_MATCH.sentinel(), Some(Sentinel::FailedMatch));
    assert_eq!(ObjectRef::new(0).sentinel(), None);
    assert!(!ObjectRef::new(12).is_sentinel());
}

#[test]
fn display_and_parse() {
    let obj = ObjectRef::new(42);
    assert_eq!(obj.to_string(), "#42");
    assert_eq!("#42".parse::<ObjectRef>().unwrap(), obj);
    assert_eq!("42".parse::<ObjectRef>().unwrap(), obj);
    assert!("#forty".parse::<ObjectRef>().is_err());
}

#[test]
fn usable_as_set_member() {
    let set: HashSet<ObjectRef> = [1, 2, 2, 3].into_iter().map(ObjectRef::new).collect();
    assert_eq!(set.len(), 3);
}
