//! Candidate aggregation.
//!
//! Collects the objects a user could plausibly be talking about: what they
//! carry, then what is around them.

use wayfarer_foundation::{ObjectRef, merge_unique};
use wayfarer_storage::{CONTENTS_ATTRIBUTE, ObjectStore};

/// Returns the objects declared inside `obj`, in stored order.
///
/// Empty when `obj` is invalid or its contents attribute is absent or not a
/// list. Members that are not object references are skipped.
#[must_use]
pub fn contents_of<S: ObjectStore + ?Sized>(store: &S, obj: ObjectRef) -> Vec<ObjectRef> {
    if !store.valid(obj) {
        return Vec::new();
    }
    let Some(contents) = store.read_attribute(obj, CONTENTS_ATTRIBUTE) else {
        return Vec::new();
    };
    if contents.as_seq().is_none() {
        tracing::warn!(%obj, value = %contents, "ignoring malformed contents attribute");
    }
    contents.object_items()
}

/// Returns the anchor's contents followed by its location's contents.
///
/// Each object appears once, at its first position.
#[must_use]
pub fn nearby_objects<S: ObjectStore + ?Sized>(store: &S, anchor: ObjectRef) -> Vec<ObjectRef> {
    let carried = contents_of(store, anchor);
    let location = store.location_of(anchor);
    if store.valid(location) {
        merge_unique(carried, contents_of(store, location))
    } else {
        carried
    }
}
