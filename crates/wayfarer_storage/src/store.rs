//! The read interface between the matcher and the object database.

use std::sync::Arc;

use wayfarer_foundation::{ObjectRef, SharedValue};

/// Read access to the object database and host server.
///
/// Every method is a snapshot read. Missing data is reported as `None`,
/// `NOTHING`, or `false`, never as an error: matching treats absent or
/// malformed data as "no data".
pub trait ObjectStore {
    /// Returns true if `obj` names a live object.
    fn valid(&self, obj: ObjectRef) -> bool;

    /// Returns the container of `obj`, or `NOTHING` if it has none or is invalid.
    fn location_of(&self, obj: ObjectRef) -> ObjectRef;

    /// Returns the display name of `obj`.
    fn object_name(&self, obj: ObjectRef) -> Option<Arc<str>>;

    /// Reads a named attribute of `obj`.
    fn read_attribute(&self, obj: ObjectRef, name: &str) -> Option<SharedValue>;

    /// Returns true if `actor` holds administrative privilege.
    fn has_privilege(&self, actor: ObjectRef) -> bool;

    /// Reads an integer server option, falling back to `default`.
    fn configured_threshold(&self, name: &str, default: i64) -> i64;
}

impl<T: ObjectStore + ?Sized> ObjectStore for &T {
    fn valid(&self, obj: ObjectRef) -> bool {
        (**self).valid(obj)
    }

    fn location_of(&self, obj: ObjectRef) -> ObjectRef {
        (**self).location_of(obj)
    }

    fn object_name(&self, obj: ObjectRef) -> Option<Arc<str>> {
        (**self).object_name(obj)
    }

    fn read_attribute(&self, obj: ObjectRef, name: &str) -> Option<SharedValue> {
        (**self).read_attribute(obj, name)
    }

    fn has_privilege(&self, actor: ObjectRef) -> bool {
        (**self).has_privilege(actor)
    }

    fn configured_threshold(&self, name: &str, default: i64) -> i64 {
        (**self).configured_threshold(name, default)
    }
}
