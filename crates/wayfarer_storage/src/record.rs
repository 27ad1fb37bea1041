//! Per-object data held by the world.

use std::sync::Arc;

use wayfarer_foundation::{ObjectRef, SharedValue};

/// Attribute listing the objects inside a container, as a `Seq` of `Obj`.
pub const CONTENTS_ATTRIBUTE: &str = "contents";

/// Attribute holding an object's alternative names: a string or a `Seq` of strings.
pub const ALIASES_ATTRIBUTE: &str = "aliases";

/// A single object: name, container, privilege flag, and named attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectRecord {
    /// Display name.
    pub name: Arc<str>,
    /// Containing object, or `NOTHING`.
    pub location: ObjectRef,
    /// Administrative ("wizard") privilege.
    pub privileged: bool,
    /// Named attributes.
    pub attributes: im::OrdMap<Arc<str>, SharedValue>,
}

impl ObjectRecord {
    /// Creates a record with an empty contents list and no location.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            location: ObjectRef::NOTHING,
            privileged: false,
            attributes: im::OrdMap::unit(Arc::from(CONTENTS_ATTRIBUTE), SharedValue::empty_seq()),
        }
    }

    /// Reads an attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&SharedValue> {
        self.attributes.get(name)
    }
}
