//! World state management with immutable snapshots.
//!
//! The `World` is an in-memory object database. It uses persistent data
//! structures for O(1) cloning and structural sharing, so a matcher can read
//! one snapshot while a newer world is being built.

use std::sync::Arc;

use wayfarer_foundation::{Error, ObjectRef, Result, SharedValue};

use crate::options::ServerOptions;
use crate::record::{ALIASES_ATTRIBUTE, CONTENTS_ATTRIBUTE, ObjectRecord};
use crate::store::ObjectStore;

/// Immutable snapshot of the object database.
///
/// Clone is O(1). All mutation methods return a new `World` instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    /// Live objects by id.
    objects: im::OrdMap<ObjectRef, ObjectRecord>,
    /// Server options.
    options: ServerOptions,
    /// Id handed out by the next `create`.
    next_id: i64,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live objects.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Checks if an object exists.
    #[must_use]
    pub fn exists(&self, obj: ObjectRef) -> bool {
        self.objects.contains_key(&obj)
    }

    /// Iterates live object ids in ascending order.
    pub fn objects(&self) -> impl Iterator<Item = ObjectRef> + '_ {
        self.objects.keys().copied()
    }

    /// Returns the record of an object.
    #[must_use]
    pub fn record(&self, obj: ObjectRef) -> Option<&ObjectRecord> {
        self.objects.get(&obj)
    }

    /// Returns the objects listed in `obj`'s contents attribute.
    #[must_use]
    pub fn contents(&self, obj: ObjectRef) -> Vec<ObjectRef> {
        self.record(obj)
            .and_then(|record| record.attribute(CONTENTS_ATTRIBUTE))
            .map(SharedValue::object_items)
            .unwrap_or_default()
    }

    // --- Options ---

    /// Returns the server options.
    #[must_use]
    pub fn options(&self) -> &ServerOptions {
        &self.options
    }

    /// Returns a new World with an option set.
    #[must_use]
    pub fn with_option(&self, name: &str, value: i64) -> World {
        World {
            options: self.options.with(name, value),
            ..self.clone()
        }
    }

    /// Returns a new World with its options replaced.
    #[must_use]
    pub fn with_options(&self, options: ServerOptions) -> World {
        World {
            options,
            ..self.clone()
        }
    }

    // --- Object Lifecycle ---

    /// Creates an object at the next free id.
    ///
    /// Returns a new World and the created object.
    #[must_use]
    pub fn create(&self, name: impl Into<Arc<str>>) -> (World, ObjectRef) {
        let obj = ObjectRef::new(self.next_id);
        let world = World {
            objects: self.objects.update(obj, ObjectRecord::new(name)),
            options: self.options.clone(),
            next_id: self.next_id.saturating_add(1),
        };
        (world, obj)
    }

    /// Creates an object with an explicit id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is negative (reserved) or already taken.
    pub fn create_at(&self, obj: ObjectRef, name: impl Into<Arc<str>>) -> Result<World> {
        if obj.id() < 0 {
            return Err(Error::invalid_object(obj));
        }
        if self.exists(obj) {
            return Err(Error::duplicate_object(obj));
        }
        Ok(World {
            objects: self.objects.update(obj, ObjectRecord::new(name)),
            options: self.options.clone(),
            next_id: self.next_id.max(obj.id().saturating_add(1)),
        })
    }

    /// Destroys an object.
    ///
    /// The object leaves its container's contents, and everything it held
    /// is left without a location.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    pub fn destroy(&self, obj: ObjectRef) -> Result<World> {
        let record = self.objects.get(&obj).ok_or_else(|| Error::invalid_object(obj))?;

        let mut objects = self.objects.clone();
        if let Some(container) = objects.get_mut(&record.location) {
            remove_from_contents(container, obj);
        }

        let orphans: Vec<ObjectRef> = self
            .objects
            .iter()
            .filter(|(_, child)| child.location == obj)
            .map(|(id, _)| *id)
            .collect();
        for orphan in orphans {
            if let Some(child) = objects.get_mut(&orphan) {
                child.location = ObjectRef::NOTHING;
            }
        }

        objects.remove(&obj);

        Ok(World {
            objects,
            ..self.clone()
        })
    }

    // --- Containment ---

    /// Moves an object into `destination` (`NOTHING` for nowhere).
    ///
    /// The contents attributes of the old and new containers are kept in
    /// step: the object is removed from the old list and appended to the new.
    ///
    /// # Errors
    ///
    /// Returns an error if either object does not exist, or if the move
    /// would put the object inside itself.
    pub fn move_to(&self, obj: ObjectRef, destination: ObjectRef) -> Result<World> {
        let record = self.objects.get(&obj).ok_or_else(|| Error::invalid_object(obj))?;

        if destination != ObjectRef::NOTHING {
            if !self.exists(destination) {
                return Err(Error::invalid_object(destination));
            }
            if self.is_within(destination, obj) {
                return Err(Error::recursion(obj, destination));
            }
        }

        if record.location == destination {
            return Ok(self.clone());
        }

        let mut objects = self.objects.clone();
        if let Some(container) = objects.get_mut(&record.location) {
            remove_from_contents(container, obj);
        }
        if let Some(container) = objects.get_mut(&destination) {
            add_to_contents(container, obj);
        }
        if let Some(moved) = objects.get_mut(&obj) {
            moved.location = destination;
        }

        Ok(World {
            objects,
            ..self.clone()
        })
    }

    /// Returns true if `obj` is `ancestor` or sits somewhere inside it.
    #[must_use]
    pub fn is_within(&self, obj: ObjectRef, ancestor: ObjectRef) -> bool {
        let mut current = obj;
        // Bounded walk: a well-formed world has no containment cycles.
        for _ in 0..=self.objects.len() {
            if current == ancestor {
                return true;
            }
            match self.objects.get(&current) {
                Some(record) => current = record.location,
                None => return false,
            }
        }
        false
    }

    // --- Properties ---

    /// Renames an object.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    pub fn set_name(&self, obj: ObjectRef, name: impl Into<Arc<str>>) -> Result<World> {
        self.update_record(obj, |record| record.name = name.into())
    }

    /// Grants or revokes administrative privilege.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    pub fn set_privilege(&self, obj: ObjectRef, privileged: bool) -> Result<World> {
        self.update_record(obj, |record| record.privileged = privileged)
    }

    /// Sets a named attribute.
    ///
    /// Any value is accepted, including shapes readers will ignore.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    pub fn set_attribute(
        &self,
        obj: ObjectRef,
        name: &str,
        value: impl Into<SharedValue>,
    ) -> Result<World> {
        let value = value.into();
        self.update_record(obj, |record| {
            record.attributes.insert(Arc::from(name), value);
        })
    }

    /// Removes a named attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    pub fn remove_attribute(&self, obj: ObjectRef, name: &str) -> Result<World> {
        self.update_record(obj, |record| {
            record.attributes.remove(name);
        })
    }

    /// Sets the aliases attribute to a list of strings.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    pub fn set_aliases<S: AsRef<str>>(&self, obj: ObjectRef, aliases: &[S]) -> Result<World> {
        let value: SharedValue = aliases.iter().map(AsRef::as_ref).collect();
        self.set_attribute(obj, ALIASES_ATTRIBUTE, value)
    }

    fn update_record(&self, obj: ObjectRef, f: impl FnOnce(&mut ObjectRecord)) -> Result<World> {
        let mut objects = self.objects.clone();
        let record = objects
            .get_mut(&obj)
            .ok_or_else(|| Error::invalid_object(obj))?;
        f(record);
        Ok(World {
            objects,
            ..self.clone()
        })
    }
}

fn remove_from_contents(container: &mut ObjectRecord, obj: ObjectRef) {
    if let Some(contents) = container.attributes.get_mut(CONTENTS_ATTRIBUTE) {
        contents.seq_remove(&SharedValue::Obj(obj));
    }
}

fn add_to_contents(container: &mut ObjectRecord, obj: ObjectRef) {
    let pushed = container
        .attributes
        .get_mut(CONTENTS_ATTRIBUTE)
        .is_some_and(|contents| contents.seq_push(SharedValue::Obj(obj)));
    if pushed {
        return;
    }
    if let Some(malformed) = container.attributes.get(CONTENTS_ATTRIBUTE) {
        tracing::warn!(
            container = %container.name,
            value = %malformed,
            "replacing malformed contents attribute"
        );
    }
    container.attributes.insert(
        Arc::from(CONTENTS_ATTRIBUTE),
        SharedValue::from(vec![obj]),
    );
}

impl ObjectStore for World {
    fn valid(&self, obj: ObjectRef) -> bool {
        self.exists(obj)
    }

    fn location_of(&self, obj: ObjectRef) -> ObjectRef {
        self.record(obj)
            .map_or(ObjectRef::NOTHING, |record| record.location)
    }

    fn object_name(&self, obj: ObjectRef) -> Option<Arc<str>> {
        self.record(obj).map(|record| Arc::clone(&record.name))
    }

    fn read_attribute(&self, obj: ObjectRef, name: &str) -> Option<SharedValue> {
        self.record(obj)?.attribute(name).cloned()
    }

    fn has_privilege(&self, actor: ObjectRef) -> bool {
        self.record(actor).is_some_and(|record| record.privileged)
    }

    fn configured_threshold(&self, name: &str, default: i64) -> i64 {
        self.options.configured_threshold(name, default)
    }
}
