//! Hand-written world descriptions in TOML.
//!
//! ```toml
//! [options]
//! match_threshold = 70
//!
//! [[object]]
//! id = 0
//! name = "Armory"
//!
//! [[object]]
//! id = 1
//! name = "Player"
//! location = 0
//! wizard = true
//!
//! [[object]]
//! id = 2
//! name = "rusty sword"
//! location = 0
//! aliases = ["blade", "weapon"]
//!
//! [object.attributes]
//! weight = 12
//! owner = "#1"
//! ```
//!
//! Objects are placed in file order, so a container's contents list follows
//! the order its objects appear. Attribute strings of the form `#<id>` become
//! object references.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use wayfarer_foundation::{Error, ErrorKind, ObjectRef, Result, SharedValue};
use wayfarer_storage::{ALIASES_ATTRIBUTE, ServerOptions, World};

use crate::serialize::io_error;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct WorldFile {
    #[serde(default)]
    options: BTreeMap<String, i64>,
    #[serde(default, rename = "object")]
    objects: Vec<ObjectEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ObjectEntry {
    id: i64,
    name: String,
    #[serde(default)]
    location: Option<i64>,
    #[serde(default)]
    aliases: Option<Aliases>,
    #[serde(default)]
    wizard: bool,
    #[serde(default)]
    attributes: BTreeMap<String, toml::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Aliases {
    One(String),
    Many(Vec<String>),
}

/// Builds a world from TOML text.
///
/// # Errors
///
/// Returns an error if the text does not parse, an id is negative or
/// repeated, a location names a missing object or a cycle, or an attribute
/// has a type with no [`SharedValue`] counterpart.
pub fn parse_world_toml(text: &str) -> Result<World> {
    let file: WorldFile =
        toml::from_str(text).map_err(|e| Error::new(ErrorKind::Config(e.to_string())))?;
    build_world(&file)
}

/// Reads and builds a world file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not describe a
/// valid world.
pub fn load_world_toml<P: AsRef<Path>>(path: P) -> Result<World> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| io_error("read", path, &e))?;
    let world = parse_world_toml(&text).map_err(|e| e.with_context(path.display().to_string()))?;
    tracing::debug!(
        path = %path.display(),
        objects = world.object_count(),
        "loaded world file"
    );
    Ok(world)
}

fn build_world(file: &WorldFile) -> Result<World> {
    let options = file
        .options
        .iter()
        .fold(ServerOptions::new(), |options, (name, value)| {
            options.with(name, *value)
        });
    let mut world = World::new().with_options(options);

    for entry in &file.objects {
        let obj = ObjectRef::new(entry.id);
        world = describe(&world, obj, entry).map_err(|e| e.with_context(format!("object {obj}")))?;
    }

    // Placement runs once every object exists, so locations may point forward.
    for entry in &file.objects {
        if let Some(location) = entry.location {
            let obj = ObjectRef::new(entry.id);
            world = world
                .move_to(obj, ObjectRef::new(location))
                .map_err(|e| e.with_context(format!("location of object {obj}")))?;
        }
    }

    Ok(world)
}

fn describe(world: &World, obj: ObjectRef, entry: &ObjectEntry) -> Result<World> {
    let mut world = world.create_at(obj, entry.name.as_str())?;

    for (name, value) in &entry.attributes {
        let value = attribute_value(value).map_err(|e| e.with_context(format!("attribute {name}")))?;
        world = world.set_attribute(obj, name, value)?;
    }

    match &entry.aliases {
        Some(Aliases::One(alias)) => {
            world = world.set_attribute(obj, ALIASES_ATTRIBUTE, alias.as_str())?;
        }
        Some(Aliases::Many(aliases)) => world = world.set_aliases(obj, aliases)?,
        None => {}
    }

    if entry.wizard {
        world = world.set_privilege(obj, true)?;
    }
    Ok(world)
}

fn attribute_value(value: &toml::Value) -> Result<SharedValue> {
    match value {
        toml::Value::Integer(n) => Ok(SharedValue::Int(*n)),
        toml::Value::Boolean(b) => Ok(SharedValue::Int(i64::from(*b))),
        toml::Value::String(s) => Ok(s
            .strip_prefix('#')
            .and_then(|digits| digits.parse::<i64>().ok())
            .map_or_else(|| SharedValue::from(s.as_str()), |id| ObjectRef::new(id).into())),
        toml::Value::Array(items) => items.iter().map(attribute_value).collect(),
        other => Err(Error::new(ErrorKind::Config(format!(
            "unsupported attribute type: {}",
            other.type_str()
        )))),
    }
}
