//! Object store interface and in-memory world state for Wayfarer.
//!
//! This crate provides:
//! - [`ObjectStore`] - The read interface the matcher consumes
//! - [`World`] - Immutable object database snapshots with structural sharing
//! - [`ServerOptions`] - Runtime-tunable integer options

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod options;
pub mod record;
pub mod store;
pub mod world;

pub use options::{DEFAULT_MATCH_THRESHOLD, MATCH_THRESHOLD_OPTION, ServerOptions};
pub use record::{ALIASES_ATTRIBUTE, CONTENTS_ATTRIBUTE, ObjectRecord};
pub use store::ObjectStore;
pub use world::World;
