//! Wayfarer - Object-name matching for multi-user virtual environments
//!
//! This crate re-exports all layers of the Wayfarer system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: wayfarer_runtime      Console, CLI, world files, snapshots
//! Layer 2: wayfarer_parser       Candidates, fuzzy scoring, ordinals, inflection
//! Layer 1: wayfarer_storage      Object store interface, World, server options
//! Layer 0: wayfarer_foundation   Core types (ObjectRef, SharedValue, Error)
//! ```

pub use wayfarer_foundation as foundation;
pub use wayfarer_parser as parser;
pub use wayfarer_runtime as runtime;
pub use wayfarer_storage as storage;
