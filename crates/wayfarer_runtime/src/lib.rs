//! Console, CLI, world files, and snapshots for Wayfarer.
//!
//! This crate provides:
//! - [`Console`] - Interactive loop for trying matches against a world
//! - [`Session`] - Command dispatch over a world and an acting object
//! - [`ConsoleConfig`] - TOML console configuration
//! - [`world_file`] - Hand-written TOML world descriptions
//! - [`serialize`] - `MessagePack` world snapshots

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod console;
pub mod editor;
pub mod serialize;
pub mod session;
pub mod world_file;

pub use config::ConsoleConfig;
pub use console::Console;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use session::{Reply, Session};
