//! Cross-layer integration tests for Wayfarer
//!
//! Tests that verify correct interaction between multiple crates.

mod console_session;
mod world_files;
