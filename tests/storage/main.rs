//! Integration tests for Layer 1: Storage
//!
//! Tests for World snapshots, containment, attributes, and server options.

mod containment;
mod world;
