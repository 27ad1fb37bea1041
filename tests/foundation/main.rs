//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: ObjectRef, SharedValue, Error, and text helpers.

mod errors;
mod objects;
mod values;
