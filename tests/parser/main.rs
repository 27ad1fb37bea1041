//! Integration tests for Layer 2: Parser
//!
//! Tests for object matching, fuzzy resolution, ordinals, and inflection.

mod matching;
mod morphology;
mod resolution;
