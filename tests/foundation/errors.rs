//! Integration tests for Error types
//!
//! Tests error construction, display, and context.

use wayfarer_foundation::{Error, ErrorKind, ObjectRef};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_object() {
    let err = Error::invalid_object(ObjectRef::new(7));
    assert!(matches!(err.kind, ErrorKind::InvalidObject(obj) if obj == ObjectRef::new(7)));
    assert!(format!("{err}").contains("#7"));
}

#[test]
fn error_duplicate_object() {
    let err = Error::duplicate_object(ObjectRef::new(3));
    assert!(matches!(err.kind, ErrorKind::DuplicateObject(_)));
    assert_eq!(err.to_string(), "object already exists: #3");
}

#[test]
fn error_recursion_names_both_objects() {
    let err = Error::recursion(ObjectRef::new(1), ObjectRef::new(2));
    let msg = err.to_string();
    assert!(msg.contains("#1"));
    assert!(msg.contains("#2"));
}

#[test]
fn error_invalid_option() {
    let err = Error::invalid_option("match_threshold", "too high");
    assert!(matches!(err.kind, ErrorKind::InvalidOption { .. }));
    assert_eq!(err.to_string(), "invalid option match_threshold: too high");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_kept_beside_the_message() {
    let err = Error::new(ErrorKind::Io("disk full".to_string())).with_context("world.msgpack");
    assert_eq!(err.context.as_deref(), Some("world.msgpack"));
    assert_eq!(err.to_string(), "I/O error: disk full");
}

#[test]
fn later_context_replaces_earlier() {
    let err = Error::new(ErrorKind::Config("bad".to_string()))
        .with_context("first")
        .with_context("second");
    assert_eq!(err.context.as_deref(), Some("second"));
}
