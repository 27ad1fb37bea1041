//! Error types for the Wayfarer system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Errors cover world construction, configuration, and file handling; the
//! matching pipeline reports its outcomes through sentinels instead.

use thiserror::Error;

use crate::object::ObjectRef;

/// The main error type for Wayfarer operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<String>,
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an invalid object error.
    #[must_use]
    pub fn invalid_object(obj: ObjectRef) -> Self {
        Self::new(ErrorKind::InvalidObject(obj))
    }

    /// Creates a duplicate object error.
    #[must_use]
    pub fn duplicate_object(obj: ObjectRef) -> Self {
        Self::new(ErrorKind::DuplicateObject(obj))
    }

    /// Creates a containment recursion error.
    #[must_use]
    pub fn recursion(object: ObjectRef, destination: ObjectRef) -> Self {
        Self::new(ErrorKind::Recursion {
            object,
            destination,
        })
    }

    /// Creates an invalid option error.
    #[must_use]
    pub fn invalid_option(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidOption {
            name: name.into(),
            reason: reason.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Object does not exist.
    #[error("invalid object: {0}")]
    InvalidObject(ObjectRef),

    /// Object id is already taken.
    #[error("object already exists: {0}")]
    DuplicateObject(ObjectRef),

    /// Move would place an object inside itself.
    #[error("cannot move {object} into {destination}: it would contain itself")]
    Recursion {
        /// The object being moved.
        object: ObjectRef,
        /// The requested destination.
        destination: ObjectRef,
    },

    /// Server option is out of range or malformed.
    #[error("invalid option {name}: {reason}")]
    InvalidOption {
        /// The option name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Configuration file could not be understood.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error (file read/write).
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
