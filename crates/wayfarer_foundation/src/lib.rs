//! Core types for Wayfarer.
//!
//! This crate provides:
//! - [`ObjectRef`] - Object identifiers and the match sentinels
//! - [`SharedValue`] - Copy-on-write tagged values read from the object store
//! - [`Error`] - Rich error types with context
//! - Text helpers ([`tokenize`], [`merge_unique`], ...)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod object;
pub mod text;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use object::{ObjectRef, Sentinel};
pub use text::{join_tokens, lowercase_tokens, merge_unique, tokenize};
pub use value::SharedValue;
