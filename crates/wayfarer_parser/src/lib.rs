//! Object-name matching for Wayfarer.
//!
//! This crate turns free text typed by a user ("second sword", "lamp",
//! "me") into the in-world object it names, and provides the English
//! inflection used to talk about those objects.
//!
//! # Architecture
//!
//! ```text
//! "2nd rusty sword"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AGGREGATE       │  → actor contents ∪ room contents, in order
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NAMES           │  → [(#4, "rusty sword blade"), (#9, "rusty sword"), ...]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ORDINAL         │  → ordinal 2, query "rusty sword"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ FUZZY + RESOLVE │  → hits above threshold, pick the 2nd
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MATCHER         │  → #9 (or AMBIGUOUS / FAILED_MATCH / NOTHING)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`aggregate`] - Candidate objects around an actor
//! - [`names`] - Searchable text built from names and aliases
//! - [`ordinal`] - Ordinal prefixes like "third" or "2."
//! - [`fuzzy`] - Blended fuzzy similarity scores
//! - [`resolver`] - Threshold filtering and ordinal selection
//! - [`matcher`] - Special forms and sentinel mapping
//! - [`morphology`] - Pluralize and singularize

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aggregate;
pub mod fuzzy;
pub mod matcher;
pub mod morphology;
pub mod names;
pub mod ordinal;
pub mod resolver;

// Re-export main types for convenience
pub use aggregate::{contents_of, nearby_objects};
pub use fuzzy::{ScoreBreakdown, score, score_breakdown};
pub use matcher::{MatchOutcome, ObjectMatcher};
pub use morphology::{inflect, is_plural, is_singular, pluralize, singularize};
pub use names::{Candidate, CandidateSet, alias_names, primary_name, searchable_text};
pub use ordinal::{OrdinalParse, parse_ordinal};
pub use resolver::{complex_match, resolve};
