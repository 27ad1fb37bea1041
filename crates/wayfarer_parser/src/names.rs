//! Searchable text for candidate objects.
//!
//! An object is matched against one string: the lowercased tokens of its
//! display name followed by any alias tokens the name did not already
//! contain.

use wayfarer_foundation::{ObjectRef, join_tokens, lowercase_tokens, merge_unique};
use wayfarer_storage::{ALIASES_ATTRIBUTE, ObjectStore};

/// Lowercased tokens of the object's display name.
#[must_use]
pub fn primary_name<S: ObjectStore + ?Sized>(store: &S, obj: ObjectRef) -> Vec<String> {
    store
        .object_name(obj)
        .map(|name| lowercase_tokens(&name))
        .unwrap_or_default()
}

/// Lowercased tokens of the object's aliases.
///
/// The aliases attribute may be a single string or a list of strings.
/// Anything else counts as no aliases.
#[must_use]
pub fn alias_names<S: ObjectStore + ?Sized>(store: &S, obj: ObjectRef) -> Vec<String> {
    let Some(aliases) = store.read_attribute(obj, ALIASES_ATTRIBUTE) else {
        return Vec::new();
    };
    if aliases.as_str().is_none() && aliases.as_seq().is_none() {
        tracing::warn!(%obj, value = %aliases, "ignoring malformed aliases attribute");
    }
    aliases
        .string_items()
        .into_iter()
        .flat_map(lowercase_tokens)
        .collect()
}

/// Name tokens then new alias tokens, joined with single spaces.
#[must_use]
pub fn searchable_text<S: ObjectStore + ?Sized>(store: &S, obj: ObjectRef) -> String {
    let tokens = merge_unique(primary_name(store, obj), alias_names(store, obj));
    join_tokens(&tokens)
}

/// An object paired with the text it is matched by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The object.
    pub object: ObjectRef,
    /// Its searchable text.
    pub text: String,
}

impl Candidate {
    /// Indexes a live object. Returns `None` for invalid references.
    #[must_use]
    pub fn index<S: ObjectStore + ?Sized>(store: &S, obj: ObjectRef) -> Option<Self> {
        store.valid(obj).then(|| Self {
            object: obj,
            text: searchable_text(store, obj),
        })
    }
}

/// Ordered candidates; resolver indices refer to positions in this set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// Indexes each reference in order, dropping invalid ones.
    pub fn from_refs<S, I>(store: &S, refs: I) -> Self
    where
        S: ObjectStore + ?Sized,
        I: IntoIterator<Item = ObjectRef>,
    {
        Self {
            candidates: refs
                .into_iter()
                .filter_map(|obj| Candidate::index(store, obj))
                .collect(),
        }
    }

    /// The searchable texts, parallel to the candidates.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.text.as_str()).collect()
    }

    /// Returns the candidate at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// Iterates candidates in order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns true if there are no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
