//! Object matching.
//!
//! [`ObjectMatcher`] is the entry point the command interpreter uses. It
//! handles the special forms (`me`, `here`, `#id`), gathers candidates
//! around the actor, and maps the resolver's answer onto the sentinel
//! encoding. It never fails: every problem is one of the sentinels.

use wayfarer_foundation::{ObjectRef, Sentinel};
use wayfarer_storage::{DEFAULT_MATCH_THRESHOLD, MATCH_THRESHOLD_OPTION, ObjectStore};

use crate::aggregate::nearby_objects;
use crate::names::CandidateSet;
use crate::resolver::complex_match;

/// The result of a match, as an enum rather than a sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchOutcome {
    /// The text was empty.
    Nothing,
    /// Nothing matched.
    Failed,
    /// More than one object matched.
    Ambiguous,
    /// Exactly one object matched.
    Found(ObjectRef),
}

impl MatchOutcome {
    /// Returns the matched object, if there is one.
    #[must_use]
    pub const fn object(self) -> Option<ObjectRef> {
        match self {
            Self::Found(obj) => Some(obj),
            _ => None,
        }
    }
}

impl From<MatchOutcome> for ObjectRef {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Nothing => ObjectRef::NOTHING,
            MatchOutcome::Failed => ObjectRef::FAILED_MATCH,
            MatchOutcome::Ambiguous => ObjectRef::AMBIGUOUS,
            MatchOutcome::Found(obj) => obj,
        }
    }
}

impl From<ObjectRef> for MatchOutcome {
    fn from(obj: ObjectRef) -> Self {
        match obj.sentinel() {
            Some(Sentinel::Nothing) => Self::Nothing,
            Some(Sentinel::FailedMatch) => Self::Failed,
            Some(Sentinel::Ambiguous) => Self::Ambiguous,
            None => Self::Found(obj),
        }
    }
}

/// Matches user text against the objects an actor can see.
#[derive(Clone, Debug)]
pub struct ObjectMatcher<S> {
    store: S,
}

impl<S: ObjectStore> ObjectMatcher<S> {
    /// Creates a matcher reading from `store`.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The store this matcher reads.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Matches `text` for `actor`, returning an object or a sentinel.
    ///
    /// - empty text: `NOTHING`
    /// - `#<id>` from a privileged actor: that object, or `FAILED_MATCH`
    /// - invalid actor: `FAILED_MATCH`
    /// - `me` / `myself`: the actor; `here`: the actor's location
    /// - otherwise fuzzy matching over what the actor carries and what is
    ///   around them: one hit is the object, several are `AMBIGUOUS`, none
    ///   is `FAILED_MATCH`
    pub fn match_object(&self, actor: ObjectRef, text: &str) -> ObjectRef {
        self.match_outcome(actor, text).into()
    }

    /// Like [`match_object`](Self::match_object), as a [`MatchOutcome`].
    pub fn match_outcome(&self, actor: ObjectRef, text: &str) -> MatchOutcome {
        let text = text.trim();
        if text.is_empty() {
            return MatchOutcome::Nothing;
        }
        if let Some(outcome) = self.special_form(actor, text) {
            return outcome;
        }

        let candidates = CandidateSet::from_refs(&self.store, nearby_objects(&self.store, actor));
        let outcome = self.pick(text, &candidates);
        tracing::debug!(%actor, text, candidates = candidates.len(), ?outcome, "matched object");
        outcome
    }

    /// Matches `token` against an explicit candidate list.
    ///
    /// Runs the same special forms and fuzzy matching as
    /// [`match_object`](Self::match_object), but over `candidates` instead of
    /// the actor's surroundings. Returns `Some` only for a single live object.
    pub fn token_match(
        &self,
        actor: ObjectRef,
        token: &str,
        candidates: &[ObjectRef],
    ) -> Option<ObjectRef> {
        if candidates.is_empty() {
            return None;
        }
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        let outcome = self.special_form(actor, token).unwrap_or_else(|| {
            let set = CandidateSet::from_refs(&self.store, candidates.iter().copied());
            self.pick(token, &set)
        });
        tracing::debug!(%actor, token, ?outcome, "matched token");

        outcome.object().filter(|&obj| self.store.valid(obj))
    }

    /// Handles `#id`, an invalid actor, `me`, `myself` and `here`.
    fn special_form(&self, actor: ObjectRef, text: &str) -> Option<MatchOutcome> {
        if let Some(digits) = text.strip_prefix('#') {
            if self.store.has_privilege(actor) {
                let id = digits
                    .bytes()
                    .all(|b| b.is_ascii_digit())
                    .then(|| digits.parse::<i64>().ok())
                    .flatten()
                    .map(ObjectRef::new);
                return Some(match id {
                    Some(obj) if self.store.valid(obj) => MatchOutcome::Found(obj),
                    _ => MatchOutcome::Failed,
                });
            }
        }

        if !self.store.valid(actor) {
            return Some(MatchOutcome::Failed);
        }

        match text.to_lowercase().as_str() {
            "me" | "myself" => Some(MatchOutcome::Found(actor)),
            "here" => Some(self.store.location_of(actor).into()),
            _ => None,
        }
    }

    fn pick(&self, text: &str, candidates: &CandidateSet) -> MatchOutcome {
        let threshold = self
            .store
            .configured_threshold(MATCH_THRESHOLD_OPTION, DEFAULT_MATCH_THRESHOLD);
        let query = text.to_lowercase();
        let hits = complex_match(&query, &candidates.texts(), threshold);

        match hits.as_slice() {
            [] => MatchOutcome::Failed,
            [index] => candidates
                .get(*index)
                .map_or(MatchOutcome::Failed, |c| MatchOutcome::Found(c.object)),
            _ => MatchOutcome::Ambiguous,
        }
    }
}
