//! Runtime-tunable server options.

use std::sync::Arc;

/// Option naming the fuzzy-match acceptance threshold.
pub const MATCH_THRESHOLD_OPTION: &str = "match_threshold";

/// Threshold used when [`MATCH_THRESHOLD_OPTION`] is unset (0–100 scale).
pub const DEFAULT_MATCH_THRESHOLD: i64 = 70;

/// Named integer options, shared structurally between world snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerOptions {
    values: im::OrdMap<Arc<str>, i64>,
}

impl ServerOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of an option, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Returns a copy with `name` set to `value`.
    #[must_use]
    pub fn with(&self, name: &str, value: i64) -> Self {
        Self {
            values: self.values.update(Arc::from(name), value),
        }
    }

    /// Returns a copy with `name` unset.
    #[must_use]
    pub fn without(&self, name: &str) -> Self {
        Self {
            values: self.values.without(name),
        }
    }

    /// Reads an option, falling back to `default` when unset.
    #[must_use]
    pub fn configured_threshold(&self, name: &str, default: i64) -> i64 {
        self.get(name).unwrap_or(default)
    }

    /// Iterates options in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.values.iter().map(|(name, value)| (&**name, *value))
    }

    /// Returns the number of options set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
