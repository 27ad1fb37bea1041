//! Object identifiers and the reserved match sentinels.

use std::fmt;
use std::str::FromStr;

/// Identifier of an object in the virtual environment.
///
/// Real objects use non-negative ids. Negative ids are reserved: three of
/// them are the sentinels a match can produce instead of an object.
/// Whether a non-negative id names a live object is a question for the
/// object store, never for the id alone.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ObjectRef(i64);

/// The reserved non-object results of a match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Sentinel {
    /// No object was implied (empty input).
    Nothing,
    /// Several objects qualified equally.
    Ambiguous,
    /// Nothing qualified.
    FailedMatch,
}

impl ObjectRef {
    /// No object implied.
    pub const NOTHING: Self = Self(-1);
    /// Multiple equally-qualifying matches.
    pub const AMBIGUOUS: Self = Self(-2);
    /// Lookup found nothing.
    pub const FAILED_MATCH: Self = Self(-3);

    /// Creates a reference from a raw id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn id(self) -> i64 {
        self.0
    }

    /// Returns true if this is one of the three match sentinels.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self.0, -3..=-1)
    }

    /// Classifies this reference as a sentinel, if it is one.
    #[must_use]
    pub const fn sentinel(self) -> Option<Sentinel> {
        match self.0 {
            -1 => Some(Sentinel::Nothing),
            -2 => Some(Sentinel::Ambiguous),
            -3 => Some(Sentinel::FailedMatch),
            _ => None,
        }
    }
}

impl From<Sentinel> for ObjectRef {
    fn from(sentinel: Sentinel) -> Self {
        match sentinel {
            Sentinel::Nothing => Self::NOTHING,
            Sentinel::Ambiguous => Self::AMBIGUOUS,
            Sentinel::FailedMatch => Self::FAILED_MATCH,
        }
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sentinel() {
            Some(Sentinel::Nothing) => write!(f, "ObjectRef(NOTHING)"),
            Some(Sentinel::Ambiguous) => write!(f, "ObjectRef(AMBIGUOUS)"),
            Some(Sentinel::FailedMatch) => write!(f, "ObjectRef(FAILED_MATCH)"),
            None => write!(f, "ObjectRef(#{})", self.0),
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for ObjectRef {
    type Err = std::num::ParseIntError;

    /// Parses `#12` or `12`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        digits.parse::<i64>().map(Self)
    }
}
