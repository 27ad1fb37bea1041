//! Tagged values stored on objects.

use std::fmt;
use std::sync::Arc;

use crate::object::ObjectRef;

/// A value held in an object attribute.
///
/// Cloning is O(1). Composite variants (`Str`, `Seq`) share their payload
/// through an `Arc`, so a clone bumps a share count instead of copying.
/// Sequences are copy-on-write: every mutating method first makes the
/// payload exclusively owned, cloning it when it is shared.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SharedValue {
    /// No value.
    #[default]
    Nil,
    /// 64-bit signed integer.
    Int(i64),
    /// String value.
    Str(Arc<str>),
    /// Object reference.
    Obj(ObjectRef),
    /// Ordered sequence of values.
    Seq(Arc<Vec<SharedValue>>),
}

impl SharedValue {
    /// Creates an empty sequence.
    #[must_use]
    pub fn empty_seq() -> Self {
        Self::Seq(Arc::new(Vec::new()))
    }

    /// Returns true for the composite variants, whose clones are shared.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Str(_) | Self::Seq(_))
    }

    /// Returns how many values currently share this payload.
    ///
    /// Scalars are never shared and always report 1.
    #[must_use]
    pub fn share_count(&self) -> usize {
        match self {
            Self::Str(s) => Arc::strong_count(s),
            Self::Seq(v) => Arc::strong_count(v),
            Self::Nil | Self::Int(_) | Self::Obj(_) => 1,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract an object reference.
    #[must_use]
    pub const fn as_obj(&self) -> Option<ObjectRef> {
        match self {
            Self::Obj(obj) => Some(*obj),
            _ => None,
        }
    }

    /// Attempts to extract the members of a sequence.
    #[must_use]
    pub fn as_seq(&self) -> Option<&[SharedValue]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the strings this value carries.
    ///
    /// A string yields itself, a sequence yields its string members (other
    /// members are skipped), and any other value yields nothing.
    #[must_use]
    pub fn string_items(&self) -> Vec<&str> {
        match self {
            Self::Str(s) => vec![&**s],
            Self::Seq(items) => items.iter().filter_map(Self::as_str).collect(),
            Self::Nil | Self::Int(_) | Self::Obj(_) => Vec::new(),
        }
    }

    /// Returns the object references held in a sequence.
    ///
    /// Non-object members are skipped; a non-sequence yields nothing.
    #[must_use]
    pub fn object_items(&self) -> Vec<ObjectRef> {
        match self {
            Self::Seq(items) => items.iter().filter_map(Self::as_obj).collect(),
            _ => Vec::new(),
        }
    }

    /// Returns exclusive, mutable access to a sequence's members.
    ///
    /// Shared payloads are cloned first, so other holders never observe
    /// the change. Returns `None` for non-sequences.
    pub fn seq_mut(&mut self) -> Option<&mut Vec<SharedValue>> {
        match self {
            Self::Seq(items) => Some(Arc::make_mut(items)),
            _ => None,
        }
    }

    /// Appends to a sequence. Returns false if this is not a sequence.
    pub fn seq_push(&mut self, value: SharedValue) -> bool {
        match self.seq_mut() {
            Some(items) => {
                items.push(value);
                true
            }
            None => false,
        }
    }

    /// Removes every member equal to `value` from a sequence.
    ///
    /// Returns the number removed (0 for non-sequences).
    pub fn seq_remove(&mut self, value: &SharedValue) -> usize {
        // Checked before `seq_mut` so an absent member never forces a copy.
        let present = self.as_seq().is_some_and(|items| items.contains(value));
        if !present {
            return 0;
        }
        let Some(items) = self.seq_mut() else {
            return 0;
        };
        let before = items.len();
        items.retain(|item| item != value);
        before - items.len()
    }
}

impl fmt::Debug for SharedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Obj(obj) => write!(f, "{obj}"),
            Self::Seq(items) => f.debug_list().entries(items.iter()).finish(),
        }
    }
}

impl fmt::Display for SharedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Obj(obj) => write!(f, "{obj}"),
            Self::Seq(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenience From implementations

impl From<i64> for SharedValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for SharedValue {
    fn from(s: &str) -> Self {
        Self::Str(s.into())
    }
}

impl From<String> for SharedValue {
    fn from(s: String) -> Self {
        Self::Str(s.into())
    }
}

impl From<Arc<str>> for SharedValue {
    fn from(s: Arc<str>) -> Self {
        Self::Str(s)
    }
}

impl From<ObjectRef> for SharedValue {
    fn from(obj: ObjectRef) -> Self {
        Self::Obj(obj)
    }
}

impl<T: Into<SharedValue>> From<Vec<T>> for SharedValue {
    fn from(v: Vec<T>) -> Self {
        Self::Seq(Arc::new(v.into_iter().map(Into::into).collect()))
    }
}

impl<T: Into<SharedValue>> FromIterator<T> for SharedValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Seq(Arc::new(iter.into_iter().map(Into::into).collect()))
    }
}
