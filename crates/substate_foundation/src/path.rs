//! Structural paths into nested state.
//!
//! A [`Path`] is an immutable ordered sequence of [`Key`] segments addressing
//! one location inside a [`Value`](crate::Value). Paths are compared and
//! composed but never mutated in place; the empty path addresses the whole
//! value.

use std::fmt;
use std::sync::Arc;

use crate::collections::SVec;

/// One path segment: a map field or a list index.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    /// A string key into a map.
    Field(Arc<str>),
    /// A position into a list.
    Index(usize),
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{name:?}"),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{name}"),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Field(name.into())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Field(name.into())
    }
}

impl From<Arc<str>> for Key {
    fn from(name: Arc<str>) -> Self {
        Self::Field(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// An immutable ordered key sequence addressing a location within nested
/// state.
///
/// Built with [`Path::root`] and the [`field`](Path::field) /
/// [`index`](Path::index) builders, or collected from keys. Composition via
/// [`concat`](Path::concat) shares structure with both operands.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(SVec<Key>);

impl Path {
    /// The empty path, addressing the whole value.
    #[must_use]
    pub fn root() -> Self {
        Self(SVec::new())
    }

    /// Builds a path from map field names.
    #[must_use]
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        names.into_iter().map(|n| Key::Field(n.into())).collect()
    }

    /// Returns a new path with a map field appended.
    #[must_use]
    pub fn field(&self, name: impl Into<Arc<str>>) -> Self {
        Self(self.0.push_back(Key::Field(name.into())))
    }

    /// Returns a new path with a list index appended.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(self.0.push_back(Key::Index(index)))
    }

    /// Returns a new path with `other` appended after this path.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self(self.0.concat(&other.0))
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if this is the empty (whole-value) path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the segments.
    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.0.iter()
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Key> for Path {
    fn from(key: Key) -> Self {
        std::iter::once(key).collect()
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({self})")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, ".");
        }
        for (i, key) in self.iter().enumerate() {
            match key {
                Key::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{name}")?;
                }
                Key::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}
