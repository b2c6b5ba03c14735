// owned container + validated access
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for sequence access.
///
/// A typed sequence cannot be null or non-indexable, so the only invalid
/// input left to reject at runtime is an out-of-range index. Validated
/// accessors fail before touching any element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// An owned, ordered, zero-based index-addressable collection.
///
/// Insertion order is iteration order and determines the output position
/// of every combinator in this crate. Cloning produces an equal but
/// distinct container; no operation here mutates its input sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Sequence { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Sequence {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    //unchecked-style access: None when out of range
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Validated access. Errors before any element is read if `index`
    /// is out of range.
    pub fn at(&self, index: usize) -> Result<&T, SequenceError> {
        self.items.get(index).ok_or(SequenceError::IndexOutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence { items }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
