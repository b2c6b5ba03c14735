// gap-aware sequences
use crate::core::sequence::{Sequence, SequenceError};
use serde::{Deserialize, Serialize};

/// An index-addressable collection that may have gaps.
///
/// Every index from 0 to length-1 exists as a slot, but a slot may hold
/// nothing. Mapping over a sparse sequence visits every slot, gaps
/// included, and the transformation receives the absent value; gaps are
/// never silently skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseSequence<T> {
    slots: Vec<Option<T>>,
}

impl<T> SparseSequence<T> {
    /// A sequence of `len` slots, all empty.
    pub fn with_len(len: usize) -> Self {
        SparseSequence {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Fill a slot, returning the displaced value if the slot was
    /// occupied. Errors before writing anything if `index` is out of
    /// range; filling never grows the sequence.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, SequenceError> {
        if index >= self.slots.len() {
            return Err(SequenceError::IndexOutOfBounds {
                index,
                len: self.slots.len(),
            });
        }
        Ok(self.slots[index].replace(value))
    }

    //None for a gap and for an out-of-range index alike
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn gap_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }
}

impl<T> From<Vec<Option<T>>> for SparseSequence<T> {
    fn from(slots: Vec<Option<T>>) -> Self {
        SparseSequence { slots }
    }
}

/// Like [`crate::core::map::map_sequence`] but over a sparse sequence.
///
/// Visits every index from 0 to length-1 in order; the transformation is
/// passed `None` for gaps and produces a value for them like any other
/// slot, so the output is dense and of equal length.
pub fn map_sparse_sequence<T, U, F>(sequence: &SparseSequence<T>, mut transform: F) -> Sequence<U>
where
    F: FnMut(Option<&T>) -> U,
{
    let mut output = Sequence::with_capacity(sequence.len());
    for i in 0..sequence.len() {
        output.push(transform(sequence.slots[i].as_ref()));
    }
    output
}
