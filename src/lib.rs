//! Generic, order-preserving transformations over owned sequences.
//!
//! The central contract is [`map_sequence`]: apply a caller-supplied
//! transformation to every element of a [`Sequence`], producing a new
//! sequence of equal length, in the same order, without mutating the
//! input. Around it sit the sibling combinators that share the same
//! container: fail-fast mapping, filtering, folding, gap-aware mapping
//! over sparse sequences, and recursive flattening of nested lists.
//!
//! All operations are free functions taking the sequence as an explicit
//! first parameter. Nothing here extends or patches a standard container
//! type, and nothing relies on an implicit receiver.

pub mod core;

pub use crate::core::filter::filter_sequence;
pub use crate::core::flatten::{Nested, flatten};
pub use crate::core::fold::{fold_sequence, try_fold_sequence};
pub use crate::core::map::{map_sequence, try_map_sequence};
pub use crate::core::sequence::{Sequence, SequenceError};
pub use crate::core::sparse::{SparseSequence, map_sparse_sequence};
