// positional mapping, the core contract
use crate::core::sequence::Sequence;

/// Apply `transform` to every element of `sequence`, producing a new
/// sequence of equal length in the same order.
///
/// Traversal is positional: every index from 0 to length-1 is visited by
/// direct index access, in order, and `transform` runs exactly once per
/// element. The input is never mutated; the output is a freshly
/// allocated sequence owned by the caller.
pub fn map_sequence<T, U, F>(sequence: &Sequence<T>, mut transform: F) -> Sequence<U>
where
    F: FnMut(&T) -> U,
{
    let mut output = Sequence::with_capacity(sequence.len());
    for i in 0..sequence.len() {
        output.push(transform(&sequence.as_slice()[i]));
    }
    output
}

/// Fallible variant of [`map_sequence`].
///
/// Fail-fast: the first `Err` from `transform` is returned immediately
/// and unconverted. No partial result is produced and elements after the
/// failing index are not visited.
pub fn try_map_sequence<T, U, E, F>(
    sequence: &Sequence<T>,
    mut transform: F,
) -> Result<Sequence<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    let mut output = Sequence::with_capacity(sequence.len());
    for i in 0..sequence.len() {
        output.push(transform(&sequence.as_slice()[i])?);
    }
    Ok(output)
}
