// selection by predicate
use crate::core::sequence::Sequence;

/// Keep the elements of `sequence` for which `keep` holds, preserving
/// their relative order. The input is never mutated; kept elements are
/// cloned into a freshly allocated sequence.
pub fn filter_sequence<T, F>(sequence: &Sequence<T>, mut keep: F) -> Sequence<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut output = Sequence::new();
    for i in 0..sequence.len() {
        let item = &sequence.as_slice()[i];
        if keep(item) {
            output.push(item.clone());
        }
    }
    output
}
