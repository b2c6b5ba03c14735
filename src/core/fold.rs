// left folds with an explicit accumulator
use crate::core::sequence::Sequence;

/// Fold `sequence` from the left into a single value, starting from
/// `init` and combining one element at a time in index order.
pub fn fold_sequence<T, Acc, F>(sequence: &Sequence<T>, init: Acc, mut combine: F) -> Acc
where
    F: FnMut(Acc, &T) -> Acc,
{
    let mut acc = init;
    for i in 0..sequence.len() {
        acc = combine(acc, &sequence.as_slice()[i]);
    }
    acc
}

/// Fallible left fold. Fail-fast: the first `Err` from `combine` is
/// returned immediately and unconverted, and no further elements are
/// visited.
pub fn try_fold_sequence<T, Acc, E, F>(
    sequence: &Sequence<T>,
    init: Acc,
    mut combine: F,
) -> Result<Acc, E>
where
    F: FnMut(Acc, &T) -> Result<Acc, E>,
{
    let mut acc = init;
    for i in 0..sequence.len() {
        acc = combine(acc, &sequence.as_slice()[i])?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sums_in_index_order() {
        let s = Sequence::from(vec![1, 2, 3]);
        assert_eq!(fold_sequence(&s, 0, |acc, &x| acc + x), 6);
    }

    #[test]
    fn empty_fold_returns_the_initial_accumulator() {
        let s: Sequence<i32> = Sequence::new();
        assert_eq!(fold_sequence(&s, 42, |acc, &x| acc + x), 42);
    }

    #[test]
    fn left_fold_is_order_sensitive() {
        let s = Sequence::from(vec!["a", "b", "c"]);
        let joined = fold_sequence(&s, String::new(), |mut acc, &x| {
            acc.push_str(x);
            acc
        });
        assert_eq!(joined, "abc");
    }

    #[test]
    fn counts_vowels_with_a_membership_set() {
        let vowels: HashSet<char> = ['a', 'e', 'i', 'o', 'u'].into_iter().collect();
        let s: Sequence<char> = "HeY JS! YOu R AmAzinG"
            .to_lowercase()
            .chars()
            .collect();

        let count = fold_sequence(&s, 0usize, |acc, c| {
            if vowels.contains(c) { acc + 1 } else { acc }
        });

        assert_eq!(count, 6);
    }

    #[test]
    fn try_fold_stops_at_the_first_failure() {
        let s = Sequence::from(vec![1, 2, 0, 3]);
        let mut calls = 0;

        let result: Result<i32, String> = try_fold_sequence(&s, 0, |acc, &x| {
            calls += 1;
            if x == 0 {
                Err("zero element".to_string())
            } else {
                Ok(acc + 10 / x)
            }
        });

        assert!(result.is_err());
        assert_eq!(calls, 3);
    }
}
