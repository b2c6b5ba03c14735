// recursive flattening of nested lists
use crate::core::sequence::Sequence;
use serde::{Deserialize, Serialize};

/// A value or an arbitrarily nested list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Nesting depth: 0 for a leaf, 1 for a flat list, and so on. An
    /// empty list has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::List(children) => {
                1 + children.iter().map(Nested::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Flatten a nested list into a dense sequence, depth first, left to
/// right. Leaves appear in the output in the order they are encountered;
/// empty lists contribute nothing.
pub fn flatten<T>(nested: Nested<T>) -> Sequence<T> {
    let mut output = Sequence::new();
    collect(nested, &mut output);
    output
}

fn collect<T>(nested: Nested<T>, output: &mut Sequence<T>) {
    match nested {
        Nested::Leaf(value) => output.push(value),
        Nested::List(children) => {
            for child in children {
                collect(child, output);
            }
        }
    }
}
