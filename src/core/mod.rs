pub mod filter;
pub mod flatten;
pub mod fold;
pub mod map;
pub mod sequence;
pub mod sparse;
