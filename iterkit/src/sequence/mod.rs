/// Sequences and the operation set over them.
///
/// A sequence is an ordered list of items. Each operation lives in its
/// own file as an `impl Sequence` block; `matching.rs` holds the
/// matcher and argument-resolution machinery shared by the quantifiers
/// and counting.
mod count;
mod each;
mod filter;
mod fold;
mod item;
mod map;
mod matching;
mod quantify;
mod sequence_core;
mod transform;

pub use item::Item;
pub use map::Map;
pub use matching::{
    reducer, transformer, CountArg, Matcher, Predicate, Reducer, TestArg, Transformer,
};
pub use sequence_core::Sequence;
