//! Generic sequence operations over dynamically typed values, built
//! from scratch: visiting, filtering, quantification, counting,
//! transformation and left folds.
//!
//! The operations live on [`sequence::Sequence`]; a keyed collection
//! ([`sequence::Map`]) enumerates into a sequence of key/value entries
//! so the same operations apply to it. Quantifiers and counting accept
//! either a caller-supplied predicate or a non-callable matcher
//! ([`sequence::Matcher`]): a capability tag, a pattern, or a plain
//! value compared with native equality.

pub mod atomic;
pub mod error;
pub mod sequence;

pub use iterkit_tag::Tag;
