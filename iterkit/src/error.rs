use thiserror::Error;

/// Errors raised by sequence operations.
///
/// Every error is surfaced immediately to the caller; nothing is
/// retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A quantifier or count call supplied both a predicate and a
    /// matcher argument. At most one of the two may be given.
    #[error("a predicate and a matcher argument cannot be combined")]
    PredicateAndMatcher,
    /// An operation that requires a caller-supplied function was
    /// called without one.
    #[error("this operation requires a function argument")]
    MissingFunction,
    /// A fold over an empty sequence has no element to seed the
    /// accumulator with.
    #[error("cannot fold an empty sequence without an initial value")]
    EmptyFold,
    /// A keyed collection was constructed with a repeated key.
    #[error("duplicate key in map construction")]
    DuplicateKey,
}

pub type Result<T> = std::result::Result<T, Error>;
