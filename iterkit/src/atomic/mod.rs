/// Atomic values.
///
/// The dynamic scalar values sequences are built from, the native
/// equality rules for comparing them, and a hashable key form for
/// keyed collections.
mod atomic_core;
mod map_key;
mod op_eq;

pub use atomic_core::Atomic;
pub(crate) use map_key::MapKey;
pub(crate) use op_eq::atomic_eq;
