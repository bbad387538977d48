use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Coarse classification shared by every error of the crate.
///
/// None of these are transient: they signal a programming or configuration
/// mistake at the boundary of the operation that detected it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed construction input, e.g. a wrong number of bounds.
    #[display(fmt = "configuration error")]
    Configuration,
    /// An inverted range, or an operation on an exhausted cursor.
    #[display(fmt = "invariant violation")]
    InvariantViolation,
    /// An axis or worker ordinal outside of its valid range.
    #[display(fmt = "index/range error")]
    IndexRange,
}
