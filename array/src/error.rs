//! Errors reported by [`FixedArray`](crate::FixedArray).

use thiserror::Error;

/// A checked accessor was given an index `>= len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation}: index {index} is out of range for length {len}")]
pub struct OutOfRange {
    /// The accessor that failed, e.g. `"FixedArray::at"`.
    pub operation: &'static str,
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),

    /// An initializer list had more elements than the array holds.
    #[error("too many elements for a fixed array of length {capacity}")]
    TooManyElements { capacity: usize },
}
