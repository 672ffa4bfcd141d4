//! Error types for bitset operations

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur when building or mutating a [`BitSet`](crate::BitSet)
#[derive(Debug, Error)]
pub enum Error {
    /// Word storage for the requested capacity could not be reserved
    #[error("failed to allocate {word_count} words for capacity {capacity}")]
    Allocation {
        capacity: u32,
        word_count: usize,
        #[source]
        source: TryReserveError,
    },

    /// A single value does not fit in the set's universe
    #[error("value {value} is out of range (0 <= value < {capacity})")]
    OutOfRange { value: u32, capacity: u32 },

    /// Some values of a batch did not fit in the set's universe.
    ///
    /// The in-range values of the same batch have already been applied.
    #[error("{} value(s) out of range (0 <= value < {capacity}): {rejected:?}", .rejected.len())]
    OutOfRangeBatch { rejected: Vec<u32>, capacity: u32 },
}

/// A specialized Result type for bitset operations
pub type Result<T> = std::result::Result<T, Error>;
