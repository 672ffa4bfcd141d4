//! A set of integers over a fixed universe `0..capacity`, packed one bit per
//! value into 64-bit words.
//!
//! ```
//! use bitset::BitSet;
//!
//! let a = BitSet::from_values(10, [2, 3, 4, 5, 6])?;
//! let b = BitSet::from_values(10, [1, 2, 4, 9])?;
//!
//! let both = a.intersection(&b)?;
//! assert_eq!(both.iter().collect::<Vec<_>>(), [2, 4]);
//! assert!(both.is_strict_subset(&a));
//! # Ok::<(), bitset::Error>(())
//! ```

mod bitset;
mod error;
mod iter;
mod ops;
mod render;

#[cfg(test)]
mod tests_props;

pub use bitset::{BitSet, WORD_BITS};
pub use error::{Error, Result};
pub use iter::Iter;
pub use render::{BitView, Members};
