use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

use crate::bitset::{alloc_words, tail_mask, BitSet};
use crate::error::Result;

// The four binary operations share one word-wise walker and differ only in
// the word combinator and the capacity of the result:
//
//   Operation  | Word op   | Result capacity
//   -----------+-----------+--------------------
//   OR  (union)| a | b     | max(a, b)
//   AND (inter)| a & b     | max(a, b)
//   SUB (diff) | a & !b    | a
//   XOR (symd) | a ^ b     | max(a, b)
//
// Operands shorter than the result read as zero past their own storage.
// None of the combinators can set a bit that is clear in both operands
// (SUB only keeps bits of `a`), so the result needs no tail masking.

impl BitSet {
    fn combine(
        &self,
        other: &BitSet,
        capacity: u32,
        op: impl Fn(u64, u64) -> u64,
    ) -> Result<BitSet> {
        let mut words = alloc_words(capacity)?;
        for (index, word) in words.iter_mut().enumerate() {
            *word = op(self.word_or_zero(index), other.word_or_zero(index));
        }
        Ok(BitSet::from_words(capacity, words))
    }

    /// Members of either set.
    ///
    /// The result has the larger of the two capacities.
    pub fn union(&self, other: &BitSet) -> Result<BitSet> {
        self.combine(other, self.capacity().max(other.capacity()), |a, b| a | b)
    }

    /// Members of both sets.
    ///
    /// The result has the larger of the two capacities.
    pub fn intersection(&self, other: &BitSet) -> Result<BitSet> {
        self.combine(other, self.capacity().max(other.capacity()), |a, b| a & b)
    }

    /// Members of `self` that are not members of `other`.
    ///
    /// The result keeps the capacity of `self`.
    pub fn difference(&self, other: &BitSet) -> Result<BitSet> {
        self.combine(other, self.capacity(), |a, b| a & !b)
    }

    /// Members of exactly one of the two sets.
    ///
    /// The result has the larger of the two capacities.
    pub fn symmetric_difference(&self, other: &BitSet) -> Result<BitSet> {
        self.combine(other, self.capacity().max(other.capacity()), |a, b| a ^ b)
    }

    /// Every value in `0..capacity` that is not a member.
    pub fn complement(&self) -> Result<BitSet> {
        let capacity = self.capacity();
        let mut words = alloc_words(capacity)?;
        for (out, word) in words.iter_mut().zip(self.words()) {
            *out = !word;
        }
        // Inverted padding bits past the capacity are not values.
        if let Some(last) = words.last_mut() {
            *last &= tail_mask(capacity);
        }

        let len = capacity as u64 - self.len();
        Ok(BitSet::from_parts(capacity, len, words))
    }
}

/// Unwrap the result of a set operation, panicking like `Vec` does when
/// memory runs out.
fn allocated(result: Result<BitSet>) -> BitSet {
    match result {
        Ok(set) => set,
        Err(err) => panic!("bitset operation failed: {err}"),
    }
}

impl BitOr for &BitSet {
    type Output = BitSet;

    /// Union; see [`BitSet::union`].
    ///
    /// # Panics
    ///
    /// Panics if the result cannot be allocated.
    fn bitor(self, rhs: Self) -> BitSet {
        allocated(self.union(rhs))
    }
}

impl BitAnd for &BitSet {
    type Output = BitSet;

    /// Intersection; see [`BitSet::intersection`].
    ///
    /// # Panics
    ///
    /// Panics if the result cannot be allocated.
    fn bitand(self, rhs: Self) -> BitSet {
        allocated(self.intersection(rhs))
    }
}

impl Sub for &BitSet {
    type Output = BitSet;

    /// Difference; see [`BitSet::difference`].
    ///
    /// # Panics
    ///
    /// Panics if the result cannot be allocated.
    fn sub(self, rhs: Self) -> BitSet {
        allocated(self.difference(rhs))
    }
}

impl BitXor for &BitSet {
    type Output = BitSet;

    /// Symmetric difference; see [`BitSet::symmetric_difference`].
    ///
    /// # Panics
    ///
    /// Panics if the result cannot be allocated.
    fn bitxor(self, rhs: Self) -> BitSet {
        allocated(self.symmetric_difference(rhs))
    }
}

impl Not for &BitSet {
    type Output = BitSet;

    /// Complement; see [`BitSet::complement`].
    ///
    /// # Panics
    ///
    /// Panics if the result cannot be allocated.
    fn not(self) -> BitSet {
        allocated(self.complement())
    }
}
