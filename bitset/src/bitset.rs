use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::Iter;

/// Number of bits stored in each storage word.
pub const WORD_BITS: u32 = u64::BITS;

const HIGH_BIT: u64 = 1 << (WORD_BITS - 1);

/// Number of words needed to hold `capacity` bits.
pub(crate) fn word_count_for(capacity: u32) -> usize {
    capacity.div_ceil(WORD_BITS) as usize
}

/// Word index and single-bit mask of `value`.
///
/// Bits are laid out most-significant first: value `v` lives in word
/// `v / 64` at bit position `63 - v % 64`.
#[inline]
pub(crate) fn locate(value: u32) -> (usize, u64) {
    ((value / WORD_BITS) as usize, HIGH_BIT >> (value % WORD_BITS))
}

/// Mask of the bits of the last word that map to valid values.
pub(crate) fn tail_mask(capacity: u32) -> u64 {
    match capacity % WORD_BITS {
        0 => u64::MAX,
        used => u64::MAX << (WORD_BITS - used),
    }
}

/// Reserve zeroed storage for a set of the given capacity.
pub(crate) fn alloc_words(capacity: u32) -> Result<Vec<u64>> {
    let word_count = word_count_for(capacity);

    let mut words = Vec::new();
    words
        .try_reserve_exact(word_count)
        .map_err(|source| Error::Allocation {
            capacity,
            word_count,
            source,
        })?;
    words.resize(word_count, 0);

    trace!(capacity, word_count, "allocated bitset storage");
    Ok(words)
}

fn popcount(words: &[u64]) -> u64 {
    words.iter().map(|w| w.count_ones() as u64).sum()
}

/// A set of integers drawn from the fixed universe `0..capacity`.
///
/// Membership is packed one bit per value into 64-bit words. The member
/// count is cached and kept equal to the number of set bits across every
/// operation. Bits past `capacity` in the last word are always zero.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BitSet {
    capacity: u32,
    len: u64,
    words: Vec<u64>,
}

impl BitSet {
    /// Create an empty set able to hold values in `0..capacity`.
    pub fn new(capacity: u32) -> Result<Self> {
        Ok(Self {
            capacity,
            len: 0,
            words: alloc_words(capacity)?,
        })
    }

    /// Create a set holding every value in `0..capacity`.
    pub fn full(capacity: u32) -> Result<Self> {
        let mut words = alloc_words(capacity)?;
        words.fill(u64::MAX);
        if let Some(last) = words.last_mut() {
            *last &= tail_mask(capacity);
        }

        Ok(Self {
            capacity,
            len: capacity as u64,
            words,
        })
    }

    /// Create a set of the given capacity and insert `values` into it.
    ///
    /// Fails with [`Error::OutOfRangeBatch`] if any value is `>= capacity`.
    pub fn from_values(capacity: u32, values: impl IntoIterator<Item = u32>) -> Result<Self> {
        let mut set = Self::new(capacity)?;
        set.insert_many(values)?;
        Ok(set)
    }

    /// Assemble a set from storage built by a word-wise operation.
    ///
    /// The member count is recomputed from the words.
    pub(crate) fn from_words(capacity: u32, words: Vec<u64>) -> Self {
        let len = popcount(&words);
        Self::from_parts(capacity, len, words)
    }

    pub(crate) fn from_parts(capacity: u32, len: u64, words: Vec<u64>) -> Self {
        debug_assert_eq!(words.len(), word_count_for(capacity));
        debug_assert_eq!(
            words.last().map_or(0, |w| w & !tail_mask(capacity)),
            0,
            "bits set past capacity {capacity}"
        );
        debug_assert_eq!(len, popcount(&words));

        Self {
            capacity,
            len,
            words,
        }
    }

    /// The exclusive upper bound on values this set can hold.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of members.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed storage words, most-significant bit first.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Word `index`, or zero when `index` is past the end of storage.
    ///
    /// Lets operands of different capacities be combined as if the shorter
    /// one were zero-extended.
    #[inline]
    pub(crate) fn word_or_zero(&self, index: usize) -> u64 {
        self.words.get(index).copied().unwrap_or(0)
    }

    /// Count members by scanning the storage words.
    ///
    /// Always agrees with [`len`](Self::len); useful to verify the cached
    /// count.
    pub fn count_ones(&self) -> u64 {
        popcount(&self.words)
    }

    fn check(&self, value: u32) -> Result<(usize, u64)> {
        if value >= self.capacity {
            return Err(Error::OutOfRange {
                value,
                capacity: self.capacity,
            });
        }
        Ok(locate(value))
    }

    /// Test whether `value` is a member.
    ///
    /// Values outside `0..capacity` are never members; this is not an error.
    pub fn contains(&self, value: u32) -> bool {
        if value >= self.capacity {
            return false;
        }
        let (index, mask) = locate(value);
        self.words[index] & mask != 0
    }

    /// Add `value` to the set.
    ///
    /// Returns `true` if the value was not already present. An out-of-range
    /// value leaves the set unchanged and returns [`Error::OutOfRange`].
    pub fn insert(&mut self, value: u32) -> Result<bool> {
        let (index, mask) = self.check(value)?;
        let word = &mut self.words[index];
        if *word & mask != 0 {
            return Ok(false);
        }
        *word |= mask;
        self.len += 1;
        Ok(true)
    }

    /// Remove `value` from the set.
    ///
    /// Returns `true` if the value was present.
    pub fn remove(&mut self, value: u32) -> Result<bool> {
        let (index, mask) = self.check(value)?;
        let word = &mut self.words[index];
        if *word & mask == 0 {
            return Ok(false);
        }
        *word &= !mask;
        self.len -= 1;
        Ok(true)
    }

    /// Insert every value of `values`, in order.
    ///
    /// Each value is handled independently: out-of-range values are skipped
    /// and the rest are still inserted. Returns the number of values newly
    /// added, or [`Error::OutOfRangeBatch`] naming every skipped value.
    pub fn insert_many(&mut self, values: impl IntoIterator<Item = u32>) -> Result<u64> {
        self.apply_batch("insert", values, Self::insert)
    }

    /// Remove every value of `values`, in order.
    ///
    /// Same batch semantics as [`insert_many`](Self::insert_many). Returns
    /// the number of values that were present and got removed.
    pub fn remove_many(&mut self, values: impl IntoIterator<Item = u32>) -> Result<u64> {
        self.apply_batch("remove", values, Self::remove)
    }

    fn apply_batch(
        &mut self,
        op: &'static str,
        values: impl IntoIterator<Item = u32>,
        apply: fn(&mut Self, u32) -> Result<bool>,
    ) -> Result<u64> {
        let mut changed = 0u64;
        let mut rejected = Vec::new();

        for value in values {
            if value >= self.capacity {
                debug!(op, value, capacity = self.capacity, "skipping out-of-range value");
                rejected.push(value);
                continue;
            }
            if apply(self, value)? {
                changed += 1;
            }
        }

        if rejected.is_empty() {
            Ok(changed)
        } else {
            Err(Error::OutOfRangeBatch {
                rejected,
                capacity: self.capacity,
            })
        }
    }

    /// Remove all members, keeping the capacity.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.len = 0;
    }

    /// Iterate over members in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.words, self.len)
    }

    /// The smallest member.
    pub fn first(&self) -> Option<u32> {
        self.iter().next()
    }

    /// The largest member.
    pub fn last(&self) -> Option<u32> {
        let (index, word) = self
            .words
            .iter()
            .enumerate()
            .rev()
            .find(|(_, w)| **w != 0)?;
        Some(index as u32 * WORD_BITS + (WORD_BITS - 1 - word.trailing_zeros()))
    }

    /// Test whether both sets hold exactly the same members.
    ///
    /// Unlike `==`, the capacities may differ: the shorter storage is treated
    /// as zero-extended. Because bits past a set's capacity are always zero,
    /// comparing the shared prefix of words together with the member counts
    /// is enough.
    pub fn same_members(&self, other: &BitSet) -> bool {
        self.len == other.len && self.words.iter().zip(&other.words).all(|(a, b)| a == b)
    }

    /// Test whether every member of `self` is also a member of `other`.
    ///
    /// Members of `self` that do not fit in `other`'s capacity make this
    /// `false`; values only `other` can represent do not matter.
    pub fn is_subset(&self, other: &BitSet) -> bool {
        self.words
            .iter()
            .enumerate()
            .all(|(index, word)| word & !other.word_or_zero(index) == 0)
    }

    /// Test whether `self` is a subset of `other` with fewer members.
    pub fn is_strict_subset(&self, other: &BitSet) -> bool {
        self.len < other.len && self.is_subset(other)
    }

    pub fn is_superset(&self, other: &BitSet) -> bool {
        other.is_subset(self)
    }

    /// Test whether the two sets have no member in common.
    pub fn is_disjoint(&self, other: &BitSet) -> bool {
        self.words.iter().zip(&other.words).all(|(a, b)| a & b == 0)
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = u32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
