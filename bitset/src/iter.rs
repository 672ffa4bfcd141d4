use std::iter::FusedIterator;

use crate::bitset::WORD_BITS;

/// Iterator over the members of a [`BitSet`](crate::BitSet) in ascending order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    words: &'a [u64],
    /// Index of the word `current` was taken from.
    index: usize,
    /// Bits of `words[index]` not yielded yet.
    current: u64,
    remaining: u64,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(words: &'a [u64], len: u64) -> Self {
        Self {
            words,
            index: 0,
            current: words.first().copied().unwrap_or(0),
            remaining: len,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while self.current == 0 {
            if self.index + 1 >= self.words.len() {
                return None;
            }
            self.index += 1;
            self.current = self.words[self.index];
        }

        // Highest remaining bit is the smallest remaining value.
        let offset = self.current.leading_zeros();
        self.current &= !(1u64 << (WORD_BITS - 1 - offset));
        self.remaining -= 1;

        Some(self.index as u32 * WORD_BITS + offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
