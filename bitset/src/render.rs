//! Text renderings of a set for display purposes.

use std::fmt;

use crate::bitset::BitSet;

/// Displays a labelled, space-separated list of a set's members.
///
/// ```text
/// Result:
/// 1 3 4 6 7 8 9
/// ```
///
/// Every member is followed by a single space.
pub struct Members<'a> {
    label: &'a str,
    set: &'a BitSet,
}

/// Displays a labelled dump of a set's storage words.
///
/// Each word is written as 64 `1`/`0` characters, most-significant bit
/// (the smallest value of the word) first, one word per line.
pub struct BitView<'a> {
    label: &'a str,
    set: &'a BitSet,
}

impl BitSet {
    pub fn members<'a>(&'a self, label: &'a str) -> Members<'a> {
        Members { label, set: self }
    }

    pub fn bit_view<'a>(&'a self, label: &'a str) -> BitView<'a> {
        BitView { label, set: self }
    }
}

impl fmt::Display for Members<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.label)?;
        for value in self.set {
            write!(f, "{value} ")?;
        }
        Ok(())
    }
}

impl fmt::Display for BitView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.label)?;
        for word in self.set.words() {
            write!(f, "\n{word:064b}")?;
        }
        Ok(())
    }
}
