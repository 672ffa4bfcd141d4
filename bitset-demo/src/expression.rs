use bitset::BitSet;
use tracing::debug;

/// Universe shared by every operand of the expression.
pub const UNIVERSE: u32 = 10;

/// Evaluate `A − (B Δ C) ∪ ((¬D ∩ B) − A) ∪ (C ∩ D)` over fixed operands.
pub fn evaluate() -> bitset::Result<BitSet> {
    let a = BitSet::from_values(UNIVERSE, [2, 3, 4, 5, 6])?;
    let b = BitSet::from_values(UNIVERSE, [1, 2, 4, 9])?;
    let c = BitSet::from_values(UNIVERSE, [4, 5, 7, 8])?;
    let d = BitSet::from_values(UNIVERSE, [3, 4, 6, 7, 8])?;

    let b_xor_c = b.symmetric_difference(&c)?;
    let left = a.difference(&b_xor_c)?;
    debug!(members = ?left.iter().collect::<Vec<_>>(), "A - (B ^ C)");

    let middle = d.complement()?.intersection(&b)?.difference(&a)?;
    debug!(members = ?middle.iter().collect::<Vec<_>>(), "(!D & B) - A");

    let right = c.intersection(&d)?;
    debug!(members = ?right.iter().collect::<Vec<_>>(), "C & D");

    left.union(&middle)?.union(&right)
}
