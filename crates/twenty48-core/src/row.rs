//! A single row of four tile exponents packed into 16 bits.

use std::fmt;

/// Four 4-bit exponents, least-significant nibble = leftmost cell.
///
/// Every one of the 65536 patterns is a valid row, whether or not it can
/// arise in play.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Row(u16);

impl Row {
    /// Number of distinct row patterns.
    pub const COUNT: usize = 1 << 16;

    /// Number of cells in a row.
    pub const LEN: usize = 4;

    /// Create a row from its raw packed bits.
    #[inline]
    pub const fn new(bits: u16) -> Row {
        Row(bits)
    }

    /// Return the underlying `u16`.
    #[inline]
    pub const fn inner(self) -> u16 {
        self.0
    }

    /// Return the row as a table index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Pack four exponents, leftmost first. Each is truncated to 4 bits.
    #[inline]
    pub const fn from_cells(cells: [u8; 4]) -> Row {
        Row((cells[0] as u16 & 0xF)
            | (cells[1] as u16 & 0xF) << 4
            | (cells[2] as u16 & 0xF) << 8
            | (cells[3] as u16 & 0xF) << 12)
    }

    /// Unpack the four exponents, leftmost first.
    #[inline]
    pub const fn cells(self) -> [u8; 4] {
        [
            (self.0 & 0xF) as u8,
            (self.0 >> 4 & 0xF) as u8,
            (self.0 >> 8 & 0xF) as u8,
            (self.0 >> 12 & 0xF) as u8,
        ]
    }

    /// Exponent in cell `i` (0 = leftmost).
    #[inline]
    pub const fn cell(self, i: usize) -> u8 {
        debug_assert!(i < 4);
        (self.0 >> (4 * i) & 0xF) as u8
    }

    /// The same cells in the opposite order.
    #[inline]
    pub const fn reverse(self) -> Row {
        let r = self.0;
        Row((r >> 12) | (r >> 4 & 0x00F0) | (r << 4 & 0x0F00) | (r << 12))
    }

    /// Spread the cells down one column: cell `k` moves to nibble 0 of
    /// 16-bit lane `k`.
    #[inline]
    pub const fn spread_column(self) -> u64 {
        let [a, b, c, d] = self.cells();
        a as u64 | (b as u64) << 16 | (c as u64) << 32 | (d as u64) << 48
    }

    /// Every row pattern in ascending order.
    pub fn all() -> impl Iterator<Item = Row> {
        (0..=u16::MAX).map(Row)
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row({:?})", self.cells())
    }
}
