//! The 4x4 board packed into a single `u64`.

use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, ParseError};
use crate::row::Row;
use crate::tile::MAX_EXPONENT;

/// Lowest bit of every nibble.
const NIBBLE_LOW_BITS: u64 = 0x1111_1111_1111_1111;

/// Complete game state: sixteen 4-bit exponents.
///
/// The least-significant 16 bits hold the top row; within a row the
/// least-significant nibble is the leftmost cell. Cell `p` therefore lives
/// at bits `4p..4p+4`, with `p` counted row-major from the top-left.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board(u64);

impl Board {
    /// Number of cells.
    pub const CELLS: usize = 16;

    /// Board with every cell empty.
    pub const EMPTY: Board = Board(0);

    /// Create a board from its raw packed bits.
    #[inline]
    pub const fn new(bits: u64) -> Board {
        Board(bits)
    }

    /// Return the underlying `u64`.
    #[inline]
    pub const fn inner(self) -> u64 {
        self.0
    }

    /// Pack sixteen displayed tile values (0 for empty), row-major.
    pub fn from_tiles(values: &[u32]) -> Result<Board, BoardError> {
        if values.len() != Self::CELLS {
            return Err(BoardError::WrongCellCount {
                found: values.len(),
            });
        }

        let mut bits = 0u64;
        for &value in values.iter().rev() {
            bits = bits << 4 | u64::from(exponent_of(value)?);
        }
        Ok(Board(bits))
    }

    /// Displayed tile values, row-major, 0 for empty cells.
    pub fn tiles(self) -> [u32; 16] {
        let mut values = [0u32; 16];
        for (position, value) in values.iter_mut().enumerate() {
            let exponent = self.tile(position);
            if exponent != 0 {
                *value = 1 << exponent;
            }
        }
        values
    }

    /// Exponent stored at `position` (0 = empty).
    #[inline]
    pub const fn tile(self, position: usize) -> u8 {
        debug_assert!(position < 16);
        (self.0 >> (4 * position) & 0xF) as u8
    }

    /// Return `true` if the cell at `position` holds no tile.
    #[inline]
    pub const fn is_empty_cell(self, position: usize) -> bool {
        self.tile(position) == 0
    }

    /// OR `exponent` into the cell at `position`.
    ///
    /// The cell must be empty: existing bits are not cleared. Use
    /// [`Board::try_with_tile`] when that is not already guaranteed.
    #[inline]
    pub const fn with_tile(self, position: usize, exponent: u8) -> Board {
        debug_assert!(self.is_empty_cell(position), "cell is already occupied");
        Board(self.0 | ((exponent & 0xF) as u64) << (4 * position))
    }

    /// Checked variant of [`Board::with_tile`].
    pub fn try_with_tile(self, position: usize, exponent: u8) -> Result<Board, BoardError> {
        if position >= Self::CELLS {
            return Err(BoardError::PositionOutOfRange { position });
        }
        if !self.is_empty_cell(position) {
            return Err(BoardError::CellOccupied { position });
        }
        Ok(self.with_tile(position, exponent))
    }

    /// Row `index` (0 = top).
    #[inline]
    pub const fn row(self, index: usize) -> Row {
        Row::new((self.0 >> (16 * index)) as u16)
    }

    /// Reflect across the main diagonal, so rows become columns.
    ///
    /// Swaps nibbles within each 2x2 block, then swaps the off-diagonal
    /// 2x2 blocks.
    #[inline]
    pub const fn transpose(self) -> Board {
        let b = self.0;
        let keep = b & 0xF0F0_0F0F_F0F0_0F0F;
        let left = b & 0x0000_F0F0_0000_F0F0;
        let right = b & 0x0F0F_0000_0F0F_0000;
        let b = keep | left << 12 | right >> 12;

        let keep = b & 0xFF00_FF00_00FF_00FF;
        let left = b & 0x0000_0000_FF00_FF00;
        let right = b & 0x00FF_00FF_0000_0000;
        Board(keep | left << 24 | right >> 24)
    }

    /// One bit per empty cell, at the lowest bit of that cell's nibble.
    #[inline]
    const fn empty_mask(self) -> u64 {
        let b = self.0 | self.0 >> 1;
        let b = b | b >> 2;
        !b & NIBBLE_LOW_BITS
    }

    /// Number of empty cells.
    #[inline]
    pub const fn empty_count(self) -> u32 {
        self.empty_mask().count_ones()
    }

    /// Positions of the empty cells in ascending order.
    #[inline]
    pub fn empty_cells(self) -> EmptyCells {
        EmptyCells(self.empty_mask())
    }

    /// Largest exponent on the board.
    pub fn max_exponent(self) -> u8 {
        (0..Self::CELLS).map(|p| self.tile(p)).max().unwrap_or(0)
    }

    /// Return a wrapper that displays the board as a grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

/// Convert a displayed tile value into its stored exponent.
pub fn exponent_of(value: u32) -> Result<u8, BoardError> {
    if value == 0 {
        return Ok(0);
    }
    if !value.is_power_of_two() {
        return Err(BoardError::NotPowerOfTwo { value });
    }
    let exponent = value.trailing_zeros();
    if exponent > u32::from(MAX_EXPONENT) {
        return Err(BoardError::TileTooLarge { value });
    }
    Ok(exponent as u8)
}

/// Iterator over empty cell positions, lowest first.
#[derive(Debug, Clone)]
pub struct EmptyCells(u64);

impl Iterator for EmptyCells {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            let position = (self.0.trailing_zeros() / 4) as usize;
            self.0 &= self.0 - 1;
            Some(position)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for EmptyCells {}

/// Space-separated displayed values, row-major. Parses back with [`FromStr`].
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.tiles().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:#018x})", self.0)
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Board, ParseError> {
        let values = s
            .split_whitespace()
            .map(|token| {
                token.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
                    found: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Board::from_tiles(&values)?)
    }
}

/// Wrapper for pretty-printing a board as a 4x4 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiles = self.0.tiles();
        for (y, row) in tiles.chunks(Row::LEN).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for value in row {
                if *value == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{value:>6}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::{exponent_of, Board};
    use crate::error::{BoardError, ParseError};

    #[test]
    fn from_tiles_packs_row_major() {
        let mut values = [0u32; 16];
        values[0] = 2;
        values[1] = 4;
        values[4] = 8;
        values[15] = 32_768;
        let board = Board::from_tiles(&values).unwrap();
        assert_eq!(board.inner(), 0xF000_0000_0003_0021);
        assert_eq!(board.tile(0), 1);
        assert_eq!(board.tile(1), 2);
        assert_eq!(board.tile(4), 3);
        assert_eq!(board.tile(15), 15);
        assert_eq!(board.tiles(), values);
    }

    #[test]
    fn from_tiles_rejects_bad_input() {
        assert_eq!(
            Board::from_tiles(&[2, 4]),
            Err(BoardError::WrongCellCount { found: 2 })
        );
        let mut values = [0u32; 16];
        values[3] = 6;
        assert_eq!(
            Board::from_tiles(&values),
            Err(BoardError::NotPowerOfTwo { value: 6 })
        );
        values[3] = 65_536;
        assert_eq!(
            Board::from_tiles(&values),
            Err(BoardError::TileTooLarge { value: 65_536 })
        );
    }

    #[test]
    fn exponent_of_values() {
        assert_eq!(exponent_of(0), Ok(0));
        assert_eq!(exponent_of(1), Ok(0));
        assert_eq!(exponent_of(2), Ok(1));
        assert_eq!(exponent_of(2048), Ok(11));
    }

    #[test]
    fn with_tile_sets_nibble() {
        let board = Board::EMPTY.with_tile(5, 2).with_tile(15, 1);
        assert_eq!(board.tile(5), 2);
        assert_eq!(board.tile(15), 1);
        assert_eq!(board.inner(), 0x1000_0000_0020_0000);
    }

    #[test]
    fn try_with_tile_checks_cell() {
        let board = Board::EMPTY.with_tile(3, 1);
        assert_eq!(
            board.try_with_tile(3, 2),
            Err(BoardError::CellOccupied { position: 3 })
        );
        assert_eq!(
            board.try_with_tile(16, 2),
            Err(BoardError::PositionOutOfRange { position: 16 })
        );
        assert_eq!(board.try_with_tile(4, 2).map(|b| b.tile(4)), Ok(2));
    }

    #[test]
    fn rows() {
        let board = Board::new(0x4444_3333_2222_1111);
        assert_eq!(board.row(0).inner(), 0x1111);
        assert_eq!(board.row(3).inner(), 0x4444);
    }

    #[test]
    fn transpose_moves_each_cell() {
        let board = Board::new(0xFEDC_BA98_7654_3210);
        let t = board.transpose();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(t.tile(x * 4 + y), board.tile(y * 4 + x));
            }
        }
    }

    #[test]
    fn transpose_is_self_inverse() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x2048);
        for _ in 0..10_000 {
            let board = Board::new(rng.gen_range(0..=u64::MAX));
            assert_eq!(board.transpose().transpose(), board);
        }
    }

    #[test]
    fn empty_cells_in_order() {
        let board = Board::EMPTY.with_tile(0, 1).with_tile(2, 3).with_tile(15, 15);
        let cells: Vec<_> = board.empty_cells().collect();
        assert_eq!(cells.len(), 13);
        assert_eq!(cells[0], 1);
        assert_eq!(cells[1], 3);
        assert_eq!(*cells.last().unwrap(), 14);
        assert_eq!(board.empty_count(), 13);
        assert_eq!(board.empty_cells().len(), 13);
        assert_eq!(Board::EMPTY.empty_count(), 16);
        assert_eq!(Board::new(u64::MAX).empty_count(), 0);
    }

    #[test]
    fn max_exponent() {
        assert_eq!(Board::EMPTY.max_exponent(), 0);
        assert_eq!(Board::EMPTY.with_tile(9, 11).with_tile(1, 3).max_exponent(), 11);
    }

    #[test]
    fn display_parse_roundtrip() {
        let text = "2 0 0 4 0 8 0 0 0 0 16 0 2048 0 0 2";
        let board: Board = text.parse().unwrap();
        assert_eq!(format!("{board}"), text);
        assert_eq!(board.tile(12), 11);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "2 x 0".parse::<Board>(),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "2 4 8".parse::<Board>(),
            Err(ParseError::InvalidBoard { .. })
        ));
    }

    #[test]
    fn pretty_print() {
        let board: Board = "2 0 0 4 0 0 0 0 0 0 0 0 0 0 0 1024".parse().unwrap();
        let output = format!("{}", board.pretty());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "     2     .     .     4");
        assert_eq!(lines[3], "     .     .     .  1024");
    }

    #[test]
    fn debug_shows_hex() {
        assert_eq!(format!("{:?}", Board::new(0x21)), "Board(0x0000000000000021)");
    }
}
