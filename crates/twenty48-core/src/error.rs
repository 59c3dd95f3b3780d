//! Error types for board construction, tile placement and text parsing.

/// Errors from building or mutating a [`Board`](crate::board::Board) through
/// the checked entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A grid did not describe exactly 16 cells.
    #[error("expected 16 cells, found {found}")]
    WrongCellCount {
        /// Number of cells supplied.
        found: usize,
    },
    /// A nonzero displayed tile value is not a power of two.
    #[error("tile value {value} is not a power of two")]
    NotPowerOfTwo {
        /// The rejected displayed value.
        value: u32,
    },
    /// A displayed tile value does not fit in a 4-bit exponent.
    #[error("tile value {value} exceeds the largest tile 32768")]
    TileTooLarge {
        /// The rejected displayed value.
        value: u32,
    },
    /// A cell index outside `0..16`.
    #[error("cell position {position} is out of range")]
    PositionOutOfRange {
        /// The rejected cell index.
        position: usize,
    },
    /// A placement targeted a cell that already holds a tile.
    #[error("cell {position} is already occupied")]
    CellOccupied {
        /// The occupied cell index.
        position: usize,
    },
    /// A random placement was requested on a board with no empty cell.
    #[error("board has no empty cell")]
    BoardFull,
}

/// Errors that occur when parsing boards or directions from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The string is not one of the four direction names.
    #[error("invalid direction: \"{found}\"")]
    InvalidDirection {
        /// The unrecognized string.
        found: String,
    },
    /// A board cell is not a non-negative integer.
    #[error("invalid tile value: \"{found}\"")]
    InvalidNumber {
        /// The unparsable token.
        found: String,
    },
    /// The values parsed but do not form a valid board.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },
}
