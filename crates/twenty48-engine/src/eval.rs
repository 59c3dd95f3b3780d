//! Board evaluation from the tabulated row heuristic.

use twenty48_core::{Board, Tables};

/// Score `board`: the row heuristic summed over all four rows and all four
/// columns.
///
/// Empty cells are counted once per orientation, so open space weighs twice
/// as much as smoothness or monotonicity.
#[inline]
pub fn evaluate(tables: &Tables, board: Board) -> f32 {
    sum_rows(tables, board) + sum_rows(tables, board.transpose())
}

#[inline]
fn sum_rows(tables: &Tables, board: Board) -> f32 {
    tables.row_heuristic(board.row(0))
        + tables.row_heuristic(board.row(1))
        + tables.row_heuristic(board.row(2))
        + tables.row_heuristic(board.row(3))
}
