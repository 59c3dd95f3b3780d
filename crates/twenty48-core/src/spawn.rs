//! Random tile placement.

use rand::Rng;

use crate::board::Board;
use crate::error::BoardError;
use crate::tile::{Placement, Tile};

/// Draw the value of a new tile: a 4 one time in ten, otherwise a 2.
pub fn draw_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_range(0..10u32) == 0 {
        Tile::Four
    } else {
        Tile::Two
    }
}

/// Place a randomly drawn tile in a uniformly random empty cell.
///
/// The tile value is drawn first, then cell indices are sampled from
/// `0..16` until an empty one comes up. A full board is rejected up front
/// instead of sampling forever.
pub fn add_random_tile<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Result<Placement, BoardError> {
    if board.empty_count() == 0 {
        return Err(BoardError::BoardFull);
    }

    let tile = draw_tile(rng);
    loop {
        let position = rng.gen_range(0..Board::CELLS as u32) as usize;
        if board.is_empty_cell(position) {
            *board = board.with_tile(position, tile.exponent());
            return Ok(Placement { tile, position });
        }
    }
}
