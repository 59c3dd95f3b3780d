//! Evaluation and search for twenty48.

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::{
    best_move, best_move_with, worst_tile, worst_tile_with, BestMove, SearchParams, WorstTile,
};
