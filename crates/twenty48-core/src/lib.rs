//! Core 2048 types: packed board, row lookup tables, slides and tile placement.

mod board;
mod direction;
mod error;
mod heuristic;
mod row;
mod slide;
mod spawn;
mod tables;
mod tile;

pub use board::{exponent_of, Board, EmptyCells, PrettyBoard};
pub use direction::Direction;
pub use error::{BoardError, ParseError};
pub use heuristic::row_heuristic;
pub use row::Row;
pub use spawn::{add_random_tile, draw_tile};
pub use tables::Tables;
pub use tile::{Placement, Tile, MAX_EXPONENT, WIN_EXPONENT};
