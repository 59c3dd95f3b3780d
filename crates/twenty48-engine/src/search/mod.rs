//! Game-tree search: the best slide for the player and the worst tile for
//! an adversarial generator.

mod expectimax;
mod minimax;

use tracing::debug;

use twenty48_core::{Board, Direction, Placement, Tables};

/// Score bound used as the starting value of max and min nodes.
pub const INF: f32 = 1e8;

/// Player plies searched by default.
pub const DEFAULT_DEPTH: u8 = 3;

/// Knobs shared by both searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Player plies to search. Only player moves consume depth; tile
    /// placements are searched at the depth of the move that preceded them.
    pub depth: u8,
}

impl SearchParams {
    /// Parameters with the given depth.
    pub const fn with_depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }
}

/// Outcome of a best-move search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMove {
    /// Chosen slide.
    pub direction: Direction,
    /// Board after the slide, before any new tile.
    pub board: Board,
    /// Expected score of the chosen slide.
    pub score: f32,
    /// Nodes visited.
    pub nodes: u64,
}

/// Outcome of a worst-tile search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorstTile {
    /// Chosen tile and cell.
    pub placement: Placement,
    /// Board with the tile placed.
    pub board: Board,
    /// Minimax score of the placement.
    pub score: f32,
    /// Nodes visited.
    pub nodes: u64,
}

/// Search state threaded through the recursive node functions.
pub(crate) struct SearchContext<'a> {
    /// Row lookup tables.
    pub tables: &'a Tables,
    /// Total nodes visited.
    pub nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(tables: &'a Tables) -> Self {
        Self { tables, nodes: 0 }
    }
}

/// Pick the player's best slide at the default depth and apply it to `board`.
///
/// Returns `None` and leaves `board` alone when no slide changes it. No new
/// tile is placed.
pub fn best_move(tables: &Tables, board: &mut Board) -> Option<Direction> {
    let result = best_move_with(tables, *board, &SearchParams::default())?;
    *board = result.board;
    Some(result.direction)
}

/// Expectimax search for the best slide from `board`.
pub fn best_move_with(tables: &Tables, board: Board, params: &SearchParams) -> Option<BestMove> {
    let result = expectimax::search(tables, board, params);
    match &result {
        Some(best) => debug!(
            direction = %best.direction,
            score = best.score,
            nodes = best.nodes,
            depth = params.depth,
            "best move"
        ),
        None => debug!(board = ?board, "no legal move"),
    }
    result
}

/// Pick the worst tile for the player at the default depth and place it on
/// `board`.
///
/// Returns `None` and leaves `board` alone when the board is full.
pub fn worst_tile(tables: &Tables, board: &mut Board) -> Option<Placement> {
    let result = worst_tile_with(tables, *board, &SearchParams::default())?;
    *board = result.board;
    Some(result.placement)
}

/// Alpha-beta search for the placement that minimizes the player's outlook.
pub fn worst_tile_with(tables: &Tables, board: Board, params: &SearchParams) -> Option<WorstTile> {
    let result = minimax::search(tables, board, params);
    match &result {
        Some(worst) => debug!(
            tile = %worst.placement.tile,
            position = worst.placement.position,
            score = worst.score,
            nodes = worst.nodes,
            depth = params.depth,
            "worst tile"
        ),
        None => debug!(board = ?board, "no empty cell"),
    }
    result
}
