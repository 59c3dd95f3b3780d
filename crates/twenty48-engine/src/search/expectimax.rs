//! Expectimax over player slides and random tile placements.

use twenty48_core::{Board, Tables, Tile};

use crate::eval::evaluate;
use crate::search::{BestMove, SearchContext, SearchParams, INF};

/// Search every legal slide from `board` and return the best one.
///
/// Ties keep the earliest direction in up/left/down/right order.
pub(super) fn search(tables: &Tables, board: Board, params: &SearchParams) -> Option<BestMove> {
    let mut ctx = SearchContext::new(tables);
    let mut best: Option<BestMove> = None;
    let mut alpha = -INF;

    for (direction, next) in tables.moves(board) {
        let score = chance_node(next, params.depth, &mut ctx);
        if best.is_none() || score > alpha {
            alpha = score;
            best = Some(BestMove {
                direction,
                board: next,
                score,
                nodes: 0,
            });
        }
    }

    best.map(|best| BestMove {
        nodes: ctx.nodes,
        ..best
    })
}

/// Player to move: the best slide's chance value, one ply shallower.
///
/// A board with no legal slide scores `-INF`.
fn move_node(board: Board, depth: u8, ctx: &mut SearchContext<'_>) -> f32 {
    ctx.nodes += 1;
    let tables = ctx.tables;

    if depth == 0 {
        return evaluate(tables, board);
    }

    let mut alpha = -INF;
    for (_, next) in tables.moves(board) {
        alpha = alpha.max(chance_node(next, depth - 1, ctx));
    }
    alpha
}

/// Tile to be placed: the mean over empty cells of the probability-weighted
/// value of a 2 or a 4 there. Does not consume depth.
fn chance_node(board: Board, depth: u8, ctx: &mut SearchContext<'_>) -> f32 {
    ctx.nodes += 1;
    let tables = ctx.tables;

    if depth == 0 {
        return evaluate(tables, board);
    }

    let mut total = 0.0;
    let mut empty = 0u32;
    for position in board.empty_cells() {
        empty += 1;
        for tile in Tile::ALL {
            let child = board.with_tile(position, tile.exponent());
            total += tile.weight() * move_node(child, depth, ctx);
        }
    }

    // Unreachable after a real slide, which always frees a cell
    if empty == 0 {
        return evaluate(tables, board);
    }
    total / empty as f32
}
