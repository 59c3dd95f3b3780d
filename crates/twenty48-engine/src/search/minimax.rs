//! Alpha-beta minimax: the player maximizes over slides, the tile generator
//! minimizes over placements.

use twenty48_core::{Board, Placement, Tables, Tile};

use crate::eval::evaluate;
use crate::search::{SearchContext, SearchParams, WorstTile, INF};

/// Try every (cell, tile) placement on `board` and return the one with the
/// lowest minimax value.
///
/// Ties keep the earliest placement: lowest cell first, a 2 before a 4.
pub(super) fn search(tables: &Tables, board: Board, params: &SearchParams) -> Option<WorstTile> {
    let mut ctx = SearchContext::new(tables);
    let mut worst: Option<WorstTile> = None;
    let mut beta = INF;

    for position in board.empty_cells() {
        for tile in Tile::ALL {
            let child = board.with_tile(position, tile.exponent());
            let score = player_node(child, params.depth, -INF, INF, &mut ctx);
            if worst.is_none() || score < beta {
                beta = score;
                worst = Some(WorstTile {
                    placement: Placement { tile, position },
                    board: child,
                    score,
                    nodes: 0,
                });
            }
        }
    }

    worst.map(|worst| WorstTile {
        nodes: ctx.nodes,
        ..worst
    })
}

/// Player to move: maximize over legal slides, one ply shallower.
///
/// Stops once `alpha` exceeds `beta`. A board with no legal slide scores
/// `-INF`.
fn player_node(board: Board, depth: u8, mut alpha: f32, beta: f32, ctx: &mut SearchContext<'_>) -> f32 {
    ctx.nodes += 1;
    let tables = ctx.tables;

    if depth == 0 {
        return evaluate(tables, board);
    }

    let mut result = -INF;
    for (_, next) in tables.moves(board) {
        result = result.max(adversary_node(next, depth - 1, alpha, beta, ctx));
        alpha = alpha.max(result);
        if alpha > beta {
            break;
        }
    }
    result
}

/// Generator to move: minimize over a 2 or a 4 in every empty cell, at the
/// same depth.
///
/// `beta` tightens after each cell; stops once it falls to `alpha`.
fn adversary_node(board: Board, depth: u8, alpha: f32, mut beta: f32, ctx: &mut SearchContext<'_>) -> f32 {
    ctx.nodes += 1;
    let tables = ctx.tables;

    if depth == 0 {
        return evaluate(tables, board);
    }

    let mut result = INF;
    for position in board.empty_cells() {
        for tile in Tile::ALL {
            let child = board.with_tile(position, tile.exponent());
            result = result.min(player_node(child, depth, alpha, beta, ctx));
        }
        beta = beta.min(result);
        if beta <= alpha {
            break;
        }
    }
    result
}
