//! Integration tests that play whole games with the searches.
//!
//! Checks that every chosen slide is legal, that searches stop cleanly on a
//! finished game, and that seeded games repeat exactly.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twenty48_core::{add_random_tile, Board, Tables};
use twenty48_engine::{best_move, best_move_with, worst_tile_with, SearchParams};

/// Upper bound on moves per game, well past where depth-1 games end.
const MOVE_CAP: u32 = 400;

/// Play a game with random tiles and depth-1 best moves. Returns the final
/// board, the score and the number of moves played.
fn play_random_game(tables: &Tables, seed: u64) -> (Board, u64, u32) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = Board::EMPTY;
    add_random_tile(&mut board, &mut rng).unwrap();
    add_random_tile(&mut board, &mut rng).unwrap();

    let params = SearchParams::with_depth(1);
    let mut score = 0u64;
    let mut moves = 0;
    while moves < MOVE_CAP {
        let Some(best) = best_move_with(tables, board, &params) else {
            assert!(tables.is_game_over(board));
            break;
        };
        let (next, gained) = tables.slide_with_score(board, best.direction);
        assert_ne!(next, board, "search chose a no-op slide");
        assert_eq!(next, best.board);

        score += u64::from(gained);
        board = next;
        add_random_tile(&mut board, &mut rng).unwrap();
        moves += 1;
    }
    (board, score, moves)
}

// ── Random tiles ──────────────────────────────────────────────────────────────

#[test]
fn seeded_games_repeat() {
    let tables = Tables::new();
    assert_eq!(play_random_game(&tables, 11), play_random_game(&tables, 11));
}

#[test]
fn games_make_progress() {
    let tables = Tables::new();
    let (board, score, moves) = play_random_game(&tables, 3);
    assert!(moves > 20, "only {moves} moves");
    assert!(score > 0);
    assert!(board.max_exponent() >= 5);
}

#[test]
fn best_move_applies_search_result() {
    let tables = Tables::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut board = Board::EMPTY;
    add_random_tile(&mut board, &mut rng).unwrap();
    add_random_tile(&mut board, &mut rng).unwrap();

    let before = board;
    let expected = best_move_with(&tables, before, &SearchParams::default()).unwrap();
    let direction = best_move(&tables, &mut board).unwrap();
    assert_eq!(direction, expected.direction);
    assert_eq!(board, tables.slide(before, direction));
}

// ── Adversarial tiles ─────────────────────────────────────────────────────────

#[test]
fn adversary_game_ends() {
    let tables = Tables::new();
    let params = SearchParams::with_depth(1);
    let mut board = Board::EMPTY.with_tile(0, 1).with_tile(5, 1);

    let mut moves = 0;
    while let Some(best) = best_move_with(&tables, board, &params) {
        let worst = worst_tile_with(&tables, best.board, &params)
            .expect("a real slide frees a cell");
        assert!(best.board.is_empty_cell(worst.placement.position));
        assert_eq!(worst.board.empty_count() + 1, best.board.empty_count());
        board = worst.board;
        moves += 1;
        assert!(moves < MOVE_CAP, "adversary failed to end the game");
    }
    assert!(tables.is_game_over(board));
}
