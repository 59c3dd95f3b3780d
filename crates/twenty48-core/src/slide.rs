//! Applying a slide to a whole board via the row tables.

use crate::board::Board;
use crate::direction::Direction;
use crate::row::Row;
use crate::tables::Tables;

impl Tables {
    /// Slide every tile on `board` toward `direction`.
    ///
    /// Pure: the input is untouched. A no-op slide returns a board equal to
    /// the input.
    #[inline]
    pub fn slide(&self, board: Board, direction: Direction) -> Board {
        match direction {
            Direction::Left => self.slide_rows(board, &self.left),
            Direction::Right => self.slide_rows(board, &self.right),
            Direction::Up => self.slide_columns(board, &self.up),
            Direction::Down => self.slide_columns(board, &self.down),
        }
    }

    /// Like [`Tables::slide`], also returning the points scored by merges.
    pub fn slide_with_score(&self, board: Board, direction: Direction) -> (Board, u32) {
        let next = self.slide(board, direction);
        let (lines, scores) = match direction {
            Direction::Left => (board, &self.left_score),
            Direction::Right => (board, &self.right_score),
            Direction::Up => (board.transpose(), &self.left_score),
            Direction::Down => (board.transpose(), &self.right_score),
        };
        let score = (0..4).map(|i| scores[lines.row(i).index()]).sum();
        (next, score)
    }

    /// Every direction that changes the board, with the resulting board,
    /// in [`Direction::ALL`] order.
    pub fn moves(&self, board: Board) -> impl Iterator<Item = (Direction, Board)> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            let next = self.slide(board, direction);
            (next != board).then_some((direction, next))
        })
    }

    /// Return `true` if no direction changes the board.
    pub fn is_game_over(&self, board: Board) -> bool {
        self.moves(board).next().is_none()
    }

    #[inline]
    fn slide_rows(&self, board: Board, table: &[Row]) -> Board {
        let bits = (0..4).fold(0u64, |acc, i| {
            acc | u64::from(table[board.row(i).index()].inner()) << (16 * i)
        });
        Board::new(bits)
    }

    /// Column `c` of the board is row `c` of its transpose; the column
    /// tables already hold it spread back into column layout.
    #[inline]
    fn slide_columns(&self, board: Board, table: &[u64]) -> Board {
        let t = board.transpose();
        let bits = (0..4).fold(0u64, |acc, c| acc | table[t.row(c).index()] << (4 * c));
        Board::new(bits)
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::board::Board;
    use crate::direction::Direction;
    use crate::tables::Tables;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn slide_left_merges_row() {
        let tables = Tables::new();
        let b = board("2 2 4 0  0 0 0 0  0 0 0 0  0 0 0 0");
        assert_eq!(tables.slide(b, Direction::Left), board("4 4 0 0  0 0 0 0  0 0 0 0  0 0 0 0"));
    }

    #[test]
    fn slide_each_direction() {
        let tables = Tables::new();
        let b = board("2 0 0 2  0 0 0 0  0 0 0 0  0 0 0 4");
        assert_eq!(tables.slide(b, Direction::Left), board("4 0 0 0  0 0 0 0  0 0 0 0  4 0 0 0"));
        assert_eq!(tables.slide(b, Direction::Right), board("0 0 0 4  0 0 0 0  0 0 0 0  0 0 0 4"));
        assert_eq!(tables.slide(b, Direction::Up), board("2 0 0 2  0 0 0 4  0 0 0 0  0 0 0 0"));
        assert_eq!(tables.slide(b, Direction::Down), board("0 0 0 0  0 0 0 0  0 0 0 2  2 0 0 4"));
    }

    #[test]
    fn vertical_slides_match_transposed_horizontal() {
        let tables = Tables::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10_000 {
            let b = Board::new(rng.gen_range(0..=u64::MAX));
            let t = b.transpose();
            assert_eq!(tables.slide(b, Direction::Up), tables.slide(t, Direction::Left).transpose());
            assert_eq!(tables.slide(b, Direction::Down), tables.slide(t, Direction::Right).transpose());
        }
    }

    #[test]
    fn blocked_row_is_noop() {
        let tables = Tables::new();
        let b = board("2 4 8 16  0 0 0 0  0 0 0 0  0 0 0 0");
        assert_eq!(tables.slide(b, Direction::Left), b);
        assert_eq!(tables.slide(b, Direction::Right), b);
        assert_eq!(tables.slide(b, Direction::Up), b);
        assert_ne!(tables.slide(b, Direction::Down), b);
    }

    #[test]
    fn saturated_tiles_stay_in_field() {
        let tables = Tables::new();
        let b = board("32768 32768 0 0  0 0 0 0  0 0 0 0  0 0 0 2");
        let next = tables.slide(b, Direction::Left);
        assert_eq!(next.tile(0), 15);
        assert_eq!(next.tile(1), 0);
        assert_eq!(next.row(1).inner(), 0);
        assert_eq!(next.tile(12), 1);
    }

    #[test]
    fn slide_score() {
        let tables = Tables::new();
        let b = board("2 2 4 4  2 0 0 0  2 0 0 0  0 0 0 0");
        assert_eq!(tables.slide_with_score(b, Direction::Left).1, 4 + 8);
        assert_eq!(tables.slide_with_score(b, Direction::Right).1, 4 + 8);
        assert_eq!(tables.slide_with_score(b, Direction::Up).1, 4);
        assert_eq!(tables.slide_with_score(b, Direction::Down).1, 4);
        let (next, _) = tables.slide_with_score(b, Direction::Up);
        assert_eq!(next, tables.slide(b, Direction::Up));
    }

    #[test]
    fn moves_skip_noops() {
        let tables = Tables::new();
        let b = board("0 2 4 8  0 4 8 2  0 2 4 8  0 4 8 2");
        let moves: Vec<_> = tables.moves(b).collect();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].0, Direction::Left);
        assert_eq!(moves[0].1, board("2 4 8 0  4 8 2 0  2 4 8 0  4 8 2 0"));
    }

    #[test]
    fn game_over_only_when_all_directions_blocked() {
        let tables = Tables::new();
        let blocked = board("2 4 2 4  4 2 4 2  2 4 2 4  4 2 4 2");
        assert!(tables.is_game_over(blocked));
        let mergeable = board("2 4 2 4  4 2 4 2  2 4 2 4  4 2 4 4");
        assert!(!tables.is_game_over(mergeable));
        assert!(tables.is_game_over(Board::EMPTY));
    }
}
