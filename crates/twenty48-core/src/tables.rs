//! Lookup tables indexed by every possible 16-bit row pattern.

use std::fmt;

use tracing::debug;

use crate::heuristic::row_heuristic;
use crate::row::Row;
use crate::tile::MAX_EXPONENT;

/// Precomputed per-row results, built once and read-only afterwards.
///
/// Right and down entries are keyed by the reversed row, so a lookup with
/// the row as read left-to-right (or top-to-bottom) gives the result of
/// sliding toward the far end.
pub struct Tables {
    /// Row after sliding toward the leftmost cell.
    pub(crate) left: Box<[Row]>,
    /// Row after sliding toward the rightmost cell.
    pub(crate) right: Box<[Row]>,
    /// Up-slid column, cells spread into nibble 0 of each 16-bit lane.
    pub(crate) up: Box<[u64]>,
    /// Down-slid column, same layout as `up`.
    pub(crate) down: Box<[u64]>,
    /// Row heuristic.
    pub(crate) heuristic: Box<[f32]>,
    /// Points scored by merges when sliding left.
    pub(crate) left_score: Box<[u32]>,
    /// Points scored by merges when sliding right.
    pub(crate) right_score: Box<[u32]>,
}

impl Tables {
    /// Build every table. Deterministic: repeated calls yield identical tables.
    pub fn new() -> Tables {
        let mut left = vec![Row::default(); Row::COUNT];
        let mut right = vec![Row::default(); Row::COUNT];
        let mut up = vec![0u64; Row::COUNT];
        let mut down = vec![0u64; Row::COUNT];
        let mut heuristic = vec![0f32; Row::COUNT];
        let mut left_score = vec![0u32; Row::COUNT];
        let mut right_score = vec![0u32; Row::COUNT];

        for row in Row::all() {
            let cells = row.cells();
            let reversed = row.reverse().index();

            heuristic[row.index()] = row_heuristic(cells);

            let (moved, score) = compact_left(cells);
            let moved = Row::from_cells(moved);

            left[row.index()] = moved;
            up[row.index()] = moved.spread_column();
            left_score[row.index()] = score;

            right[reversed] = moved.reverse();
            down[reversed] = moved.reverse().spread_column();
            right_score[reversed] = score;
        }

        debug!(rows = Row::COUNT, "lookup tables built");

        Tables {
            left: left.into_boxed_slice(),
            right: right.into_boxed_slice(),
            up: up.into_boxed_slice(),
            down: down.into_boxed_slice(),
            heuristic: heuristic.into_boxed_slice(),
            left_score: left_score.into_boxed_slice(),
            right_score: right_score.into_boxed_slice(),
        }
    }

    /// `row` slid toward its leftmost cell.
    #[inline]
    pub fn slide_row_left(&self, row: Row) -> Row {
        self.left[row.index()]
    }

    /// `row` slid toward its rightmost cell.
    #[inline]
    pub fn slide_row_right(&self, row: Row) -> Row {
        self.right[row.index()]
    }

    /// Heuristic score of `row`.
    #[inline]
    pub fn row_heuristic(&self, row: Row) -> f32 {
        self.heuristic[row.index()]
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tables")
            .field("rows", &self.left.len())
            .finish()
    }
}

/// Slide four exponents toward index 0, merging each pair at most once.
///
/// Returns the new cells and the merge score (sum of merged tile values).
fn compact_left(mut cells: [u8; 4]) -> ([u8; 4], u32) {
    let mut score = 0;
    let mut i = 0;
    while i < 3 {
        let Some(j) = (i + 1..4).find(|&j| cells[j] != 0) else {
            break;
        };

        if cells[i] == 0 {
            // Pull the next tile over and look at this cell again
            cells[i] = cells[j];
            cells[j] = 0;
            continue;
        }

        if cells[i] == cells[j] {
            score += 1u32 << (cells[i] + 1);
            if cells[i] != MAX_EXPONENT {
                cells[i] += 1;
            }
            cells[j] = 0;
        }
        i += 1;
    }
    (cells, score)
}
