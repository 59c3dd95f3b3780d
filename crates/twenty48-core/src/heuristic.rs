//! Desirability score of a single row, tabulated by [`Tables`](crate::Tables).

/// Score a row of four exponents as openness + smoothness + monotonicity.
///
/// - openness: number of empty cells.
/// - smoothness: minus the exponent gap between each tile and the next
///   tile to its right, skipping empty cells.
/// - monotonicity: the less negative of the decreasing and increasing
///   penalties over adjacent pairs.
pub fn row_heuristic(cells: [u8; 4]) -> f32 {
    let cells = cells.map(i32::from);

    let openness = cells.iter().filter(|&&c| c == 0).count() as i32;

    let mut smoothness = 0;
    for (i, &cell) in cells.iter().enumerate() {
        if cell == 0 {
            continue;
        }
        if let Some(&next) = cells[i + 1..].iter().find(|&&c| c != 0) {
            smoothness -= (cell - next).abs();
        }
    }

    let mut left_mon = 0;
    let mut right_mon = 0;
    for pair in cells.windows(2) {
        if pair[0] > pair[1] {
            left_mon += pair[1] - pair[0];
        } else {
            right_mon += pair[0] - pair[1];
        }
    }
    let monotonicity = left_mon.max(right_mon);

    (openness + smoothness + monotonicity) as f32
}
