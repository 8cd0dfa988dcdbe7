//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// The 8 winning triples, checked in a fixed order for determinism.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6], // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first triple holding three equal
/// non-empty squares, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        if let Some(Square::Occupied(mark)) = board.get(a)
            && board.get(b) == Some(Square::Occupied(mark))
            && board.get(c) == Some(Square::Occupied(mark))
        {
            return Some(mark);
        }
    }

    None
}
