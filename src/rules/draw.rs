//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::{check_winner, evaluate, Outcome};
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in 0..9 {
            board.place(pos, Mark::X).unwrap();
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_evaluation() {
        let mut board = Board::new();
        // X O X / O X O / O X O - full, no triple for either mark
        for (pos, mark) in [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::O,
        ]
        .into_iter()
        .enumerate()
        {
            board.place(pos, mark).unwrap();
        }

        assert_eq!(check_winner(&board), None);
        assert_eq!(evaluate(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X wins top row
        for pos in [0, 1, 2] {
            board.place(pos, Mark::X).unwrap();
        }
        board.place(3, Mark::O).unwrap();
        board.place(4, Mark::O).unwrap();

        assert_eq!(evaluate(&board), Some(Outcome::Winner(Mark::X)));
    }
}
