//! Core domain types for tic-tac-toe.

use crate::error::MoveError;
use crate::rules::{self, Outcome};
use serde::{Deserialize, Serialize};

/// A mark placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order: rows 0-2, 3-5, 6-8;
/// columns 0,3,6 / 1,4,7 / 2,5,8; diagonals 0,4,8 / 2,4,6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, position: usize) -> Option<Square> {
        self.squares.get(position).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, position: usize) -> bool {
        matches!(self.get(position), Some(Square::Empty))
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the positions of all empty squares, lowest first.
    pub fn empty_positions(&self) -> Vec<usize> {
        (0..self.squares.len())
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Places a mark at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if `position` is not in 0-8, or
    /// [`MoveError::Occupied`] if the square is taken. The board is left
    /// unchanged on failure.
    pub fn place(&mut self, position: usize, mark: Mark) -> Result<(), MoveError> {
        if position >= self.squares.len() {
            return Err(MoveError::OutOfBounds(position));
        }
        if !self.is_empty(position) {
            return Err(MoveError::Occupied(position));
        }
        self.squares[position] = Square::Occupied(mark);
        Ok(())
    }

    /// Evaluates the board.
    ///
    /// Returns `None` while the game is ongoing, the winning mark's
    /// [`Outcome`] once a triple is complete, or [`Outcome::Draw`] when the
    /// board is full with no winner. Pure read; callable repeatedly.
    pub fn outcome(&self) -> Option<Outcome> {
        rules::evaluate(self)
    }

    /// Clears all squares back to empty.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => ' ',
                    Square::Occupied(Mark::X) => 'X',
                    Square::Occupied(Mark::O) => 'O',
                };
                write!(f, "{symbol}")?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
