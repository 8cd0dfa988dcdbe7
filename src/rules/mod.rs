//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so they can be exercised and tested on their own.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a triple.
    Winner(Mark),
    /// Board full with no completed triple.
    Draw,
}

impl Outcome {
    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the board was drawn.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{mark} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board: a completed triple wins, a full board draws,
/// anything else is still ongoing.
#[instrument]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some(mark) = check_winner(board) {
        Some(Outcome::Winner(mark))
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}
