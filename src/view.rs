//! Read model for presentation layers.

use crate::game::{Game, GameStatus};
use crate::types::Square;
use serde::{Deserialize, Serialize};

/// Snapshot of everything a display layer renders after a move.
///
/// The engine never reaches into presentation; a frontend takes one of
/// these after each action and redraws from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The 9 squares in row-major order.
    pub squares: [Square; 9],
    /// Current status.
    pub status: GameStatus,
    /// Name of the player to move, `None` once the game is over.
    pub to_move: Option<String>,
    /// Name of the winner, `None` unless the game is won.
    pub winner: Option<String>,
    /// Human-readable status line.
    pub status_line: String,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            squares: *game.board().squares(),
            status: game.status(),
            to_move: (!game.is_over()).then(|| game.current_player_name().to_string()),
            winner: game.winner_name().map(str::to_string),
            status_line: game.status_string(),
        }
    }
}
