//! Game events and the observer hook.
//!
//! The engine notifies registered observers after every state change.
//! Display layers subscribe to react to moves and results without the
//! engine knowing anything about rendering.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Something that happened in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed on the board.
    MovePlaced {
        /// The mark that was placed.
        mark: Mark,
        /// Board position (0-8).
        position: usize,
    },
    /// The game ended with a winner.
    GameWon {
        /// The winning mark.
        mark: Mark,
    },
    /// The game ended in a draw.
    GameDrawn,
    /// The game was reset to its initial state.
    GameReset,
}

/// Observer notified by [`Game`](crate::Game) on every state change.
pub trait GameObserver {
    /// Called after `event` has been applied to the game.
    fn on_event(&mut self, event: &GameEvent);
}
