//! Player identity types.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// How a player's moves are supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from external input (a click, a prompt).
    Human,
    /// Moves are delegated to a [`MoveSelector`](crate::MoveSelector).
    Computer,
}

/// A player in a game: display name plus assigned mark.
///
/// Players are fixed for the lifetime of a game; a reset keeps the
/// same two players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    mark: Mark,
    kind: PlayerKind,
}

impl Player {
    /// Creates a human player.
    pub fn human(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            kind: PlayerKind::Human,
        }
    }

    /// Creates a computer player.
    pub fn computer(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            kind: PlayerKind::Computer,
        }
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Which mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// How this player's moves are supplied.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Returns true if this player's turns are delegated to automation.
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }
}
