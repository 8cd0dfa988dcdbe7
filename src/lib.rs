//! Tic-tac-toe game engine.
//!
//! Board representation, move validation, turn sequencing, and win/tie
//! detection for a two-player game, plus the read surface a display layer
//! needs: cells, current player name, winner name, status text.
//!
//! # Architecture
//!
//! - **Board**: owns the 9-square grid, validates placements, evaluates
//!   outcomes. Knows nothing about players or turns.
//! - **Game**: owns the two named players, turn order, and outcome
//!   resolution (mark to player name). Composes [`Board`].
//! - **Selectors**: pluggable [`MoveSelector`] strategies the game consults
//!   when a player's turn is delegated to automation.
//! - **Events**: a [`GameObserver`] hook notified on every state change,
//!   for display layers to react to.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus};
//!
//! let mut game = Game::new("Alice", "Bob");
//! game.make_move(4)?; // Alice (X) takes the center
//! assert_eq!(game.current_player_name(), "Bob");
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod events;
mod game;
mod player;
mod rules;
mod selector;
mod types;
mod view;

// Crate-level exports - errors
pub use error::MoveError;

// Crate-level exports - events
pub use events::{GameEvent, GameObserver};

// Crate-level exports - game engine
pub use game::{Game, GameStatus};

// Crate-level exports - players
pub use player::{Player, PlayerKind};

// Crate-level exports - rules
pub use rules::{check_winner, evaluate, is_full, Outcome};

// Crate-level exports - move selection
pub use selector::{FirstEmptySelector, MoveSelector, RandomSelector};

// Crate-level exports - board types
pub use types::{Board, Mark, Square};

// Crate-level exports - presentation snapshot
pub use view::GameView;
