//! Turn sequencing and game lifecycle.

use crate::error::MoveError;
use crate::events::{GameEvent, GameObserver};
use crate::player::Player;
use crate::rules::Outcome;
use crate::selector::MoveSelector;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win for the mark.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

/// A game between two named players.
///
/// Owns the board, turn order, and outcome resolution. The status is
/// recomputed from board contents after every accepted move; once the game
/// is won or drawn, further moves are rejected until [`Game::reset`].
pub struct Game {
    board: Board,
    // players[0] holds X, players[1] holds O
    players: [Player; 2],
    to_move: Mark,
    status: GameStatus,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Creates a game between two human players.
    ///
    /// The first name plays X and moves first.
    pub fn new(x_name: impl Into<String>, o_name: impl Into<String>) -> Self {
        Self::with_players(Player::human(x_name, Mark::X), Player::human(o_name, Mark::O))
    }

    /// Creates a game where the named human (X) faces an automated
    /// opponent (O). Drive it with [`Game::play`].
    pub fn versus_computer(human_name: impl Into<String>) -> Self {
        Self::with_players(
            Player::human(human_name, Mark::X),
            Player::computer("Computer", Mark::O),
        )
    }

    fn with_players(player_x: Player, player_o: Player) -> Self {
        info!(x = player_x.name(), o = player_o.name(), "Creating new game");
        Self {
            board: Board::new(),
            players: [player_x, player_o],
            to_move: Mark::X,
            status: GameStatus::InProgress,
            observers: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Returns the player holding the given mark.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.players[0],
            Mark::O => &self.players[1],
        }
    }

    /// Returns the player whose turn it is.
    ///
    /// Irrelevant once the game is over; the turn stops advancing.
    pub fn current_player(&self) -> &Player {
        self.player(self.to_move)
    }

    /// Returns the name of the player whose turn it is.
    pub fn current_player_name(&self) -> &str {
        self.current_player().name()
    }

    /// Returns the winning player, once the game is won.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(mark) => Some(self.player(mark)),
            _ => None,
        }
    }

    /// Returns the winning player's name, once the game is won.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner().map(Player::name)
    }

    /// Returns a status line for display.
    pub fn status_string(&self) -> String {
        match self.status {
            GameStatus::InProgress => {
                format!("In progress. {} to move.", self.current_player_name())
            }
            GameStatus::Won(mark) => format!("Game over. {} wins!", self.player(mark).name()),
            GameStatus::Draw => "Game over. Draw!".to_string(),
        }
    }

    /// Registers an observer notified on every state change.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Applies the current player's move at `position` (0-8).
    ///
    /// Validation happens before any state change: a rejected move leaves
    /// the board untouched and does not consume the turn. On success the
    /// outcome is recomputed from the board; if the game continues the turn
    /// passes to the other player, otherwise the result is locked in.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game is already resolved,
    /// [`MoveError::OutOfBounds`] or [`MoveError::Occupied`] if the board
    /// rejects the placement.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn make_move(&mut self, position: usize) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            warn!(position, "Move rejected: game is already over");
            return Err(MoveError::GameOver);
        }

        let mark = self.to_move;
        if let Err(error) = self.board.place(position, mark) {
            warn!(position, %error, "Move rejected");
            return Err(error);
        }

        info!(position, "Mark placed");
        self.notify(GameEvent::MovePlaced { mark, position });

        match self.board.outcome() {
            Some(Outcome::Winner(winner)) => {
                self.status = GameStatus::Won(winner);
                info!(winner = self.player(winner).name(), "Game won");
                self.notify(GameEvent::GameWon { mark: winner });
            }
            Some(Outcome::Draw) => {
                self.status = GameStatus::Draw;
                info!("Game drawn");
                self.notify(GameEvent::GameDrawn);
            }
            None => {
                self.to_move = mark.opponent();
                debug!(to_move = %self.to_move, "Turn advances");
            }
        }

        Ok(self.status)
    }

    /// Plays the current turn with `selector`.
    ///
    /// Consulted when the player to move is delegated to automation rather
    /// than external input. Returns the position that was played.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game is already resolved, or
    /// [`MoveError::NoMovesAvailable`] if the selector produced nothing.
    /// A selector that picks an illegal position propagates the board's
    /// rejection, leaving all state unchanged.
    #[instrument(skip(self, selector))]
    pub fn auto_move(&mut self, selector: &mut dyn MoveSelector) -> Result<usize, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let position = selector
            .select(&self.board)
            .ok_or(MoveError::NoMovesAvailable)?;
        debug!(position, "Selector chose position");
        self.make_move(position)?;
        Ok(position)
    }

    /// Applies an externally supplied move, then lets `selector` play every
    /// automated turn that follows while the game is ongoing.
    ///
    /// One call per human action in a human-vs-computer game.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Game::make_move`] and [`Game::auto_move`]; a
    /// rejected human move returns before any automated reply.
    #[instrument(skip(self, selector))]
    pub fn play(
        &mut self,
        position: usize,
        selector: &mut dyn MoveSelector,
    ) -> Result<GameStatus, MoveError> {
        self.make_move(position)?;

        while !self.is_over() && self.current_player().is_computer() {
            self.auto_move(selector)?;
        }

        Ok(self.status)
    }

    /// Resets to a fresh board with the same two players, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Mark::X;
        self.status = GameStatus::InProgress;
        info!("Game reset");
        self.notify(GameEvent::GameReset);
    }

    fn notify(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("to_move", &self.to_move)
            .field("status", &self.status)
            .field("observers", &self.observers.len())
            .finish()
    }
}
