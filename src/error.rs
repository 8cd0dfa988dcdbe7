//! Error type for move validation.

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: the board and game are left unchanged and
/// the caller may retry with a different position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position is beyond the board (valid positions are 0-8).
    #[display("Position {} is out of bounds (0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// A move selector produced no position.
    #[display("No moves available")]
    NoMovesAvailable,
}

impl std::error::Error for MoveError {}
