//! Move selection for automated players.

use crate::types::Board;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Strategy consulted when a player's turn is delegated to automation.
pub trait MoveSelector {
    /// Picks a position (0-8) among the board's empty squares.
    ///
    /// Returns `None` only when the board has no empty squares.
    fn select(&mut self, board: &Board) -> Option<usize>;
}

/// Picks a uniformly random empty square.
///
/// Samples directly from the set of currently-empty positions, so a legal
/// move is found in one step whenever one exists. The RNG is seeded, and
/// the same seed reproduces the same move sequence.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: ChaCha8Rng,
}

impl RandomSelector {
    /// Creates a selector with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new(rand::random())
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, board: &Board) -> Option<usize> {
        let open = board.empty_positions();
        let choice = open.choose(&mut self.rng).copied();
        debug!(?choice, open = open.len(), "Random selector picked");
        choice
    }
}

/// Picks the first empty square, lowest index first.
///
/// Deterministic, which makes it the selector of choice in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmptySelector;

impl MoveSelector for FirstEmptySelector {
    fn select(&mut self, board: &Board) -> Option<usize> {
        board.empty_positions().first().copied()
    }
}
