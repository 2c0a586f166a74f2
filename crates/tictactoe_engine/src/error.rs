//! Reasons a move is ignored.

use crate::Position;

/// Why [`GameEngine::try_apply_move`](crate::GameEngine::try_apply_move)
/// left the state untouched.
///
/// The engine never fails: these are reported for logging and for callers
/// that want feedback, and [`GameEngine::apply_move`](crate::GameEngine::apply_move)
/// discards them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
