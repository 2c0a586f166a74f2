//! Tic-tac-toe game-state engine.
//!
//! A small, synchronous state machine over a fixed 3x3 board:
//!
//! - **Moves**: [`GameEngine::apply_move`] places the current marker and
//!   alternates turns; invalid moves are ignored.
//! - **Rules**: win detection over a static table of 8 lines (rows, then
//!   columns, then diagonals) and draw detection on a full board.
//! - **Reset**: [`GameEngine::reset`] restores the initial state from anywhere.
//! - **Listeners**: presentation layers subscribe to state changes instead of
//!   relying on a UI framework's reactive containers.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index);
//! }
//!
//! assert_eq!(engine.winner(), Some(Player::X));
//! assert_eq!(engine.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
//!
//! engine.reset();
//! assert_eq!(engine.status(), &GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod listener;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use engine::GameEngine;
pub use error::MoveError;
pub use listener::{ListenerId, StateListener};
pub use position::Position;
pub use types::{Board, GameState, GameStatus, Player, Square, WinningLine};
