//! Turn invariant: the current player follows from the mark counts.

use super::Invariant;
use crate::{GameState, GameStatus, Player, Square};

/// Invariant: the current player is determined by the board.
///
/// While in progress the player to move is X when both players have the same
/// number of marks and O otherwise. Once the game is over the marker is left
/// on the player who moved last, and for a win that is the player holding the
/// winning line.
pub struct TurnMatchesMarksInvariant;

impl Invariant<GameState> for TurnMatchesMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let x_ahead = board.count(Player::X) > board.count(Player::O);
        let current = state.current_player();

        match state.status() {
            GameStatus::InProgress => current == if x_ahead { Player::O } else { Player::X },
            GameStatus::Draw => current == if x_ahead { Player::X } else { Player::O },
            GameStatus::Won(line) => {
                let last_mover = if x_ahead { Player::X } else { Player::O };
                current == last_mover && board.get(line.first()) == Square::Occupied(current)
            }
        }
    }

    fn description() -> &'static str {
        "Current player follows from the mark counts"
    }
}
