//! Balanced marks invariant: X leads O by at most one mark.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X moves first and players alternate, so X is never behind and never more
/// than one mark ahead.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Position, Square};

    #[test]
    fn test_empty_game_holds() {
        assert!(BalancedMarksInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_each_move() {
        let mut engine = GameEngine::new();
        for index in [4, 0, 8, 2] {
            engine.apply_move(index);
            assert!(BalancedMarksInvariant::holds(engine.state()));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut state = GameState::new();
        state.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!BalancedMarksInvariant::holds(&state));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut state = GameState::new();
        state.board.set(Position::Center, Square::Occupied(Player::X));
        state.board.set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(!BalancedMarksInvariant::holds(&state));
    }
}
