//! Status consistency invariant: the recorded status agrees with the board.

use super::Invariant;
use crate::rules::{is_full, winning_line};
use crate::{GameState, GameStatus};

/// Invariant: the status is exactly what the rules say about the board.
///
/// - `Won(line)` iff `line` is the board's first winning line
/// - `Draw` iff the board is full with no winning line
/// - `InProgress` otherwise
pub struct StatusMatchesBoardInvariant;

impl Invariant<GameState> for StatusMatchesBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let expected = match winning_line(board) {
            Some(line) => GameStatus::Won(line),
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
        *state.status() == expected
    }

    fn description() -> &'static str {
        "Status matches the winning line and fullness of the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Player, Position, Square};

    #[test]
    fn test_holds_through_a_won_game() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index);
            assert!(StatusMatchesBoardInvariant::holds(engine.state()));
        }
        assert!(engine.status().is_over());
    }

    #[test]
    fn test_missed_win_violates() {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            state.board.set(pos, Square::Occupied(Player::X));
        }
        assert!(!StatusMatchesBoardInvariant::holds(&state));
    }

    #[test]
    fn test_premature_draw_violates() {
        let mut state = GameState::new();
        state.status = GameStatus::Draw;
        assert!(!StatusMatchesBoardInvariant::holds(&state));
    }
}
