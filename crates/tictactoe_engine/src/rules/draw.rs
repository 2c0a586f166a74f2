//! Draw detection logic for tic-tac-toe.

use super::win::winning_line;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if every square is occupied.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a draw: full, with no winning line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (row, marks) in rows.iter().enumerate() {
            for (column, mark) in marks.chars().enumerate() {
                let square = match mark {
                    'X' => Square::Occupied(Player::X),
                    'O' => Square::Occupied(Player::O),
                    _ => Square::Empty,
                };
                if let Some(pos) = Position::from_row_column(row, column) {
                    board.set(pos, square);
                }
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from(["XOX", "XO.", "OXX"]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = board_from(["XOX", "XOO", "OXX"]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X completes the main diagonal.
        let board = board_from(["XOO", "OXX", "XOX"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
