//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square, WinningLine};
use tracing::instrument;

/// The 8 winning triples, checked in this order: rows, columns, diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line in [`WINNING_LINES`] whose three squares hold the
/// same marker, or `None`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    WINNING_LINES
        .into_iter()
        .find(|&[a, b, c]| {
            let sq = board.get(a);
            sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
        })
        .map(WinningLine::new)
}

/// Returns the player holding a winning line, if any.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|line| board.get(line.first()).player())
}
