//! Named board positions and their row-major indices.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board.
///
/// Positions map one-to-one onto board indices `0..9` in row-major order:
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from a board index, or `None` if `index >= 9`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from a 0-based row and column.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// Converts the position to its board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2, top to bottom).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2, left to right).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Steps by the given row/column delta, or `None` when that leaves the board.
    pub fn offset(self, rows: isize, columns: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(rows)?;
        let column = self.column().checked_add_signed(columns)?;
        Self::from_row_column(row, column)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip_covers_every_cell() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_major_layout() {
        assert_eq!((Position::TopRight.row(), Position::TopRight.column()), (0, 2));
        assert_eq!((Position::MiddleLeft.row(), Position::MiddleLeft.column()), (1, 0));
        assert_eq!((Position::BottomCenter.row(), Position::BottomCenter.column()), (2, 1));
        assert_eq!(Position::from_row_column(1, 1), Some(Position::Center));
        assert_eq!(Position::from_row_column(3, 0), None);
    }

    #[test]
    fn test_offset_stops_at_edges() {
        assert_eq!(Position::Center.offset(-1, 0), Some(Position::TopCenter));
        assert_eq!(Position::Center.offset(1, 1), Some(Position::BottomRight));
        assert_eq!(Position::TopLeft.offset(-1, 0), None);
        assert_eq!(Position::TopLeft.offset(0, -1), None);
        assert_eq!(Position::BottomRight.offset(0, 1), None);
    }
}
