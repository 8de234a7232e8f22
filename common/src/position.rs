use std::fmt::Display;

use serde_derive::{Deserialize, Serialize};

/// A (row, column) pair. Row 0 is the top row of a rendered board.
///
/// Axes are conventionally in `0..=7` but nothing here enforces it; a position
/// only has to be on the board once it is placed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub(crate) row: i8,
    pub(crate) col: i8,
}

impl Position {
    pub const BOARD_SIZE: i8 = 8;

    pub const fn new(row: i8, col: i8) -> Position {
        Position { row, col }
    }

    pub const fn row(&self) -> i8 {
        self.row
    }

    pub const fn col(&self) -> i8 {
        self.col
    }

    pub const fn is_on_board(&self) -> bool {
        self.row >= 0 && self.row < Self::BOARD_SIZE && self.col >= 0 && self.col < Self::BOARD_SIZE
    }

    /// Absolute (row, column) distance to `other`.
    pub fn distance_to(&self, other: &Position) -> (u8, u8) {
        (
            (self.row as i16 - other.row as i16).unsigned_abs() as u8,
            (self.col as i16 - other.col as i16).unsigned_abs() as u8,
        )
    }

    /// Row-major index into an 8x8 grid, or `None` when off the board.
    pub fn as_index(&self) -> Option<usize> {
        if !self.is_on_board() {
            return None;
        }
        Some(self.row as usize * Self::BOARD_SIZE as usize + self.col as usize)
    }

    pub fn all_positions() -> impl Iterator<Item = Position> {
        (0..Self::BOARD_SIZE)
            .flat_map(|row| (0..Self::BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl From<(i8, i8)> for Position {
    fn from(value: (i8, i8)) -> Self {
        Position::new(value.0, value.1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use crate::Position;

    #[test]
    fn displays_as_pair() {
        assert_eq!("(0, 5)", Position::new(0, 5).to_string());
        assert_eq!("(-1, 8)", Position::new(-1, 8).to_string());
    }

    #[test]
    fn on_board_bounds() {
        assert!(Position::new(0, 0).is_on_board());
        assert!(Position::new(7, 7).is_on_board());
        assert!(!Position::new(8, 0).is_on_board());
        assert!(!Position::new(0, -1).is_on_board());
    }

    #[test]
    fn index_is_row_major() {
        assert_eq!(Some(0), Position::new(0, 0).as_index());
        assert_eq!(Some(9), Position::new(1, 1).as_index());
        assert_eq!(Some(63), Position::new(7, 7).as_index());
        assert_eq!(None, Position::new(7, 8).as_index());
    }

    #[test]
    fn distance_is_absolute() {
        assert_eq!((2, 1), Position::new(7, 1).distance_to(&Position::new(5, 2)));
        assert_eq!((2, 1), Position::new(5, 2).distance_to(&Position::new(7, 1)));
        assert_eq!((0, 0), Position::new(3, 3).distance_to(&Position::new(3, 3)));
    }

    #[test]
    fn all_positions_covers_the_board() {
        let positions = Position::all_positions().collect::<Vec<_>>();
        assert_eq!(64, positions.len());
        assert_eq!(Position::new(0, 0), positions[0]);
        assert_eq!(Position::new(0, 1), positions[1]);
        assert_eq!(Position::new(7, 7), positions[63]);
    }
}
