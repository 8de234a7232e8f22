use std::fmt::Display;

use placement_common::Position;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlacementErr {
    /// The piece's position lies outside the 8x8 grid.
    OutOfBounds(Position),
}

impl Display for PlacementErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementErr::OutOfBounds(position) => {
                write!(f, "Cannot place a piece at {position}: outside the board")
            }
        }
    }
}

impl std::error::Error for PlacementErr {}
