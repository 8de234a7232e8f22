use std::{fmt::Display, str::FromStr};

use serde_derive::{Deserialize, Serialize};

use crate::Position;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum PieceKind {
    Rook,
    Bishop,
    Knight,
}

impl PieceKind {
    pub fn all_kinds() -> impl Iterator<Item = PieceKind> {
        [Self::Rook, Self::Bishop, Self::Knight].into_iter()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rook => "Rook",
            Self::Bishop => "Bishop",
            Self::Knight => "Knight",
        }
    }

    /// First letter of the kind's name. Knight renders as `K`.
    pub const fn as_char(self) -> char {
        match self {
            Self::Rook => 'R',
            Self::Bishop => 'B',
            Self::Knight => 'K',
        }
    }

    /// Whether a piece of this kind may go from `from` to `to`.
    /// Obstruction and board bounds are not considered.
    pub fn is_valid_move(self, from: &Position, to: &Position) -> bool {
        let (row_delta, col_delta) = from.distance_to(to);
        match self {
            Self::Rook => from.row == to.row || from.col == to.col,
            Self::Bishop => row_delta == col_delta,
            Self::Knight => matches!((row_delta, col_delta), (1, 2) | (2, 1)),
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownPieceKind {
    name: String,
}

impl UnknownPieceKind {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for UnknownPieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown piece: {}", self.name)
    }
}

impl std::error::Error for UnknownPieceKind {}

impl FromStr for PieceKind {
    type Err = UnknownPieceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rook" => Ok(PieceKind::Rook),
            "bishop" => Ok(PieceKind::Bishop),
            "knight" => Ok(PieceKind::Knight),
            _ => Err(UnknownPieceKind::new(s)),
        }
    }
}
