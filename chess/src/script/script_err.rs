use std::fmt::Display;

use placement_common::UnknownPieceKind;

use crate::PlacementErr;

#[derive(Debug)]
pub enum ScriptErr {
    /// A piece was requested by a name that is not a known kind.
    UnknownPieceKind(UnknownPieceKind),
    /// A piece could not be put on the board.
    Placement(PlacementErr),
}

impl From<UnknownPieceKind> for ScriptErr {
    fn from(value: UnknownPieceKind) -> Self {
        Self::UnknownPieceKind(value)
    }
}

impl From<PlacementErr> for ScriptErr {
    fn from(value: PlacementErr) -> Self {
        Self::Placement(value)
    }
}

impl Display for ScriptErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptErr::UnknownPieceKind(err) => write!(f, "{err}"),
            ScriptErr::Placement(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ScriptErr {}
