use std::fmt::Display;

use placement_common::{PieceKind, Position};
use serde_derive::Serialize;

/// What happened when a piece was asked to move.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    Moved {
        kind: PieceKind,
        color: String,
        from: Position,
        to: Position,
    },
    Rejected {
        kind: PieceKind,
        color: String,
        attempted: Position,
    },
}

impl MoveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    pub fn kind(&self) -> PieceKind {
        match self {
            MoveOutcome::Moved { kind, .. } | MoveOutcome::Rejected { kind, .. } => *kind,
        }
    }
}

impl Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Moved {
                kind,
                color,
                from,
                to,
            } => write!(f, "{kind} ({color}) moves from {from} to {to}"),
            MoveOutcome::Rejected { kind, color, .. } => {
                write!(f, "Invalid move for {kind} ({color})")
            }
        }
    }
}
