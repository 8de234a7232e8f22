use std::fmt::Debug;

use log::{debug, trace};
use placement_common::{PieceKind, Position};

use crate::MoveOutcome;

#[derive(Clone, PartialEq, Eq)]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) color: String,
    pub(crate) position: Position,
}

impl Piece {
    pub fn new(kind: PieceKind, color: &str, position: Position) -> Self {
        Self {
            kind,
            color: color.to_string(),
            position,
        }
    }

    pub fn rook(color: &str, position: Position) -> Self {
        Self::new(PieceKind::Rook, color, position)
    }

    pub fn bishop(color: &str, position: Position) -> Self {
        Self::new(PieceKind::Bishop, color, position)
    }

    pub fn knight(color: &str, position: Position) -> Self {
        Self::new(PieceKind::Knight, color, position)
    }

    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub fn is_valid_move(&self, to: &Position) -> bool {
        let valid = self.kind.is_valid_move(&self.position, to);
        trace!("{:?} -> {to}: valid = {valid}", self);
        valid
    }

    /// Moves the piece if its kind allows it. A rejected move is a normal
    /// outcome and leaves the position untouched.
    ///
    /// Any board this piece was placed on keeps its old snapshot.
    pub fn move_to(&mut self, to: Position) -> MoveOutcome {
        if !self.is_valid_move(&to) {
            debug!("rejected {:?} -> {to}", self);
            return MoveOutcome::Rejected {
                kind: self.kind,
                color: self.color.clone(),
                attempted: to,
            };
        }

        let from = self.position;
        self.position = to;
        debug!("moved {:?} from {from}", self);
        MoveOutcome::Moved {
            kind: self.kind,
            color: self.color.clone(),
            from,
            to,
        }
    }
}

impl Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) at {}", self.kind, self.color, self.position)
    }
}
