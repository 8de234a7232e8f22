mod piece_kind;
mod position;

pub use piece_kind::{PieceKind, UnknownPieceKind};
pub use position::Position;
