mod board;
mod move_outcome;
mod piece;
mod player;
mod script;

pub use board::{Board, PlacementErr};
pub use move_outcome::MoveOutcome;
pub use piece::Piece;
pub use player::Player;
pub use script::{run_script, ScriptErr, ScriptReport};
