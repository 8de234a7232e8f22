mod script_err;
pub use script_err::ScriptErr;

use std::fmt::Display;

use log::info;
use placement_common::Position;

use crate::{Board, MoveOutcome, Piece, Player};

/// Everything the demonstration produced, in the order it happened.
#[derive(Clone, Debug)]
pub struct ScriptReport {
    pub players: [Player; 2],
    /// Rosters as they were before any move.
    pub rosters: String,
    pub board: Board,
    pub moves: Vec<MoveOutcome>,
}

impl Display for ScriptReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rosters)?;
        write!(f, "{}", self.board)?;
        for outcome in self.moves.iter() {
            writeln!(f, "{}", outcome)?;
        }
        Ok(())
    }
}

/// Runs the fixed two-player demonstration.
pub fn run_script() -> Result<ScriptReport, ScriptErr> {
    let mut alice = Player::new("Alice", "White");
    let mut bob = Player::new("Bob", "Black");

    alice.add_piece(Piece::rook("White", Position::new(0, 0)));
    alice.add_piece_by_name("bishop", Position::new(0, 2))?;
    bob.add_piece_by_name("knight", Position::new(7, 1))?;

    let rosters = format!("{alice}{bob}");

    let mut board = Board::new();
    alice.place_all(&mut board)?;
    bob.place_all(&mut board)?;
    info!("board snapshot taken with {} pieces", alice.pieces().len() + bob.pieces().len());

    let moves = [
        alice.move_piece(0, Position::new(0, 5)),
        alice.move_piece(1, Position::new(2, 4)),
        bob.move_piece(0, Position::new(5, 2)),
        bob.move_piece(0, Position::new(6, 6)),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();

    Ok(ScriptReport {
        players: [alice, bob],
        rosters,
        board,
        moves,
    })
}
