mod placement_err;
pub use placement_err::PlacementErr;

use std::{array::from_fn, fmt::Display};

use log::{debug, warn};
use placement_common::Position;

use crate::Piece;

const SIZE: usize = Position::BOARD_SIZE as usize;

/// An 8x8 grid of piece snapshots.
///
/// Placing a piece copies it into the cell matching its position at that
/// moment. Later moves of the piece are not seen by the board; call
/// [`Board::clear`] and place the pieces again to refresh it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: from_fn(|_| from_fn(|_| None)),
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a copy of `piece` on the cell at its current position.
    /// An occupied cell is overwritten.
    pub fn place_piece(&mut self, piece: &Piece) -> Result<(), PlacementErr> {
        let position = piece.position();
        if !position.is_on_board() {
            return Err(PlacementErr::OutOfBounds(position));
        }

        let cell = &mut self.cells[position.row() as usize][position.col() as usize];
        if let Some(previous) = cell.as_ref() {
            warn!("{:?} replaces {:?}", piece, previous);
        }
        debug!("placed {:?}", piece);
        *cell = Some(piece.clone());
        Ok(())
    }

    pub fn piece_at(&self, position: &Position) -> Option<&Piece> {
        if !position.is_on_board() {
            return None;
        }
        self.cells[position.row() as usize][position.col() as usize].as_ref()
    }

    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = None;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_none())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Chessboard:")?;
        for row in self.cells.iter() {
            let mut line = String::with_capacity(SIZE * 2);
            for cell in row.iter() {
                match cell {
                    Some(piece) => line.push(piece.kind().as_char()),
                    None => line.push_str(". "),
                }
            }
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
