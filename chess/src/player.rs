use std::fmt::Display;

use log::debug;
use placement_common::{PieceKind, Position, UnknownPieceKind};

use crate::{Board, MoveOutcome, Piece, PlacementErr};

/// A named side owning its pieces in the order they were added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: String,
    pieces: Vec<Piece>,
}

impl Player {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            pieces: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece_mut(&mut self, index: usize) -> Option<&mut Piece> {
        self.pieces.get_mut(index)
    }

    pub fn add_piece(&mut self, piece: Piece) {
        debug!("{} takes {:?}", self.name, piece);
        self.pieces.push(piece);
    }

    /// Builds a piece of the player's color from a case-insensitive kind name.
    pub fn add_piece_by_name(
        &mut self,
        kind_name: &str,
        position: Position,
    ) -> Result<(), UnknownPieceKind> {
        let kind = kind_name.parse::<PieceKind>()?;
        self.add_piece(Piece::new(kind, &self.color, position));
        Ok(())
    }

    /// Returns `None` if the player has no piece at `index`.
    pub fn move_piece(&mut self, index: usize, to: Position) -> Option<MoveOutcome> {
        self.piece_mut(index).map(|piece| piece.move_to(to))
    }

    /// Places every piece on `board` in roster order.
    pub fn place_all(&self, board: &mut Board) -> Result<(), PlacementErr> {
        for piece in self.pieces.iter() {
            board.place_piece(piece)?;
        }
        Ok(())
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} ({}) has the following pieces:", self.name, self.color)?;
        for piece in self.pieces.iter() {
            writeln!(f, "- {} at {}", piece.kind(), piece.position())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use placement_common::{PieceKind, Position, UnknownPieceKind};

    use crate::{Board, Piece, PlacementErr, Player};

    #[test]
    fn adds_pieces_by_name_in_any_case() {
        let mut player = Player::new("Alice", "White");
        for name in ["rook", "ROOK", "Bishop", "knight"] {
            player.add_piece_by_name(name, Position::new(1, 1)).unwrap();
        }

        let kinds = player.pieces().iter().map(|p| p.kind()).collect::<Vec<_>>();
        assert_eq!(
            vec![PieceKind::Rook, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight],
            kinds
        );
        assert!(player.pieces().iter().all(|p| p.color() == "White"));
    }

    #[test]
    fn unknown_kind_is_reported_and_nothing_is_added() {
        let mut player = Player::new("Bob", "Black");
        let result = player.add_piece_by_name("queen", Position::new(0, 3));
        assert_eq!(Err(UnknownPieceKind::new("queen")), result);
        assert!(player.pieces().is_empty());
    }

    #[test]
    fn keeps_insertion_order() {
        let mut player = Player::new("Alice", "White");
        player.add_piece(Piece::rook("White", Position::new(0, 0)));
        player.add_piece_by_name("bishop", Position::new(0, 2)).unwrap();
        player.add_piece(Piece::knight("Green", Position::new(0, 1)));

        let positions = player.pieces().iter().map(|p| p.position()).collect::<Vec<_>>();
        assert_eq!(
            vec![Position::new(0, 0), Position::new(0, 2), Position::new(0, 1)],
            positions
        );
        // Directly built pieces keep their own color.
        assert_eq!("Green", player.pieces()[2].color());
    }

    #[test]
    fn roster_lists_current_positions() {
        let mut player = Player::new("Alice", "White");
        player.add_piece(Piece::rook("White", Position::new(0, 0)));
        player.add_piece_by_name("bishop", Position::new(0, 2)).unwrap();
        assert!(player.move_piece(0, Position::new(0, 5)).unwrap().is_success());

        assert_eq!(
            "Alice (White) has the following pieces:\n- Rook at (0, 5)\n- Bishop at (0, 2)\n",
            player.to_string()
        );
    }

    #[test]
    fn move_piece_out_of_range_is_none() {
        let mut player = Player::new("Bob", "Black");
        assert!(player.move_piece(0, Position::new(1, 1)).is_none());
    }

    #[test]
    fn place_all_stops_at_first_off_board_piece() {
        let mut player = Player::new("Bob", "Black");
        player.add_piece_by_name("knight", Position::new(7, 1)).unwrap();
        player.add_piece_by_name("rook", Position::new(9, 9)).unwrap();

        let mut board = Board::new();
        assert_eq!(
            Err(PlacementErr::OutOfBounds(Position::new(9, 9))),
            player.place_all(&mut board)
        );
        assert!(board.piece_at(&Position::new(7, 1)).is_some());
    }
}
