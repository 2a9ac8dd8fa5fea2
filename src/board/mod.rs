pub mod error;
pub mod piece;
pub mod possibilities;
pub mod quantum_piece;
pub mod team;
pub mod type_counts;

mod display;

use common::Square;
use error::BoardError;
use rustc_hash::FxHashSet;

pub use piece::{PieceType, ALL_PIECE_TYPES};
pub use possibilities::Possibilities;
pub use quantum_piece::{PieceId, QuantumPiece};
pub use team::Team;
pub use type_counts::TypeCounts;

/// Occupancy of the 64 squares, by piece id. Captured pieces never occupy a cell.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [Option<PieceId>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self { cells: [None; 64] }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline(always)]
    pub fn get(&self, square: Square) -> Option<PieceId> {
        self.cells[square.index()]
    }

    #[inline(always)]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.cells[square.index()].is_some()
    }

    pub fn put(&mut self, square: Square, id: PieceId) -> Result<(), BoardError> {
        if let Some(occupant) = self.get(square) {
            return Err(BoardError::SquareOccupiedBoardPutError { square, occupant });
        }
        self.cells[square.index()] = Some(id);
        Ok(())
    }

    /// Writes `id` into the cell regardless of its occupant, returning whatever
    /// was there before. Used for captures.
    pub fn replace(&mut self, square: Square, id: PieceId) -> Option<PieceId> {
        self.cells[square.index()].replace(id)
    }

    pub fn remove(&mut self, square: Square) -> Option<PieceId> {
        self.cells[square.index()].take()
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| Some((Square::from_index(index)?, (*cell)?)))
    }
}

/// A complete snapshot of the game material: the occupancy board together with
/// every piece, captured ones included. Moves never mutate a `Position` in
/// place; they produce a successor.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Position {
    board: Board,
    pieces: Vec<QuantumPiece>,
}

impl Position {
    /// The opening setup: 16 fully superposed pieces per team on the usual
    /// starting ranks. Ids run file by file, white's back rank before its pawn
    /// rank, then black's pawn rank before its back rank.
    pub fn starting_position() -> Self {
        let mut pieces = Vec::with_capacity(32);
        let mut next_id: PieceId = 0;

        for (team, ranks) in [(Team::White, [0, 1]), (Team::Black, [6, 7])].iter() {
            for x in 0..8 {
                for &y in ranks.iter() {
                    pieces.push(QuantumPiece::superposed(next_id, *team, Square::new(x, y)));
                    next_id += 1;
                }
            }
        }

        let mut board = Board::new();
        for piece in &pieces {
            board.cells[piece.square.index()] = Some(piece.id);
        }

        Self { board, pieces }
    }

    /// Builds a position from an arbitrary piece list, deriving the board from the
    /// active pieces and rejecting overlapping or duplicate pieces.
    pub fn from_pieces(pieces: Vec<QuantumPiece>) -> Result<Self, BoardError> {
        let mut board = Board::new();
        let mut seen_ids = FxHashSet::default();

        for piece in &pieces {
            if !seen_ids.insert(piece.id) {
                return Err(BoardError::DuplicatePieceIdError { id: piece.id });
            }
            if piece.is_active() {
                board.put(piece.square, piece.id)?;
            }
        }

        let position = Self { board, pieces };
        position.validate()?;
        Ok(position)
    }

    pub(crate) fn from_parts(board: Board, pieces: Vec<QuantumPiece>) -> Self {
        Self { board, pieces }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces(&self) -> &[QuantumPiece] {
        &self.pieces
    }

    pub fn into_parts(self) -> (Board, Vec<QuantumPiece>) {
        (self.board, self.pieces)
    }

    pub fn piece(&self, id: PieceId) -> Option<&QuantumPiece> {
        self.pieces.iter().find(|piece| piece.id == id)
    }

    pub fn piece_at(&self, square: Square) -> Option<&QuantumPiece> {
        self.board.get(square).and_then(|id| self.piece(id))
    }

    pub fn active_pieces(&self, team: Team) -> impl Iterator<Item = &QuantumPiece> + '_ {
        self.pieces
            .iter()
            .filter(move |piece| piece.team == team && piece.is_active())
    }

    pub fn count_confirmed(&self, team: Team) -> TypeCounts {
        type_counts::count_confirmed(&self.pieces, team)
    }

    pub fn count_captured(&self, team: Team) -> TypeCounts {
        type_counts::count_captured(&self.pieces, team)
    }

    /// Checks that the board and the active pieces agree cell for cell and that
    /// no active piece has run out of possibilities.
    pub fn validate(&self) -> Result<(), BoardError> {
        for piece in self.pieces.iter().filter(|piece| piece.is_active()) {
            if self.board.get(piece.square) != Some(piece.id) {
                return Err(BoardError::MissingOccupantError {
                    id: piece.id,
                    square: piece.square,
                });
            }
            if piece.possibilities.is_empty() {
                return Err(BoardError::EmptyPossibilitiesError { id: piece.id });
            }
        }

        for (square, id) in self.board.occupied() {
            match self.piece(id) {
                Some(piece) if piece.is_active() && piece.square == square => {}
                _ => return Err(BoardError::OrphanedCellError { square, id }),
            }
        }

        Ok(())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::starting_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::square::*;

    #[test]
    fn test_starting_position_layout() {
        let position = Position::starting_position();
        assert_eq!(position.pieces().len(), 32);
        assert_eq!(position.board().occupied().count(), 32);
        assert!(position.validate().is_ok());

        assert_eq!(position.board().get(A1), Some(0));
        assert_eq!(position.board().get(A2), Some(1));
        assert_eq!(position.board().get(B2), Some(3));
        assert_eq!(position.board().get(A7), Some(16));
        assert_eq!(position.board().get(A8), Some(17));

        for piece in position.pieces() {
            assert_eq!(piece.possibilities, Possibilities::all());
            assert!(piece.is_active());
            let expected_team = if piece.square.y() < 2 {
                Team::White
            } else {
                Team::Black
            };
            assert_eq!(piece.team, expected_team);
        }
        assert_eq!(position.active_pieces(Team::White).count(), 16);
        assert_eq!(position.active_pieces(Team::Black).count(), 16);
    }

    #[test]
    fn test_from_pieces_rejects_overlap() {
        let pieces = vec![
            QuantumPiece::confirmed(0, Team::White, PieceType::Rook, A1),
            QuantumPiece::confirmed(1, Team::Black, PieceType::Queen, A1),
        ];
        assert_eq!(
            Position::from_pieces(pieces),
            Err(BoardError::SquareOccupiedBoardPutError {
                square: A1,
                occupant: 0
            })
        );
    }

    #[test]
    fn test_from_pieces_rejects_duplicate_ids() {
        let pieces = vec![
            QuantumPiece::confirmed(4, Team::White, PieceType::Rook, A1),
            QuantumPiece::confirmed(4, Team::Black, PieceType::Queen, A2),
        ];
        assert_eq!(
            Position::from_pieces(pieces),
            Err(BoardError::DuplicatePieceIdError { id: 4 })
        );
    }

    #[test]
    fn test_captured_pieces_do_not_occupy_cells() {
        let mut captured = QuantumPiece::confirmed(1, Team::Black, PieceType::Queen, A2);
        captured.captured = true;
        let pieces = vec![
            QuantumPiece::confirmed(0, Team::White, PieceType::Rook, A2),
            captured,
        ];
        let position = Position::from_pieces(pieces).unwrap();
        assert_eq!(position.board().get(A2), Some(0));
        assert_eq!(position.piece_at(A2).map(|piece| piece.id), Some(0));
    }

    #[test]
    fn test_validate_detects_orphaned_cell() {
        let position = Position::from_pieces(vec![QuantumPiece::confirmed(
            0,
            Team::White,
            PieceType::King,
            E1,
        )])
        .unwrap();
        let (mut board, pieces) = position.into_parts();
        board.put(E2, 9).unwrap();
        let broken = Position::from_parts(board, pieces);
        assert_eq!(
            broken.validate(),
            Err(BoardError::OrphanedCellError { square: E2, id: 9 })
        );
    }
}
