use common::Square;
use thiserror::Error;

use super::quantum_piece::PieceId;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot put a piece on {square}, it is already occupied by piece {occupant}")]
    SquareOccupiedBoardPutError { square: Square, occupant: PieceId },
    #[error("Piece id {id} is used more than once")]
    DuplicatePieceIdError { id: PieceId },
    #[error("Board cell {square} references piece {id}, which is not an active piece there")]
    OrphanedCellError { square: Square, id: PieceId },
    #[error("Active piece {id} is not recorded on its square {square}")]
    MissingOccupantError { id: PieceId, square: Square },
    #[error("Active piece {id} has no remaining possibilities")]
    EmptyPossibilitiesError { id: PieceId },
    #[error("Invalid number of squares in diagram. Expected 64, got {count}")]
    DiagramSizeError { count: usize },
    #[error("Invalid character {c:?} in diagram")]
    DiagramCharacterError { c: char },
}
