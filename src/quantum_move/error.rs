use common::Square;
use thiserror::Error;

use crate::board::PieceId;

/// Why a requested move was refused. Refusals are ordinary results: the
/// position the move was attempted on is left as it was.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum IllegalMoveError {
    #[error("Piece {piece_id} not found")]
    PieceNotFound { piece_id: PieceId },
    #[error("Piece {piece_id} has been captured")]
    PieceCaptured { piece_id: PieceId },
    #[error("Destination ({x}, {y}) is off the board")]
    OutOfBounds { x: i32, y: i32 },
    #[error("Piece {piece_id} is already on {square}")]
    SameSquare { piece_id: PieceId, square: Square },
    #[error("Cannot capture your own piece on {square}")]
    OwnPieceCapture { square: Square },
    #[error("No legal type explains moving piece {piece_id} from {from} to {to}")]
    NoLegalType {
        piece_id: PieceId,
        from: Square,
        to: Square,
    },
}
