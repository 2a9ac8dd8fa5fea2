use common::Square;

use crate::board::{PieceId, PieceType, Team};

/// Something that happened while applying a move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveEvent {
    Moved {
        piece_id: PieceId,
        from: Square,
        to: Square,
    },
    Captured {
        piece_id: PieceId,
        by: PieceId,
        square: Square,
    },
    /// A piece was left with a single possibility, either by the move itself
    /// or by entanglement.
    Collapsed {
        piece_id: PieceId,
        piece_type: PieceType,
    },
    /// `team`'s confirmed king is attacked after the move.
    Check { team: Team },
}
