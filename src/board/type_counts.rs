use std::ops::Index;

use super::piece::{PieceType, ALL_PIECE_TYPES};
use super::quantum_piece::QuantumPiece;
use super::team::Team;

/// Per-type tally for one team, indexed by `PieceType`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TypeCounts([u8; 6]);

impl TypeCounts {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn increment(&mut self, piece_type: PieceType) {
        self.0[piece_type as usize] += 1;
    }

    /// True once the tally has reached the team limit for `piece_type`.
    pub fn is_at_limit(&self, piece_type: PieceType) -> bool {
        self.0[piece_type as usize] >= piece_type.limit()
    }

    pub fn exceeds_any_limit(&self) -> bool {
        ALL_PIECE_TYPES
            .iter()
            .any(|&piece_type| self.0[piece_type as usize] > piece_type.limit())
    }
}

impl Index<PieceType> for TypeCounts {
    type Output = u8;

    fn index(&self, piece_type: PieceType) -> &u8 {
        &self.0[piece_type as usize]
    }
}

/// Counts the confirmed pieces of `team`, captured ones included: a captured
/// piece keeps the slot its type was confirmed into.
pub fn count_confirmed(pieces: &[QuantumPiece], team: Team) -> TypeCounts {
    let mut counts = TypeCounts::new();
    for piece in pieces.iter().filter(|piece| piece.team == team) {
        if let Some(piece_type) = piece.confirmed_type() {
            counts.increment(piece_type);
        }
    }
    counts
}

/// Counts captured pieces of `team` whose type was confirmed.
pub fn count_captured(pieces: &[QuantumPiece], team: Team) -> TypeCounts {
    let mut counts = TypeCounts::new();
    for piece in pieces
        .iter()
        .filter(|piece| piece.team == team && piece.captured)
    {
        if let Some(piece_type) = piece.confirmed_type() {
            counts.increment(piece_type);
        }
    }
    counts
}
