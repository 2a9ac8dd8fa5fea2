use common::Square;

use super::piece::PieceType;
use super::possibilities::Possibilities;
use super::team::Team;

pub type PieceId = u8;

/// A piece whose type is only known up to its remaining possibilities.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct QuantumPiece {
    pub id: PieceId,
    pub team: Team,
    pub possibilities: Possibilities,
    pub square: Square,
    pub captured: bool,
}

impl QuantumPiece {
    /// A fresh piece in full superposition.
    pub fn superposed(id: PieceId, team: Team, square: Square) -> Self {
        Self {
            id,
            team,
            possibilities: Possibilities::all(),
            square,
            captured: false,
        }
    }

    pub fn confirmed(id: PieceId, team: Team, piece_type: PieceType, square: Square) -> Self {
        Self {
            id,
            team,
            possibilities: Possibilities::only(piece_type),
            square,
            captured: false,
        }
    }

    pub fn with_possibilities(self, possibilities: Possibilities) -> Self {
        Self {
            possibilities,
            ..self
        }
    }

    pub fn is_active(&self) -> bool {
        !self.captured
    }

    pub fn confirmed_type(&self) -> Option<PieceType> {
        self.possibilities.confirmed()
    }

    pub fn could_be(&self, piece_type: PieceType) -> bool {
        self.possibilities.contains(piece_type)
    }

    /// Tag letter for a confirmed piece, uppercase for white and lowercase for black.
    pub fn to_char(&self) -> Option<char> {
        self.confirmed_type().map(|piece_type| match self.team {
            Team::White => piece_type.to_char(),
            Team::Black => piece_type.to_char().to_ascii_lowercase(),
        })
    }
}
