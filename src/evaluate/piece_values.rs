use crate::board::{PieceType, Possibilities};

/// Scores are kept in sixtieths of a centipawn. 60 is divisible by every
/// possibility count from 1 to 6, so the mean value of a piece is exact.
pub const VALUE_SCALE: i32 = 60;

pub fn material_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => 100,
        PieceType::Knight => 320,
        PieceType::Bishop => 330,
        PieceType::Rook => 500,
        PieceType::Queen => 900,
        PieceType::King => 20000,
    }
}

/// Expected material value of a piece, in `VALUE_SCALE` units: the mean
/// value of its remaining possibilities.
pub fn expected_value(possibilities: Possibilities) -> i32 {
    if possibilities.is_empty() {
        return 0;
    }
    let total: i32 = possibilities.iter().map(material_value).sum();
    total * VALUE_SCALE / possibilities.len() as i32
}
