use std::fmt;

/// One of the six types a quantum piece may turn out to be.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum PieceType {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

pub const ALL_PIECE_TYPES: [PieceType; 6] = [
    PieceType::Pawn,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
    PieceType::King,
];

impl PieceType {
    /// Maximum number of confirmed pieces of this type a single team may hold.
    /// The limits add up to 16, the size of a team.
    pub fn limit(self) -> u8 {
        match self {
            PieceType::Pawn => 8,
            PieceType::Knight => 2,
            PieceType::Bishop => 2,
            PieceType::Rook => 2,
            PieceType::Queen => 1,
            PieceType::King => 1,
        }
    }

    pub fn from_usize(i: usize) -> Self {
        ALL_PIECE_TYPES[i]
    }

    pub fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }

    pub fn to_unicode_symbol(self) -> char {
        match self {
            PieceType::Pawn => '♟',
            PieceType::Knight => '♞',
            PieceType::Bishop => '♝',
            PieceType::Rook => '♜',
            PieceType::Queen => '♛',
            PieceType::King => '♚',
        }
    }

    pub fn is_sliding(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_sum_to_team_size() {
        let total: u8 = ALL_PIECE_TYPES.iter().map(|t| t.limit()).sum();
        assert_eq!(total, 16);
    }

    #[test]
    fn test_char_conversions() {
        for &piece_type in &ALL_PIECE_TYPES {
            assert_eq!(PieceType::from_char(piece_type.to_char()), Some(piece_type));
        }
        assert_eq!(PieceType::from_char('n'), Some(PieceType::Knight));
        assert_eq!(PieceType::from_char('x'), None);
    }

    #[test]
    fn test_from_usize_matches_discriminant() {
        for &piece_type in &ALL_PIECE_TYPES {
            assert_eq!(PieceType::from_usize(piece_type as usize), piece_type);
        }
    }
}
