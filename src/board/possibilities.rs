use std::fmt;

use super::piece::{PieceType, ALL_PIECE_TYPES};

/// The set of types a piece could still be. Stored as a bitmask indexed by
/// `PieceType as usize`, so iteration always follows the canonical
/// P, N, B, R, Q, K order and duplicates cannot occur.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Possibilities(u8);

const FULL_MASK: u8 = 0b0011_1111;

impl Possibilities {
    pub const EMPTY: Possibilities = Possibilities(0);

    /// Full superposition: every piece type is still possible.
    pub fn all() -> Self {
        Possibilities(FULL_MASK)
    }

    pub fn only(piece_type: PieceType) -> Self {
        Possibilities(1 << piece_type as u8)
    }

    pub fn from_types(types: &[PieceType]) -> Self {
        types
            .iter()
            .fold(Self::EMPTY, |acc, &piece_type| acc.with(piece_type))
    }

    /// Parses a tag string such as `"PRQK"`. Returns `None` on unknown tags.
    pub fn from_tags(tags: &str) -> Option<Self> {
        tags.chars().try_fold(Self::EMPTY, |acc, c| {
            PieceType::from_char(c).map(|piece_type| acc.with(piece_type))
        })
    }

    fn with(self, piece_type: PieceType) -> Self {
        Possibilities(self.0 | (1 << piece_type as u8))
    }

    #[inline(always)]
    pub fn contains(self, piece_type: PieceType) -> bool {
        self.0 & (1 << piece_type as u8) != 0
    }

    #[inline(always)]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// A confirmed piece has exactly one remaining possibility.
    #[inline(always)]
    pub fn is_confirmed(self) -> bool {
        self.len() == 1
    }

    pub fn is_superposed(self) -> bool {
        self.len() > 1
    }

    pub fn confirmed(self) -> Option<PieceType> {
        if self.is_confirmed() {
            Some(PieceType::from_usize(self.0.trailing_zeros() as usize))
        } else {
            None
        }
    }

    pub fn is_subset_of(self, other: Possibilities) -> bool {
        self.0 & !other.0 == 0
    }

    /// Keeps only the types for which `predicate` holds. The result may be empty;
    /// callers decide what an empty set means.
    pub fn filter<F>(self, mut predicate: F) -> Self
    where
        F: FnMut(PieceType) -> bool,
    {
        self.iter()
            .filter(|&piece_type| predicate(piece_type))
            .fold(Self::EMPTY, |acc, piece_type| acc.with(piece_type))
    }

    pub fn iter(self) -> impl Iterator<Item = PieceType> {
        ALL_PIECE_TYPES
            .iter()
            .copied()
            .filter(move |&piece_type| self.contains(piece_type))
    }
}

impl fmt::Display for Possibilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece_type in self.iter() {
            write!(f, "{}", piece_type.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Possibilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}
