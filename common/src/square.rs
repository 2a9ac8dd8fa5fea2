use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static ALGEBRAIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("ALGEBRAIC_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq)]
pub enum SquareError {
    #[error("invalid square: {input:?}")]
    InvalidAlgebraic { input: String },
    #[error("coordinates ({x}, {y}) are off the board")]
    OutOfBounds { x: i32, y: i32 },
}

/// A square on the 8x8 board. `x` is the file (0 = a) and `y` is the rank
/// (0 = rank 1, where white starts).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 8 && y < 8, "square coordinates must be in 0..8");
        Self { x, y }
    }

    /// Builds a square from signed coordinates, rejecting anything off the board.
    pub fn try_from_coords(x: i32, y: i32) -> Result<Self, SquareError> {
        if is_in_bounds(x, y) {
            Ok(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(SquareError::OutOfBounds { x, y })
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Self {
                x: (index % 8) as u8,
                y: (index / 8) as u8,
            })
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn x(self) -> u8 {
        self.x
    }

    #[inline(always)]
    pub fn y(self) -> u8 {
        self.y
    }

    /// Board index, `y * 8 + x`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.y as usize * 8 + self.x as usize
    }

    /// Returns the square `(dx, dy)` away, or `None` if that falls off the board.
    #[inline(always)]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Self::try_from_coords(self.x as i32 + dx as i32, self.y as i32 + dy as i32).ok()
    }

    pub fn from_algebraic(algebraic_coord: &str) -> Result<Self, SquareError> {
        let caps = ALGEBRAIC_RE
            .captures(algebraic_coord)
            .ok_or_else(|| SquareError::InvalidAlgebraic {
                input: algebraic_coord.to_string(),
            })?;

        let file = caps[1].to_ascii_lowercase().as_bytes()[0] - b'a';
        let rank = caps[2].as_bytes()[0] - b'1';
        Ok(Self::new(file, rank))
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.x) as char, self.y + 1)
    }
}

#[inline(always)]
pub fn is_in_bounds(x: i32, y: i32) -> bool {
    (0..8).contains(&x) && (0..8).contains(&y)
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.to_algebraic(), self.x, self.y)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}

pub const A1: Square = Square::new(0, 0);
pub const B1: Square = Square::new(1, 0);
pub const C1: Square = Square::new(2, 0);
pub const D1: Square = Square::new(3, 0);
pub const E1: Square = Square::new(4, 0);
pub const F1: Square = Square::new(5, 0);
pub const G1: Square = Square::new(6, 0);
pub const H1: Square = Square::new(7, 0);
pub const A2: Square = Square::new(0, 1);
pub const B2: Square = Square::new(1, 1);
pub const C2: Square = Square::new(2, 1);
pub const D2: Square = Square::new(3, 1);
pub const E2: Square = Square::new(4, 1);
pub const F2: Square = Square::new(5, 1);
pub const G2: Square = Square::new(6, 1);
pub const H2: Square = Square::new(7, 1);
pub const A3: Square = Square::new(0, 2);
pub const B3: Square = Square::new(1, 2);
pub const C3: Square = Square::new(2, 2);
pub const D3: Square = Square::new(3, 2);
pub const E3: Square = Square::new(4, 2);
pub const F3: Square = Square::new(5, 2);
pub const G3: Square = Square::new(6, 2);
pub const H3: Square = Square::new(7, 2);
pub const A4: Square = Square::new(0, 3);
pub const B4: Square = Square::new(1, 3);
pub const C4: Square = Square::new(2, 3);
pub const D4: Square = Square::new(3, 3);
pub const E4: Square = Square::new(4, 3);
pub const F4: Square = Square::new(5, 3);
pub const G4: Square = Square::new(6, 3);
pub const H4: Square = Square::new(7, 3);
pub const A5: Square = Square::new(0, 4);
pub const B5: Square = Square::new(1, 4);
pub const C5: Square = Square::new(2, 4);
pub const D5: Square = Square::new(3, 4);
pub const E5: Square = Square::new(4, 4);
pub const F5: Square = Square::new(5, 4);
pub const G5: Square = Square::new(6, 4);
pub const H5: Square = Square::new(7, 4);
pub const A6: Square = Square::new(0, 5);
pub const B6: Square = Square::new(1, 5);
pub const C6: Square = Square::new(2, 5);
pub const D6: Square = Square::new(3, 5);
pub const E6: Square = Square::new(4, 5);
pub const F6: Square = Square::new(5, 5);
pub const G6: Square = Square::new(6, 5);
pub const H6: Square = Square::new(7, 5);
pub const A7: Square = Square::new(0, 6);
pub const B7: Square = Square::new(1, 6);
pub const C7: Square = Square::new(2, 6);
pub const D7: Square = Square::new(3, 6);
pub const E7: Square = Square::new(4, 6);
pub const F7: Square = Square::new(5, 6);
pub const G7: Square = Square::new(6, 6);
pub const H7: Square = Square::new(7, 6);
pub const A8: Square = Square::new(0, 7);
pub const B8: Square = Square::new(1, 7);
pub const C8: Square = Square::new(2, 7);
pub const D8: Square = Square::new(3, 7);
pub const E8: Square = Square::new(4, 7);
pub const F8: Square = Square::new(5, 7);
pub const G8: Square = Square::new(6, 7);
pub const H8: Square = Square::new(7, 7);
