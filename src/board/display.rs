use std::fmt;

use common::Square;

use super::error::BoardError;
use super::piece::PieceType;
use super::quantum_piece::{PieceId, QuantumPiece};
use super::team::Team;
use super::Position;

const WHITE_SUPERPOSED: char = '?';
const BLACK_SUPERPOSED: char = '!';
const EMPTY: char = '.';

impl Position {
    /// Parses an 8x8 diagram, rank 8 first. Whitespace is ignored. Letters are
    /// confirmed pieces (uppercase white, lowercase black), `?` and `!` are fully
    /// superposed white and black pieces, `.` is an empty square. Ids are handed
    /// out in a1..h8 order.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let cells: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 64 {
            return Err(BoardError::DiagramSizeError { count: cells.len() });
        }

        let mut pieces = Vec::new();
        let mut next_id: PieceId = 0;

        // The diagram is drawn from white's perspective, so the first row is
        // rank 8; walk the ranks bottom up to hand out ids from a1.
        for y in 0..8u8 {
            for x in 0..8u8 {
                let c = cells[(7 - y as usize) * 8 + x as usize];
                let square = Square::new(x, y);
                let piece = match c {
                    EMPTY => continue,
                    WHITE_SUPERPOSED => QuantumPiece::superposed(next_id, Team::White, square),
                    BLACK_SUPERPOSED => QuantumPiece::superposed(next_id, Team::Black, square),
                    _ => {
                        let piece_type = PieceType::from_char(c)
                            .ok_or(BoardError::DiagramCharacterError { c })?;
                        let team = if c.is_ascii_uppercase() {
                            Team::White
                        } else {
                            Team::Black
                        };
                        QuantumPiece::confirmed(next_id, team, piece_type, square)
                    }
                };
                pieces.push(piece);
                next_id += 1;
            }
        }

        Self::from_pieces(pieces)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..8u8).rev() {
            for x in 0..8u8 {
                let c = match self.piece_at(Square::new(x, y)) {
                    Some(piece) => piece.to_char().unwrap_or(match piece.team {
                        Team::White => WHITE_SUPERPOSED,
                        Team::Black => BLACK_SUPERPOSED,
                    }),
                    None => EMPTY,
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds a `Position` from a diagram written inline, e.g.
///
/// ```ignore
/// let position = quantum_position! {
///     ....k...
///     ........
///     ........
///     ........
///     ........
///     ........
///     ........
///     R...K...
/// };
/// ```
#[macro_export]
macro_rules! quantum_position {
    ($($cell:tt)*) => {{
        $crate::board::Position::from_diagram(stringify!($($cell)*))
            .expect("quantum_position! diagram should describe a valid position")
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Possibilities;
    use common::square::*;

    #[test]
    fn test_diagram_round_trips_through_display() {
        let position = quantum_position! {
            ....k...
            !!!.....
            ........
            ...q....
            ........
            ........
            ??......
            R...K...
        };
        let expected = "....k...\n!!!.....\n........\n...q....\n........\n........\n??......\nR...K...\n";
        assert_eq!(position.to_string(), expected);
    }

    #[test]
    fn test_diagram_ids_follow_scan_order() {
        let position = quantum_position! {
            ...k....
            ........
            ........
            ........
            ........
            ........
            ?.......
            R......K
        };
        assert_eq!(position.board().get(A1), Some(0));
        assert_eq!(position.board().get(H1), Some(1));
        assert_eq!(position.board().get(A2), Some(2));
        assert_eq!(position.board().get(D8), Some(3));

        let superposed = position.piece(2).unwrap();
        assert_eq!(superposed.team, Team::White);
        assert_eq!(superposed.possibilities, Possibilities::all());
        let black_king = position.piece(3).unwrap();
        assert_eq!(black_king.team, Team::Black);
        assert_eq!(black_king.confirmed_type(), Some(PieceType::King));
    }

    #[test]
    fn test_diagram_errors() {
        assert_eq!(
            Position::from_diagram("...."),
            Err(BoardError::DiagramSizeError { count: 4 })
        );
        let bad = format!("x{}", ".".repeat(63));
        assert_eq!(
            Position::from_diagram(&bad),
            Err(BoardError::DiagramCharacterError { c: 'x' })
        );
    }
}
