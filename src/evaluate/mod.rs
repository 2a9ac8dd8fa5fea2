use std::fmt;

use crate::board::{PieceType, Position, QuantumPiece, Team};
use crate::move_generator::filter_possibilities;

pub mod piece_values;

use self::piece_values::{expected_value, VALUE_SCALE};

// These scores are far larger than any reachable material total, so the
// search always prefers (or avoids) a captured king over material.
pub const BLACK_WINS: i32 = i32::MIN / 2;
pub const WHITE_WINS: i32 = i32::MAX / 2;

const CENTER_BONUS: i32 = 10;
const ADVANCE_BONUS: i32 = 5;

/// Final result of a game. Only king capture ends a game inside the engine;
/// `Draw` exists for callers that settle games some other way.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl Winner {
    pub fn of(team: Team) -> Self {
        match team {
            Team::White => Winner::White,
            Team::Black => Winner::Black,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let winner_str = match self {
            Winner::White => "WHITE",
            Winner::Black => "BLACK",
            Winner::Draw => "DRAW",
        };
        write!(f, "{}", winner_str)
    }
}

/// True once no active piece of `team` could still be the king.
pub fn is_king_captured(position: &Position, team: Team) -> bool {
    !position
        .active_pieces(team)
        .any(|piece| piece.could_be(PieceType::King))
}

/// The winner if either king is gone, white's loss checked first.
pub fn check_game_over(position: &Position) -> Option<Winner> {
    if is_king_captured(position, Team::White) {
        return Some(Winner::Black);
    }
    if is_king_captured(position, Team::Black) {
        return Some(Winner::White);
    }
    None
}

/// The team's king, if exactly one active piece is confirmed as its king.
pub fn confirmed_king(position: &Position, team: Team) -> Option<&QuantumPiece> {
    position
        .active_pieces(team)
        .find(|piece| piece.confirmed_type() == Some(PieceType::King))
}

/// Whether `team`'s king is attacked. A king that is still superposed cannot
/// be in check: its square is not known, so this returns false.
pub fn is_king_in_check(position: &Position, team: Team) -> bool {
    let king = match confirmed_king(position, team) {
        Some(king) => king,
        None => return false,
    };

    position.active_pieces(team.opposite()).any(|attacker| {
        !filter_possibilities(attacker, king.square, position.board(), true).is_empty()
    })
}

/// Static evaluation from white's point of view, in `VALUE_SCALE` units:
/// positive favours white.
pub fn score(position: &Position) -> i32 {
    match check_game_over(position) {
        Some(Winner::White) => WHITE_WINS,
        Some(Winner::Black) => BLACK_WINS,
        _ => board_material_score(position),
    }
}

pub fn board_material_score(position: &Position) -> i32 {
    player_material_score(position, Team::White) - player_material_score(position, Team::Black)
}

/// Expected material plus positional bonuses for the team's active pieces.
fn player_material_score(position: &Position, team: Team) -> i32 {
    position
        .active_pieces(team)
        .map(|piece| expected_value(piece.possibilities) + positional_bonus(piece) * VALUE_SCALE)
        .sum()
}

/// Rewards the four central squares, less so the ring around them, and any
/// piece that might be a pawn for how far it has advanced.
fn positional_bonus(piece: &QuantumPiece) -> i32 {
    let x = piece.square.x();
    let y = piece.square.y();
    let mut bonus = 0;

    if (3..=4).contains(&x) && (3..=4).contains(&y) {
        bonus += CENTER_BONUS * 2;
    } else if (2..=5).contains(&x) && (2..=5).contains(&y) {
        bonus += CENTER_BONUS;
    }

    if piece.could_be(PieceType::Pawn) {
        let advancement = match piece.team {
            Team::White => y,
            Team::Black => 7 - y,
        };
        bonus += advancement as i32 * ADVANCE_BONUS;
    }

    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Possibilities, QuantumPiece};
    use crate::quantum_move::attempt_move;
    use crate::quantum_position;
    use common::square::*;

    #[test]
    fn test_starting_position_is_balanced() {
        let position = Position::starting_position();
        assert_eq!(score(&position), 0);
        assert_eq!(
            player_material_score(&position, Team::White),
            player_material_score(&position, Team::Black)
        );
        assert_eq!(check_game_over(&position), None);
    }

    #[test]
    fn test_material_and_position_terms() {
        let position = quantum_position! {
            ....k...
            ........
            ........
            ........
            ...Q....
            ........
            ........
            ....K...
        };
        // queen on d4 earns the inner center bonus
        assert_eq!(board_material_score(&position), (900 + 20) * VALUE_SCALE);
    }

    #[test]
    fn test_pawn_advancement_bonus() {
        let position = quantum_position! {
            ....k...
            ........
            ...P....
            ........
            ........
            ........
            ........
            ....K...
        };
        // pawn on d6: ring bonus plus five ranks of advancement
        assert_eq!(board_material_score(&position), (100 + 10 + 25) * VALUE_SCALE);
    }

    #[test]
    fn test_king_capture_dominates_material() {
        let position = quantum_position! {
            ........
            ........
            ........
            ........
            ........
            ........
            qqqqqqqq
            K.......
        };
        assert_eq!(check_game_over(&position), Some(Winner::White));
        assert_eq!(score(&position), WHITE_WINS);
    }

    #[test]
    fn test_superposed_king_keeps_game_alive() {
        let position = quantum_position! {
            ........
            ........
            ........
            ........
            ........
            ........
            !.......
            K.......
        };
        assert!(!is_king_captured(&position, Team::Black));
        assert_eq!(check_game_over(&position), None);
    }

    #[test]
    fn test_last_king_candidate_observed_as_knight() {
        // black's only possible king makes a knight jump, which rules the king out
        let position = Position::from_pieces(vec![
            QuantumPiece::confirmed(0, Team::White, PieceType::King, E1),
            QuantumPiece {
                id: 1,
                team: Team::Black,
                possibilities: Possibilities::from_tags("NK").unwrap(),
                square: G8,
                captured: false,
            },
        ])
        .unwrap();
        assert_eq!(check_game_over(&position), None);

        let applied = attempt_move(&position, 1, F6).unwrap();
        assert!(is_king_captured(&applied.position, Team::Black));
        assert_eq!(check_game_over(&applied.position), Some(Winner::White));
    }

    #[test]
    fn test_exhausted_king_candidates_end_the_game() {
        // white's king was confirmed and captured; entanglement strips the king
        // from the remaining candidates once the capture lands
        let mut captured_king = QuantumPiece::confirmed(0, Team::White, PieceType::King, E1);
        captured_king.captured = true;
        let position = Position::from_pieces(vec![
            captured_king,
            QuantumPiece {
                id: 1,
                team: Team::White,
                possibilities: Possibilities::from_tags("RK").unwrap(),
                square: A1,
                captured: false,
            },
            QuantumPiece::confirmed(2, Team::Black, PieceType::King, E8),
            QuantumPiece::confirmed(3, Team::Black, PieceType::Pawn, H7),
        ])
        .unwrap();

        let applied = attempt_move(&position, 3, H6).unwrap();
        assert_eq!(
            applied.position.piece(1).unwrap().confirmed_type(),
            Some(PieceType::Rook)
        );
        assert_eq!(check_game_over(&applied.position), Some(Winner::Black));
    }

    #[test]
    fn test_check_requires_confirmed_king() {
        let confirmed = quantum_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            R...K...
        };
        assert!(!is_king_in_check(&confirmed, Team::Black));

        let in_check = quantum_position! {
            ....k...
            ........
            ........
            ........
            ....R...
            ........
            ........
            ....K...
        };
        assert!(is_king_in_check(&in_check, Team::Black));
        assert!(!is_king_in_check(&in_check, Team::White));

        let superposed = quantum_position! {
            ....!...
            ........
            ........
            ........
            ....R...
            ........
            ........
            ....K...
        };
        assert!(!is_king_in_check(&superposed, Team::Black));
    }

    #[test]
    fn test_blocked_attacker_gives_no_check() {
        let position = quantum_position! {
            ....k...
            ....p...
            ........
            ........
            ....R...
            ........
            ........
            ....K...
        };
        assert!(!is_king_in_check(&position, Team::Black));
    }
}
