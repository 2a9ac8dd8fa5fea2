use common::Square;

use crate::board::{Board, PieceType, Possibilities, Team};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// `(dx, dy)` step, with north pointing towards rank 8.
    pub fn step(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (-1, 1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
        }
    }
}

pub const ROOK_DIRS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

pub const BISHOP_DIRS: [Direction; 4] = [
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Squares along `direction` from `from`, stopping at (and including) the
/// first occupied square.
pub fn ray_targets(board: &Board, from: Square, direction: Direction) -> Vec<Square> {
    let (dx, dy) = direction.step();
    let mut targets = Vec::with_capacity(7);
    let mut current = from.offset(dx, dy);

    while let Some(square) = current {
        targets.push(square);
        if board.is_occupied(square) {
            break;
        }
        current = square.offset(dx, dy);
    }

    targets
}

/// Every square any of `possibilities` could geometrically reach from `from`,
/// in a fixed order: slides, knight jumps, king steps, then pawn moves. The
/// list may contain duplicates and squares that are not legal; callers validate
/// each one against the oracle.
pub fn candidate_targets(
    board: &Board,
    from: Square,
    team: Team,
    possibilities: Possibilities,
) -> Vec<Square> {
    let mut targets = Vec::with_capacity(32);

    if possibilities.iter().any(PieceType::is_sliding) {
        let directions: Vec<Direction> = if possibilities.contains(PieceType::Queen) {
            BISHOP_DIRS.iter().chain(ROOK_DIRS.iter()).copied().collect()
        } else {
            let mut directions = Vec::with_capacity(8);
            if possibilities.contains(PieceType::Bishop) {
                directions.extend_from_slice(&BISHOP_DIRS);
            }
            if possibilities.contains(PieceType::Rook) {
                directions.extend_from_slice(&ROOK_DIRS);
            }
            directions
        };

        for direction in directions {
            targets.extend(ray_targets(board, from, direction));
        }
    }

    if possibilities.contains(PieceType::Knight) {
        targets.extend(step_targets(from, &KNIGHT_OFFSETS));
    }

    if possibilities.contains(PieceType::King) {
        targets.extend(step_targets(from, &KING_OFFSETS));
    }

    if possibilities.contains(PieceType::Pawn) {
        let forward = team.pawn_direction();
        targets.extend(step_targets(
            from,
            &[(0, forward), (0, forward * 2), (-1, forward), (1, forward)],
        ));
    }

    targets
}

fn step_targets(from: Square, offsets: &[(i8, i8)]) -> impl Iterator<Item = Square> + '_ {
    offsets
        .iter()
        .filter_map(move |&(dx, dy)| from.offset(dx, dy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::square::*;

    #[test]
    fn test_ray_stops_at_first_occupied_square() {
        let mut board = Board::new();
        board.put(A4, 7).unwrap();
        let targets = ray_targets(&board, A1, Direction::North);
        assert_eq!(targets, vec![A2, A3, A4]);
    }

    #[test]
    fn test_ray_from_edge_is_empty() {
        let board = Board::new();
        assert!(ray_targets(&board, H8, Direction::NorthEast).is_empty());
    }

    #[test]
    fn test_knight_candidates_from_corner() {
        let board = Board::new();
        let mut targets =
            candidate_targets(&board, A1, Team::White, Possibilities::only(PieceType::Knight));
        targets.sort();
        let mut expected = vec![B3, C2];
        expected.sort();
        assert_eq!(targets, expected);
    }

    #[test]
    fn test_pawn_candidates_follow_team_direction() {
        let board = Board::new();
        let targets =
            candidate_targets(&board, D7, Team::Black, Possibilities::only(PieceType::Pawn));
        assert_eq!(targets, vec![D6, D5, C6, E6]);
    }
}
