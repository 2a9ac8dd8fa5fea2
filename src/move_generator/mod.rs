//! The legality oracle: which of a piece's possible types could make a given
//! move, and where a piece may go at all.

pub mod targets;

use common::Square;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::{Board, PieceType, Position, Possibilities, QuantumPiece, Team};
use crate::quantum_move::QuantumMove;

pub type MoveList = SmallVec<[QuantumMove; 32]>;

/// A square a piece may move to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Destination {
    pub square: Square,
    pub is_capture: bool,
}

/// True if every square strictly between `from` and `to` is empty. Only
/// meaningful when the two squares share a rank, file or diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let dx = (to.x() as i8 - from.x() as i8).signum();
    let dy = (to.y() as i8 - from.y() as i8).signum();

    let mut current = from.offset(dx, dy);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if board.is_occupied(square) {
            return false;
        }
        current = square.offset(dx, dy);
    }

    // walked off the board without meeting `to`, so the squares were not aligned
    false
}

/// Whether a piece of `piece_type` belonging to `team` could move from `from`
/// to `to`. Ownership of the destination is not checked here.
pub fn is_legal_for_type(
    piece_type: PieceType,
    from: Square,
    to: Square,
    team: Team,
    board: &Board,
    is_capture: bool,
) -> bool {
    let dx = to.x() as i8 - from.x() as i8;
    let dy = to.y() as i8 - from.y() as i8;
    let abs_dx = dx.abs();
    let abs_dy = dy.abs();

    match piece_type {
        PieceType::Pawn => {
            let forward = team.pawn_direction();
            if is_capture {
                return dy == forward && abs_dx == 1;
            }
            if dx != 0 || board.is_occupied(to) {
                return false;
            }
            if dy == forward {
                return true;
            }
            dy == forward * 2
                && from.y() == team.pawn_home_rank()
                && from
                    .offset(0, forward)
                    .map_or(false, |middle| !board.is_occupied(middle))
        }
        PieceType::Knight => (abs_dx == 2 && abs_dy == 1) || (abs_dx == 1 && abs_dy == 2),
        PieceType::Bishop => abs_dx == abs_dy && abs_dx != 0 && is_path_clear(board, from, to),
        PieceType::Rook => (dx == 0) != (dy == 0) && is_path_clear(board, from, to),
        PieceType::Queen => {
            let straight = (dx == 0) != (dy == 0);
            let diagonal = abs_dx == abs_dy && abs_dx != 0;
            (straight || diagonal) && is_path_clear(board, from, to)
        }
        PieceType::King => abs_dx <= 1 && abs_dy <= 1 && abs_dx + abs_dy > 0,
    }
}

/// The subset of the piece's possibilities that explains a move to `to`.
/// This is the observation step: an empty result means no type could have
/// made the move.
pub fn filter_possibilities(
    piece: &QuantumPiece,
    to: Square,
    board: &Board,
    is_capture: bool,
) -> Possibilities {
    piece.possibilities.filter(|piece_type| {
        is_legal_for_type(piece_type, piece.square, to, piece.team, board, is_capture)
    })
}

/// Every square the piece could move to under at least one of its remaining
/// possibilities. Each square appears once, in first-found order.
pub fn legal_destinations(piece: &QuantumPiece, position: &Position) -> Vec<Destination> {
    if piece.captured {
        return Vec::new();
    }

    let board = position.board();
    let mut seen = FxHashSet::default();
    let mut destinations = Vec::new();

    for square in targets::candidate_targets(board, piece.square, piece.team, piece.possibilities)
    {
        if square == piece.square || seen.contains(&square) {
            continue;
        }

        let is_capture = match position.piece_at(square) {
            Some(occupant) if occupant.team == piece.team => continue,
            Some(_) => true,
            None => false,
        };

        if !filter_possibilities(piece, square, board, is_capture).is_empty() {
            seen.insert(square);
            destinations.push(Destination { square, is_capture });
        }
    }

    destinations
}

/// All moves available to `team`, piece by piece in position order.
pub fn generate_moves(position: &Position, team: Team) -> MoveList {
    let mut moves = MoveList::new();
    for piece in position.active_pieces(team) {
        for destination in legal_destinations(piece, position) {
            moves.push(QuantumMove {
                piece_id: piece.id,
                from: piece.square,
                to: destination.square,
                is_capture: destination.is_capture,
            });
        }
    }
    moves
}
