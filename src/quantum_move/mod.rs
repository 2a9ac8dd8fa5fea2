//! Applying a move: observation of the moving piece, board update and
//! entanglement resolution for both teams.

pub mod error;
pub mod event;

use core::fmt;

use common::Square;
use log::debug;

use crate::board::{PieceId, Position, QuantumPiece, Team};
use crate::entanglement::{self, EntanglementAnomaly};
use crate::evaluate;
use crate::move_generator::filter_possibilities;

pub use error::IllegalMoveError;
pub use event::MoveEvent;

/// A move of one piece from one square to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct QuantumMove {
    pub piece_id: PieceId,
    pub from: Square,
    pub to: Square,
    pub is_capture: bool,
}

impl fmt::Display for QuantumMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.is_capture { "x" } else { "" };
        write!(f, "{}{}{}", self.from, separator, self.to)
    }
}

/// The result of a successful `attempt_move`.
#[derive(Clone, Debug)]
pub struct AppliedMove {
    /// The successor position, after observation and entanglement.
    pub position: Position,
    pub quantum_move: QuantumMove,
    /// The captured piece as it stands in the successor position.
    pub captured: Option<QuantumPiece>,
    pub message: String,
    pub events: Vec<MoveEvent>,
    pub anomalies: Vec<EntanglementAnomaly>,
}

/// Moves piece `piece_id` to `to`.
///
/// The move is an observation: the piece keeps only the types that could have
/// made it, and fails if none could. Both teams' entanglement is then resolved.
/// `position` is never modified; on success the successor is returned in the
/// `AppliedMove`.
pub fn attempt_move(
    position: &Position,
    piece_id: PieceId,
    to: Square,
) -> Result<AppliedMove, IllegalMoveError> {
    let piece = position
        .piece(piece_id)
        .ok_or(IllegalMoveError::PieceNotFound { piece_id })?;
    if piece.captured {
        return Err(IllegalMoveError::PieceCaptured { piece_id });
    }

    let from = piece.square;
    if to == from {
        return Err(IllegalMoveError::SameSquare {
            piece_id,
            square: from,
        });
    }

    let target = position.piece_at(to);
    if let Some(target) = target {
        if target.team == piece.team {
            return Err(IllegalMoveError::OwnPieceCapture { square: to });
        }
    }
    let captured_id = target.map(|target| target.id);
    let is_capture = captured_id.is_some();

    let observed = filter_possibilities(piece, to, position.board(), is_capture);
    if observed.is_empty() {
        return Err(IllegalMoveError::NoLegalType { piece_id, from, to });
    }

    let mut pieces = position.pieces().to_vec();
    for other in pieces.iter_mut() {
        if other.id == piece_id {
            other.possibilities = observed;
            other.square = to;
        } else if Some(other.id) == captured_id {
            other.captured = true;
        }
    }

    let mut board = position.board().clone();
    board.remove(from);
    board.replace(to, piece_id);

    let resolution = entanglement::resolve_all(&pieces);
    let next = Position::from_parts(board, resolution.pieces);

    let quantum_move = QuantumMove {
        piece_id,
        from,
        to,
        is_capture,
    };
    let message = match observed.confirmed() {
        Some(piece_type) => format!("Piece collapsed to {}!", piece_type.to_unicode_symbol()),
        None => format!("Piece now has {} possibilities", observed.len()),
    };
    let events = collect_events(position, &next, &quantum_move, captured_id);
    let captured = captured_id.and_then(|id| next.piece(id).copied());

    debug!("{} ({}): {}", quantum_move, observed, message);

    Ok(AppliedMove {
        position: next,
        quantum_move,
        captured,
        message,
        events,
        anomalies: resolution.anomalies,
    })
}

/// Like `attempt_move`, but takes raw coordinates and rejects ones off the board.
pub fn attempt_move_to_coordinates(
    position: &Position,
    piece_id: PieceId,
    x: i32,
    y: i32,
) -> Result<AppliedMove, IllegalMoveError> {
    let to = Square::try_from_coords(x, y).map_err(|_| IllegalMoveError::OutOfBounds { x, y })?;
    attempt_move(position, piece_id, to)
}

fn collect_events(
    before: &Position,
    after: &Position,
    quantum_move: &QuantumMove,
    captured_id: Option<PieceId>,
) -> Vec<MoveEvent> {
    let mut events = vec![MoveEvent::Moved {
        piece_id: quantum_move.piece_id,
        from: quantum_move.from,
        to: quantum_move.to,
    }];

    if let Some(captured_id) = captured_id {
        events.push(MoveEvent::Captured {
            piece_id: captured_id,
            by: quantum_move.piece_id,
            square: quantum_move.to,
        });
    }

    for (old, new) in before.pieces().iter().zip(after.pieces()) {
        if old.possibilities.is_confirmed() {
            continue;
        }
        if let Some(piece_type) = new.confirmed_type() {
            events.push(MoveEvent::Collapsed {
                piece_id: new.id,
                piece_type,
            });
        }
    }

    for &team in &Team::ALL {
        if evaluate::is_king_in_check(after, team) {
            events.push(MoveEvent::Check { team });
        }
    }

    events
}
