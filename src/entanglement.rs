//! Team-wide consistency for superposed pieces.
//!
//! Each team owns a fixed pool of types (see `PieceType::limit`). Once a type's
//! confirmed count reaches its limit, no superposed piece of that team can
//! still be that type, which may confirm further pieces, which may exhaust
//! further types. Resolution repeats until nothing changes.

use log::{error, warn};

use crate::board::type_counts::count_confirmed;
use crate::board::{PieceId, PieceType, Possibilities, QuantumPiece, Team};

/// Safety cap on resolution passes. Every pass that changes anything removes at
/// least one possibility, so a team of 16 pieces converges long before this.
pub const MAX_RESOLUTION_PASSES: usize = 100;

/// Conditions that indicate broken bookkeeping. Resolution never fails on
/// them; it applies a fallback and reports what happened.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntanglementAnomaly {
    /// Every remaining type of the piece was exhausted. The piece is pinned to
    /// a pawn.
    EmptyPossibilities { piece_id: PieceId },
    /// Resolution was still changing pieces when the pass cap was hit.
    PassLimitReached { team: Team, passes: usize },
}

#[derive(Clone, Debug)]
pub struct Resolution {
    pub pieces: Vec<QuantumPiece>,
    pub passes: usize,
    pub anomalies: Vec<EntanglementAnomaly>,
}

/// Propagates `team`'s type limits through its superposed pieces until a
/// fixpoint is reached.
///
/// Confirmed counts are recounted at the start of every pass and include
/// captured pieces. A piece confirmed during a pass counts immediately for the
/// pieces examined after it. Captured pieces are never narrowed.
pub fn resolve(pieces: &[QuantumPiece], team: Team) -> Resolution {
    let mut result = pieces.to_vec();
    let mut anomalies = Vec::new();
    let mut passes = 0;
    let mut changed = true;

    while changed && passes < MAX_RESOLUTION_PASSES {
        changed = false;
        passes += 1;

        let mut confirmed = count_confirmed(&result, team);

        for piece in result.iter_mut().filter(|piece| {
            piece.team == team && piece.is_active() && piece.possibilities.is_superposed()
        }) {
            let remaining = piece
                .possibilities
                .filter(|piece_type| !confirmed.is_at_limit(piece_type));

            if remaining == piece.possibilities {
                continue;
            }
            changed = true;

            if remaining.is_empty() {
                error!(
                    "entanglement left piece {} ({}) with no possibilities, was {}; pinning it to a pawn",
                    piece.id, team, piece.possibilities
                );
                anomalies.push(EntanglementAnomaly::EmptyPossibilities { piece_id: piece.id });
                piece.possibilities = Possibilities::only(PieceType::Pawn);
                break;
            }

            if let Some(piece_type) = remaining.confirmed() {
                confirmed.increment(piece_type);
            }
            piece.possibilities = remaining;
        }
    }

    if changed {
        warn!(
            "entanglement for {} still changing after {} passes",
            team, passes
        );
        anomalies.push(EntanglementAnomaly::PassLimitReached { team, passes });
    }

    Resolution {
        pieces: result,
        passes,
        anomalies,
    }
}

/// Resolves white, then black. The teams draw from independent pools, so the
/// order does not change the outcome.
pub fn resolve_all(pieces: &[QuantumPiece]) -> Resolution {
    let white = resolve(pieces, Team::White);
    let black = resolve(&white.pieces, Team::Black);

    let mut anomalies = white.anomalies;
    anomalies.extend(black.anomalies);

    Resolution {
        pieces: black.pieces,
        passes: white.passes + black.passes,
        anomalies,
    }
}
