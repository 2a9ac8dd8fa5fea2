//! Common types re-exported for convenience.

pub use crate::alpha_beta_searcher::{find_best_move, AlphaBetaSearcher};
pub use crate::board::{PieceId, PieceType, Position, Possibilities, QuantumPiece, Team};
pub use crate::evaluate::{check_game_over, is_king_in_check, score, Winner};
pub use crate::quantum_move::{attempt_move, AppliedMove, IllegalMoveError, QuantumMove};
pub use common::Square;
