use crate::move_generator::MoveList;

/// Puts captures ahead of quiet moves, keeping the generation order within
/// each group.
pub fn sort_moves(moves: &mut MoveList) {
    moves.sort_by_key(|quantum_move| !quantum_move.is_capture);
}
