//! Minimax search with alpha-beta pruning over quantum positions.
//!
//! Every simulated move goes through `attempt_move`, so each node is evaluated
//! after observation and entanglement have been applied: a move that narrows
//! the mover's possibilities, or that forces collapses elsewhere, changes the
//! material balance the evaluation sees.

pub mod move_orderer;

use log::debug;
use thiserror::Error;

use crate::board::{Position, Team};
use crate::evaluate::{self, Winner};
use crate::move_generator::{generate_moves, MoveList};
use crate::quantum_move::{attempt_move, QuantumMove};

use self::move_orderer::sort_moves;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
}

pub struct AlphaBetaSearcher {
    search_depth: u8,
    searched_position_count: usize,
    termination_count: usize,
}

impl AlphaBetaSearcher {
    /// A depth of 0 is treated as 1: the root moves are always evaluated.
    pub fn new(depth: u8) -> Self {
        Self {
            search_depth: depth.max(1),
            searched_position_count: 0,
            termination_count: 0,
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.termination_count = 0;
    }

    /// Finds the best move for `team`. A move that captures the opposing king
    /// outright is returned without searching further. Among equally scored
    /// moves the first one generated wins.
    pub fn search(&mut self, position: &Position, team: Team) -> Result<QuantumMove, SearchError> {
        self.reset_stats();

        let candidates = ordered_moves(position, team);
        let first = *candidates.first().ok_or(SearchError::NoAvailableMoves)?;

        let maximizing = team.maximize_score();
        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best: Option<(QuantumMove, i32)> = None;

        for candidate in candidates.iter() {
            let applied = match attempt_move(position, candidate.piece_id, candidate.to) {
                Ok(applied) => applied,
                Err(error) => {
                    debug!("skipping {}: {}", candidate, error);
                    continue;
                }
            };

            if evaluate::check_game_over(&applied.position) == Some(Winner::of(team)) {
                debug!("{} captures the king", candidate);
                return Ok(*candidate);
            }

            let score = if maximizing {
                self.alpha_beta_min(self.search_depth - 1, &applied.position, alpha, beta)
            } else {
                self.alpha_beta_max(self.search_depth - 1, &applied.position, alpha, beta)
            };
            debug!("Root move {} scored {}", candidate, score);

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((*candidate, score));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        Ok(best.map(|(best_move, _)| best_move).unwrap_or(first))
    }

    /// White to move.
    fn alpha_beta_max(&mut self, depth: u8, position: &Position, mut alpha: i32, beta: i32) -> i32 {
        self.searched_position_count += 1;

        if depth == 0 || evaluate::check_game_over(position).is_some() {
            let score = evaluate::score(position);
            debug!("Eval score (max): {}", score);
            return score;
        }

        let mut best: Option<i32> = None;
        for candidate in ordered_moves(position, Team::White).iter() {
            let applied = match attempt_move(position, candidate.piece_id, candidate.to) {
                Ok(applied) => applied,
                Err(_) => continue,
            };

            let score = self.alpha_beta_min(depth - 1, &applied.position, alpha, beta);
            best = Some(best.map_or(score, |best| best.max(score)));
            alpha = alpha.max(score);

            if beta <= alpha {
                self.termination_count += 1;
                break;
            }
        }

        // no moves: the position stands as it is
        best.unwrap_or_else(|| evaluate::score(position))
    }

    /// Black to move.
    fn alpha_beta_min(&mut self, depth: u8, position: &Position, alpha: i32, mut beta: i32) -> i32 {
        self.searched_position_count += 1;

        if depth == 0 || evaluate::check_game_over(position).is_some() {
            let score = evaluate::score(position);
            debug!("Eval score (min): {}", score);
            return score;
        }

        let mut best: Option<i32> = None;
        for candidate in ordered_moves(position, Team::Black).iter() {
            let applied = match attempt_move(position, candidate.piece_id, candidate.to) {
                Ok(applied) => applied,
                Err(_) => continue,
            };

            let score = self.alpha_beta_max(depth - 1, &applied.position, alpha, beta);
            best = Some(best.map_or(score, |best| best.min(score)));
            beta = beta.min(score);

            if beta <= alpha {
                self.termination_count += 1;
                break;
            }
        }

        best.unwrap_or_else(|| evaluate::score(position))
    }
}

fn ordered_moves(position: &Position, team: Team) -> MoveList {
    let mut moves = generate_moves(position, team);
    sort_moves(&mut moves);
    moves
}

/// Convenience wrapper: the best move for `team` searched to `depth`, or
/// `None` when `team` has no legal move.
pub fn find_best_move(position: &Position, team: Team, depth: u8) -> Option<QuantumMove> {
    AlphaBetaSearcher::new(depth).search(position, team).ok()
}
