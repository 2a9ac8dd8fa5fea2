use std::time::{Duration, Instant};

use common::Square;
use log::info;
use thiserror::Error;

use crate::alpha_beta_searcher::{AlphaBetaSearcher, SearchError};
use crate::board::{PieceId, Position, Team};
use crate::evaluate::{self, Winner};
use crate::input_handler::MoveInput;
use crate::move_generator::{generate_moves, legal_destinations, Destination, MoveList};
use crate::quantum_move::{AppliedMove, QuantumMove};

use super::state::{GameError, GameState, MoveRecord};

/// Core engine configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub starting_position: Position,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 2,
            starting_position: Position::starting_position(),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("no piece on {square}")]
    EmptySquare { square: Square },
    #[error("{error}")]
    GameError { error: GameError },
    #[error("search error: {error}")]
    SearchError { error: SearchError },
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub depth: u8,
    pub last_search_duration: Option<Duration>,
}

/// Runs a game: validates and applies moves for the side to move and asks the
/// searcher for a move when the computer plays.
pub struct Engine {
    state: GameState,
    searcher: AlphaBetaSearcher,
    last_search_duration: Option<Duration>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: GameState::new(config.starting_position),
            searcher: AlphaBetaSearcher::new(config.search_depth),
            last_search_duration: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn position(&self) -> &Position {
        self.state.position()
    }

    pub fn turn(&self) -> Team {
        self.state.turn()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.state.last_move()
    }

    /// Where the given piece may go. Empty for unknown or captured pieces.
    pub fn valid_moves(&self, piece_id: PieceId) -> Vec<Destination> {
        self.position()
            .piece(piece_id)
            .map(|piece| legal_destinations(piece, self.position()))
            .unwrap_or_default()
    }

    /// Every move available to the side to move.
    pub fn all_valid_moves(&self) -> MoveList {
        generate_moves(self.position(), self.turn())
    }

    pub fn check_game_over(&self) -> Option<Winner> {
        self.state.winner()
    }

    pub fn score(&self) -> i32 {
        evaluate::score(self.position())
    }

    pub fn search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.searcher.searched_position_count(),
            depth: self.searcher.search_depth(),
            last_search_duration: self.last_search_duration,
        }
    }

    pub fn make_move(&mut self, piece_id: PieceId, to: Square) -> Result<AppliedMove, EngineError> {
        let team = self.turn();
        let applied = self
            .state
            .make_move(piece_id, to)
            .map_err(|error| EngineError::GameError { error })?;

        info!("{} played {}: {}", team, applied.quantum_move, applied.message);
        if let Some(winner) = self.state.winner() {
            info!("game over, winner: {}", winner);
        }
        Ok(applied)
    }

    pub fn make_move_by_squares(&mut self, from: Square, to: Square) -> Result<AppliedMove, EngineError> {
        let piece_id = self
            .position()
            .board()
            .get(from)
            .ok_or(EngineError::EmptySquare { square: from })?;
        self.make_move(piece_id, to)
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<AppliedMove, EngineError> {
        match input {
            MoveInput::Coordinate { from, to } => self.make_move_by_squares(from, to),
            MoveInput::UseEngine => self.make_engine_move(),
        }
    }

    /// The searcher's choice for the side to move.
    pub fn best_move(&mut self) -> Result<QuantumMove, EngineError> {
        let started = Instant::now();
        let result = self.searcher.search(self.state.position(), self.state.turn());
        self.last_search_duration = Some(started.elapsed());

        result.map_err(|error| EngineError::SearchError { error })
    }

    pub fn make_engine_move(&mut self) -> Result<AppliedMove, EngineError> {
        let best_move = self.best_move()?;
        self.make_move(best_move.piece_id, best_move.to)
    }

    pub fn resign(&mut self) -> Result<(), EngineError> {
        let team = self.turn();
        self.state
            .resign(team)
            .map_err(|error| EngineError::GameError { error })
    }
}
