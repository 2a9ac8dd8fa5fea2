use common::Square;
use thiserror::Error;

use crate::board::{PieceId, Position, Team};
use crate::evaluate::{self, Winner};
use crate::quantum_move::{attempt_move, AppliedMove, IllegalMoveError};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Active,
    Finished,
}

/// One entry of the move history.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveRecord {
    pub piece_id: PieceId,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceId>,
}

#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
    #[error("piece {piece_id} belongs to {team}, but it is {turn}'s turn")]
    WrongTeam {
        piece_id: PieceId,
        team: Team,
        turn: Team,
    },
    #[error("illegal move: {error}")]
    IllegalMove { error: IllegalMoveError },
}

/// A game in progress: the current position, whose turn it is and how the
/// game got here.
#[derive(Clone, Debug)]
pub struct GameState {
    position: Position,
    turn: Team,
    history: Vec<MoveRecord>,
    status: GameStatus,
    winner: Option<Winner>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Position::starting_position())
    }
}

impl GameState {
    /// White moves first. A position that is already decided starts finished.
    pub fn new(position: Position) -> Self {
        let winner = evaluate::check_game_over(&position);
        let status = if winner.is_some() {
            GameStatus::Finished
        } else {
            GameStatus::Active
        };

        Self {
            position,
            turn: Team::White,
            history: Vec::new(),
            status,
            winner,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn turn(&self) -> Team {
        self.turn
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Plays `piece_id` to `to` for the side to move. On success the turn
    /// passes to the opponent and the game finishes if a king is gone.
    pub fn make_move(&mut self, piece_id: PieceId, to: Square) -> Result<AppliedMove, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        if let Some(piece) = self.position.piece(piece_id) {
            if piece.team != self.turn {
                return Err(GameError::WrongTeam {
                    piece_id,
                    team: piece.team,
                    turn: self.turn,
                });
            }
        }

        let applied = attempt_move(&self.position, piece_id, to)
            .map_err(|error| GameError::IllegalMove { error })?;

        self.history.push(MoveRecord {
            piece_id,
            from: applied.quantum_move.from,
            to,
            captured: applied.captured.map(|piece| piece.id),
        });
        self.position = applied.position.clone();
        self.turn = self.turn.opposite();

        if let Some(winner) = evaluate::check_game_over(&self.position) {
            self.winner = Some(winner);
            self.status = GameStatus::Finished;
        }

        Ok(applied)
    }

    /// Ends the game with `team`'s opponent as the winner.
    pub fn resign(&mut self, team: Team) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.winner = Some(Winner::of(team.opposite()));
        self.status = GameStatus::Finished;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceType, QuantumPiece};
    use crate::quantum_position;
    use common::square::*;

    #[test]
    fn test_moves_alternate_and_are_recorded() {
        let mut game = GameState::default();
        let white = game.position().board().get(B2).unwrap();
        let black = game.position().board().get(G7).unwrap();

        game.make_move(white, C4).unwrap();
        assert_eq!(game.turn(), Team::Black);

        assert_eq!(
            game.make_move(white, D6).unwrap_err(),
            GameError::WrongTeam {
                piece_id: white,
                team: Team::White,
                turn: Team::Black
            }
        );

        game.make_move(black, G5).unwrap();
        assert_eq!(game.turn(), Team::White);
        assert_eq!(
            game.history(),
            &[
                MoveRecord {
                    piece_id: white,
                    from: B2,
                    to: C4,
                    captured: None
                },
                MoveRecord {
                    piece_id: black,
                    from: G7,
                    to: G5,
                    captured: None
                },
            ]
        );
        assert_eq!(game.status(), GameStatus::Active);
    }

    #[test]
    fn test_illegal_move_leaves_state_alone() {
        let mut game = GameState::default();
        let rook_candidate = game.position().board().get(A1).unwrap();
        let before = game.position().clone();

        let error = game.make_move(rook_candidate, A4).unwrap_err();
        assert!(matches!(
            error,
            GameError::IllegalMove {
                error: IllegalMoveError::NoLegalType { .. }
            }
        ));
        assert_eq!(game.position(), &before);
        assert_eq!(game.turn(), Team::White);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_king_capture_finishes_the_game() {
        let position = quantum_position! {
            k.......
            ........
            ........
            ........
            ........
            ........
            ........
            R......K
        };
        let mut game = GameState::new(position);
        let rook = game.position().board().get(A1).unwrap();
        let king = game.position().board().get(A8).unwrap();

        let applied = game.make_move(rook, A8).unwrap();
        assert_eq!(applied.captured.map(|piece| piece.id), Some(king));
        assert_eq!(game.last_move().and_then(|record| record.captured), Some(king));
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.winner(), Some(Winner::White));

        assert_eq!(game.make_move(king, B8).unwrap_err(), GameError::GameOver);
    }

    #[test]
    fn test_decided_position_starts_finished() {
        let position = Position::from_pieces(vec![QuantumPiece::confirmed(
            0,
            Team::White,
            PieceType::King,
            E1,
        )])
        .unwrap();
        let game = GameState::new(position);
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Winner::White));
    }

    #[test]
    fn test_resign() {
        let mut game = GameState::default();
        game.resign(Team::White).unwrap();
        assert_eq!(game.winner(), Some(Winner::Black));
        assert_eq!(game.resign(Team::Black), Err(GameError::GameOver));
    }
}
