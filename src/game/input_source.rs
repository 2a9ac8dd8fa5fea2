use crate::board::Team;
use crate::input_handler::{self, InputError, MoveInput};

pub trait InputSource {
    fn get_move(&self, current_turn: Team) -> Result<Option<MoveInput>, InputError>;
}

pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_move(&self, _current_turn: Team) -> Result<Option<MoveInput>, InputError> {
        read_human_move()
    }
}

pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_move(&self, _current_turn: Team) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::UseEngine))
    }
}

pub struct ConditionalInput {
    pub human_team: Team,
}

impl InputSource for ConditionalInput {
    fn get_move(&self, current_turn: Team) -> Result<Option<MoveInput>, InputError> {
        if current_turn == self.human_team {
            read_human_move()
        } else {
            Ok(Some(MoveInput::UseEngine))
        }
    }
}

fn read_human_move() -> Result<Option<MoveInput>, InputError> {
    human_move(input_handler::parse_move_input())
}

/// `Ok(None)` asks the player again.
fn human_move(input: Result<MoveInput, InputError>) -> Result<Option<MoveInput>, InputError> {
    match input {
        Ok(move_input) => Ok(Some(move_input)),
        Err(InputError::UserExit) => Err(InputError::UserExit),
        Err(error @ InputError::IOError { .. }) => Err(error),
        Err(_) => Ok(None), // anything else is a typo; ask again
    }
}
