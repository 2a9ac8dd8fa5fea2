//! Calculate best move command - determine the best move after a sequence of moves.

use quantum_chess::game::engine::{Engine, EngineConfig};
use quantum_chess::input_handler::MoveInput;
use structopt::StructOpt;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(
        long = "moves",
        default_value = "",
        help = "Space separated coordinate moves to replay first, e.g. \"b2c4 g7g5\""
    )]
    pub moves: String,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let config: EngineConfig = create_config(self.depth);
        let mut engine = Engine::with_config(config);

        for notation in self.moves.split_whitespace() {
            let input = match notation.parse::<MoveInput>() {
                Ok(input) => input,
                Err(err) => {
                    eprintln!("Could not parse move {}: {}", notation, err);
                    return;
                }
            };
            if let Err(err) = engine.make_move_from_input(input) {
                eprintln!("Could not replay move {}: {}", notation, err);
                return;
            }
        }

        if let Some(winner) = engine.check_game_over() {
            println!("The game is already over. Winner: {}", winner);
            return;
        }

        if engine.all_valid_moves().is_empty() {
            eprintln!("There are no valid moves in the given position.");
            return;
        }

        match engine.best_move() {
            Ok(best_move) => println!("{}", best_move),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
