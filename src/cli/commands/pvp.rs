//! PvP command - play a game against another human.

use quantum_chess::game::input_source::HumanInput;
use quantum_chess::game::renderer::SimpleRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {}

impl Command for PvpArgs {
    fn execute(self) {
        let config = create_config(0);
        run_game_loop(HumanInput, SimpleRenderer, config, None);
    }
}
