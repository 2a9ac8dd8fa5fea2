//! Play command - play a game against the computer.

use quantum_chess::board::Team;
use quantum_chess::game::input_source::ConditionalInput;
use quantum_chess::game::renderer::ConditionalStatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub team: Team,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.depth);
        run_game_loop(
            ConditionalInput {
                human_team: self.team,
            },
            ConditionalStatsRenderer {
                human_team: self.team,
            },
            config,
            None,
        );
    }
}
