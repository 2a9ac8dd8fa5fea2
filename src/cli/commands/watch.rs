//! Watch command - watch the computer play against itself.

use std::time::Duration;

use quantum_chess::game::input_source::EngineInput;
use quantum_chess::game::renderer::StatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long = "max-moves", help = "Stop after this many moves")]
    pub max_moves: Option<usize>,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.depth);
        let renderer = StatsRenderer {
            delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
        };
        run_game_loop(EngineInput, renderer, config, self.max_moves);
    }
}
