//! Shared utilities for CLI commands.

use quantum_chess::board::Position;
use quantum_chess::game::engine::EngineConfig;
use quantum_chess::game::input_source::InputSource;
use quantum_chess::game::r#loop::GameLoop;
use quantum_chess::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(
    input_source: I,
    renderer: R,
    config: EngineConfig,
    max_moves: Option<usize>,
) where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config).with_max_moves(max_moves);
    game.run();
}

pub(crate) fn create_config(depth: u8) -> EngineConfig {
    EngineConfig {
        search_depth: depth,
        starting_position: Position::starting_position(),
    }
}
