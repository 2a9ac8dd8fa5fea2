use log::warn;

use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig};
use crate::input_handler::InputError;

use super::input_source::InputSource;
use super::renderer::GameRenderer;

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
    max_moves: Option<usize>,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            input_source,
            renderer,
            max_moves: None,
        }
    }

    /// Stops the game after this many moves have been played.
    pub fn with_max_moves(mut self, max_moves: Option<usize>) -> Self {
        self.max_moves = max_moves;
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn run(&mut self) {
        let mut last_move: Option<String> = None;

        loop {
            let current_turn = self.engine.turn();
            self.renderer
                .render(&mut self.ui, &self.engine, current_turn, last_move.as_deref());

            if let Some(winner) = self.engine.check_game_over() {
                println!("Game over! Winner: {}", winner);
                break;
            }
            if self.engine.all_valid_moves().is_empty() {
                println!("{} has no moves left.", current_turn);
                break;
            }
            if let Some(max_moves) = self.max_moves {
                if self.engine.state().history().len() >= max_moves {
                    println!("Stopped after {} moves.", max_moves);
                    break;
                }
            }

            match self.input_source.get_move(current_turn) {
                Ok(Some(input)) => match self.engine.make_move_from_input(input) {
                    Ok(applied) => {
                        last_move = Some(format!("{} ({})", applied.quantum_move, applied.message));
                        for anomaly in &applied.anomalies {
                            warn!("entanglement anomaly: {:?}", anomaly);
                        }
                        if let Some(delay) = self.renderer.frame_delay() {
                            std::thread::sleep(delay);
                        }
                    }
                    Err(error) => println!("error: {}", error),
                },
                Ok(None) => println!("Invalid input"),
                Err(InputError::UserExit) => break,
                Err(error) => {
                    println!("error: {}", error);
                    break;
                }
            }
        }
    }
}
