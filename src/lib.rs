pub mod alpha_beta_searcher;
pub mod board;
pub mod entanglement;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod move_generator;
pub mod prelude;
pub mod quantum_move;
