mod cli;

use cli::commands::Command;
use cli::QuantumChess;
use env_logger::Env;
use structopt::StructOpt;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    QuantumChess::from_args().execute();
}
