use std::time::Duration;

use crate::board::Team;
use crate::evaluate::piece_values::VALUE_SCALE;
use crate::game::display::GameDisplay;
use crate::game::engine::Engine;

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Team, last_move: Option<&str>);
    fn frame_delay(&self) -> Option<Duration>;
}

pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Team, last_move: Option<&str>) {
        ui.render_game_state(engine.position(), current_turn, last_move, None);
        println!("Enter your move (e.g. b2c4, q to quit):");
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Team, last_move: Option<&str>) {
        let stats = stats_display(engine);
        ui.render_game_state(engine.position(), current_turn, last_move, Some(&stats));
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

pub struct ConditionalStatsRenderer {
    pub human_team: Team,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Team, last_move: Option<&str>) {
        let stats = stats_display(engine);
        ui.render_game_state(engine.position(), current_turn, last_move, Some(&stats));
        if current_turn == self.human_team {
            println!("Enter your move (e.g. b2c4, q to quit):");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

fn stats_display(engine: &Engine) -> String {
    let stats = engine.search_stats();
    format!(
        "* Score: {} cp\n* Positions searched: {} (depth: {})\n* Move took: {}",
        engine.score() / VALUE_SCALE,
        stats.positions_searched,
        stats.depth,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}
