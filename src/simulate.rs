//! Advisor-driven batch simulation with summary statistics.

use engine::advisor;
use engine::constants::{Direction, WINNING_TILE};
use engine::game::Game;
use std::fmt;

/// Plays `games` full games driven entirely by the advisor and prints a
/// summary report. With a seed, game `i` runs on `seed + i`.
pub fn run(games: u32, seed: Option<u64>) {
    let mut top_tiles = Vec::with_capacity(games as usize);
    for i in 0..games {
        let mut game = match seed {
            Some(seed) => Game::with_seed(seed.wrapping_add(u64::from(i))),
            None => Game::new(),
        };
        play_out(&mut game);
        top_tiles.push(game.board().largest_tile());
        log::debug!(
            "game {} finished: score {}, top tile {}",
            i,
            game.score(),
            game.board().largest_tile()
        );
    }

    println!("{}", SimulationReport::from_top_tiles(&top_tiles));
}

/// Drives one game to completion on advisor suggestions alone.
fn play_out(game: &mut Game) {
    while !game.is_game_over() {
        let suggestion = advisor::suggest_move(game);
        if game.apply_move(suggestion).is_ok() {
            continue;
        }
        // The advisor's bootstrap and consolidation shortcuts can pick a
        // move that is not legal on this particular board. The game is not
        // over, so some direction still is.
        for direction in Direction::ALL {
            if game.apply_move(direction).is_ok() {
                break;
            }
        }
    }
}

/// Summary statistics over the top tile of each completed game.
#[derive(Debug, PartialEq)]
pub struct SimulationReport {
    pub games: usize,
    pub wins: usize,
    pub wins_beyond_2048: usize,
    pub top_tile: u32,
    pub win_percent: f64,
}

impl SimulationReport {
    /// Builds the report from the recorded top tile of each game. A win is
    /// a game whose top tile reached at least 2048.
    pub fn from_top_tiles(top_tiles: &[u32]) -> Self {
        let games = top_tiles.len();
        let wins = top_tiles.iter().filter(|&&t| t >= WINNING_TILE).count();
        let wins_beyond_2048 = top_tiles.iter().filter(|&&t| t > WINNING_TILE).count();
        let top_tile = top_tiles.iter().copied().max().unwrap_or(0);
        let win_percent = if games == 0 {
            0.0
        } else {
            100.0 * wins as f64 / games as f64
        };
        Self {
            games,
            wins,
            wins_beyond_2048,
            top_tile,
            win_percent,
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Number of games played: {}", self.games)?;
        writeln!(f, "Number of wins: {}", self.wins)?;
        writeln!(
            f,
            "Number of wins greater than 2048: {}",
            self.wins_beyond_2048
        )?;
        writeln!(f, "Top tile: {}", self.top_tile)?;
        write!(f, "Percentage of wins: {}%", self.win_percent)
    }
}
