use clap::Parser;

mod simulate;
mod tui;

/// Play 2048 in the terminal, or run advisor-driven batch simulations.
#[derive(Parser, Debug)]
#[command(name = "game2048_rust")]
#[command(about = "2048 with a heuristic move advisor")]
struct Args {
    /// Run this many automated games driven by the advisor and print
    /// summary statistics instead of playing interactively.
    #[arg(short, long)]
    games: Option<u32>,

    /// Fix the random seed for reproducible runs.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match args.games {
        Some(games) => simulate::run(games, args.seed),
        None => tui::run(args.seed),
    }
}
