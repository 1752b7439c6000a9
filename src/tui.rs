//! The textual user interface for the 2048 game.

use engine::advisor;
use engine::constants::Direction;
use engine::game::Game;
use std::io::{self, Write};

/// Runs the main interactive game loop.
pub fn run(seed: Option<u64>) {
    println!("--- 2048 ---");
    println!("Move with 'w' (up), 'a' (left), 's' (down), 'd' (right).");
    println!("Type 'ai' for a suggested move, or 'exit' to quit.");
    println!("The advisor assumes you stack your largest tiles at the bottom.");

    let mut game = new_game(seed);
    let mut win_announced = false;

    while !game.is_game_over() {
        println!();
        println!("Score: {}", game.score());
        println!("{}", game.board());

        if !win_announced && game.is_game_won() {
            win_announced = true;
            println!("Congrats, you won!");
            if !prompt_continue() {
                break;
            }
        }

        print!("Your move: ");
        io::stdout().flush().expect("flush failed!");

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            break;
        }
        let input = input.trim().to_lowercase();
        if input == "exit" {
            break;
        }

        let direction = match parse_direction(&input, &mut game) {
            Some(direction) => direction,
            None => {
                println!("Enter a valid move for the given board.");
                continue;
            }
        };

        if let Err(err) = game.apply_move(direction) {
            println!("{err}. Enter a valid move for the given board.");
        }
    }

    println!();
    println!("{}", game.board());
    println!("GAME OVER");
    println!("Your score was {}", game.score());
}

fn new_game(seed: Option<u64>) -> Game {
    match seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    }
}

/// Maps one line of input to a direction. `ai` asks the advisor, which may
/// set the game's forced-up flag as a side effect.
fn parse_direction(input: &str, game: &mut Game) -> Option<Direction> {
    match input {
        "w" => Some(Direction::Up),
        "a" => Some(Direction::Left),
        "s" => Some(Direction::Down),
        "d" => Some(Direction::Right),
        "ai" => {
            let suggestion = advisor::suggest_move(game);
            println!("The advisor suggests: {:?}", suggestion);
            Some(suggestion)
        }
        _ => None,
    }
}

fn prompt_continue() -> bool {
    print!("Keep playing? y/n: ");
    io::stdout().flush().expect("flush failed!");
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("y")
}
