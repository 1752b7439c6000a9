//! The heuristic move advisor.
//!
//! Suggests a next move by simulating every ordered 3-move sequence drawn
//! from {down, left, right} against a copy of the live game and scoring the
//! resulting positions. Up is excluded from search because it pulls the
//! anchored bottom row apart; it is only ever suggested when nothing else
//! is legal, and that event is remembered on the game so the next call can
//! immediately steer back down.

use crate::config::AdvisorConfig;
use crate::constants::{Direction, BOTTOM_ROW};
use crate::game::Game;
use rand::Rng;

/// The candidate moves the search draws sequences from, in tie-break order.
const SEARCH_MOVES: [Direction; 3] = [Direction::Down, Direction::Left, Direction::Right];

/// Sequences are three moves deep.
const SEQUENCE_LEN: usize = 3;

/// Suggests a move for the current state of `game` using the default
/// weights.
///
/// The live game's board and score are never mutated; simulation runs on
/// deep copies. The one documented side effect is the game's forced-up
/// flag: it is consumed at the start of every call and set whenever the
/// advisor has to fall back to up.
pub fn suggest_move(game: &mut Game) -> Direction {
    suggest_move_with(game, &AdvisorConfig::default())
}

/// Like [`suggest_move`], with explicit weights.
pub fn suggest_move_with(game: &mut Game, config: &AdvisorConfig) -> Direction {
    // Opening book: push tiles left and down until the board has some
    // structure worth searching over.
    if game.score() < config.bootstrap_score {
        return bootstrap_move(game);
    }

    // A forced up move disturbed the bottom row; try to restore it first.
    if game.take_last_move_up() && game.is_move_legal(Direction::Down) {
        return Direction::Down;
    }

    // Consolidate an ordered but unsettled bottom row before anything
    // else destabilizes it further.
    let board = game.board();
    if board.is_row_ordered(BOTTOM_ROW) && !board.is_row_stable(BOTTOM_ROW) {
        return Direction::Left;
    }

    let mut best_score: Option<i64> = None;
    let mut best_first: Option<Direction> = None;
    for &first in &SEARCH_MOVES {
        for &second in &SEARCH_MOVES {
            for &third in &SEARCH_MOVES {
                let sequence = [first, second, third];
                if let Some(score) = assess_sequence(game, sequence, config) {
                    // Strictly-greater keeps the earliest sequence in the
                    // fixed down < left < right enumeration on ties.
                    if best_score.map_or(true, |best| score > best) {
                        best_score = Some(score);
                        best_first = Some(first);
                    }
                }
            }
        }
    }

    match best_first {
        Some(direction) => direction,
        None => {
            // Every candidate opening move was illegal, so the only legal
            // move left on a live game is up.
            game.set_last_move_up(true);
            Direction::Up
        }
    }
}

/// Early-game policy: a coin flip between preferring left and preferring
/// down, falling back to the other, then to right as a last resort.
fn bootstrap_move(game: &mut Game) -> Direction {
    let (first, second) = if game.rng_mut().gen_bool(0.5) {
        (Direction::Left, Direction::Down)
    } else {
        (Direction::Down, Direction::Left)
    };
    if game.is_move_legal(first) {
        first
    } else if game.is_move_legal(second) {
        second
    } else {
        Direction::Right
    }
}

/// Scores one 3-move sequence against a copy of `game`.
///
/// Returns `None` when the sequence's first move is illegal on the current
/// board, which disqualifies it from consideration. Later steps that turn
/// out to be illegal are silently skipped instead.
fn assess_sequence(game: &Game, sequence: [Direction; SEQUENCE_LEN], config: &AdvisorConfig) -> Option<i64> {
    let mut sim = game.clone();
    let mut bonus: i64 = 0;

    let ordered = sim.board().is_row_ordered(BOTTOM_ROW);
    let gap = sim.board().bottom_row_has_gap();
    match sequence[0] {
        Direction::Left => {
            if !sim.is_move_legal(Direction::Left) {
                return None;
            }
            if ordered && gap {
                bonus += config.left_consolidation_bonus;
            }
        }
        Direction::Down => {
            if !sim.is_move_legal(Direction::Down) {
                return None;
            }
            if ordered && gap {
                bonus -= config.bottom_disruption_penalty;
            }
        }
        Direction::Right => {
            if !sim.is_move_legal(Direction::Right) {
                return None;
            }
            if ordered && gap {
                bonus -= config.bottom_disruption_penalty;
            }
            if ordered && sim.board().is_row_stable(BOTTOM_ROW) {
                bonus += config.stable_right_bonus;
            }
        }
        Direction::Up => {
            // Sequences are drawn from SEARCH_MOVES only.
            log::error!("up reached the advisor's sequence scoring");
            debug_assert!(false, "up is never a search candidate");
            return None;
        }
    }

    let initial_score = sim.score();
    let initial_bottom_sum = sim.board().bottom_row_sum() as i64;

    for &step in &sequence {
        match step {
            Direction::Down => {
                // Legality is re-checked before each step; skipped steps
                // simply contribute nothing.
                if sim.is_move_legal(Direction::Down) {
                    let _ = sim.apply_move(Direction::Down);
                }
            }
            Direction::Left => {
                if sim.is_move_legal(Direction::Left) {
                    if sim.board().is_row_ordered(BOTTOM_ROW) && sim.board().bottom_row_has_gap() {
                        bonus += config.left_keeps_bottom_bonus;
                    }
                    let _ = sim.apply_move(Direction::Left);
                }
            }
            Direction::Right => {
                bonus -= config.right_move_cost;
                if sim.is_move_legal(Direction::Right) {
                    if sim.board().is_row_ordered(BOTTOM_ROW)
                        && !sim.board().is_row_stable(BOTTOM_ROW)
                    {
                        bonus -= config.right_destabilization_penalty;
                    }
                    let _ = sim.apply_move(Direction::Right);
                }
            }
            Direction::Up => {
                log::error!("up reached the advisor's sequence scoring");
                debug_assert!(false, "up is never a search candidate");
            }
        }
    }

    let improvement = (sim.score() - initial_score) as i64;
    if sim.board().is_row_ordered(BOTTOM_ROW) {
        bonus += config.ordered_bottom_bonus;
    }
    if sim.board().largest_tile_position() == Some((BOTTOM_ROW, 0)) {
        bonus += config.anchored_corner_bonus;
    }
    let bottom_sum_delta = sim.board().bottom_row_sum() as i64 - initial_bottom_sum;

    Some(improvement + bonus + config.bottom_row_weight * bottom_sum_delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn sequences_with_an_illegal_first_move_are_disqualified() {
        // Down and left are illegal here; only right (and up) can move.
        let board = Board::from_values([
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [4, 2, 0, 0],
            [2, 4, 8, 16],
        ]);
        assert!(!board.is_move_legal(Direction::Down));
        assert!(!board.is_move_legal(Direction::Left));
        assert!(board.is_move_legal(Direction::Right));

        let game = Game::from_parts(board, 500, 7);
        let config = AdvisorConfig::default();
        for &second in &SEARCH_MOVES {
            for &third in &SEARCH_MOVES {
                assert_eq!(
                    assess_sequence(&game, [Direction::Down, second, third], &config),
                    None
                );
                assert_eq!(
                    assess_sequence(&game, [Direction::Left, second, third], &config),
                    None
                );
            }
        }

        // With every down/left sequence excluded, only right can win.
        let mut game = game;
        assert_eq!(suggest_move(&mut game), Direction::Right);
    }

    #[test]
    fn forced_up_is_remembered_and_recovered_from() {
        // Down, left and right are all illegal; only up can move.
        let board = Board::from_values([
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
        ]);
        for direction in [Direction::Down, Direction::Left, Direction::Right] {
            assert!(!board.is_move_legal(direction));
        }
        let mut game = Game::from_parts(board, 500, 11);

        assert_eq!(suggest_move(&mut game), Direction::Up);
        assert!(game.last_move_up());

        // After the up move the bottom opens up again; the advisor must
        // consume the flag and steer straight back down.
        game.apply_move(Direction::Up).unwrap();
        assert!(game.is_move_legal(Direction::Down));
        assert_eq!(suggest_move(&mut game), Direction::Down);
        assert!(!game.last_move_up());
    }

    #[test]
    fn ordered_unstable_bottom_row_suggests_left() {
        // Bottom row ordered but not full, with enough board elsewhere
        // that the search path would otherwise run.
        let board = Board::from_values([
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [2, 2, 0, 0],
            [64, 32, 8, 0],
        ]);
        let mut game = Game::from_parts(board, 500, 3);
        assert_eq!(suggest_move(&mut game), Direction::Left);
    }

    #[test]
    fn bootstrap_never_suggests_up() {
        for seed in 0..32 {
            let mut game = Game::with_seed(seed);
            assert!(game.score() < AdvisorConfig::default().bootstrap_score);
            let suggestion = suggest_move(&mut game);
            assert_ne!(suggestion, Direction::Up);
            // Left and down are only suggested when they are legal; right
            // is the unchecked last resort.
            if suggestion != Direction::Right {
                assert!(game.is_move_legal(suggestion));
            }
        }
    }
}
