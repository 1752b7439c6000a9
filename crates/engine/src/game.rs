//! The live game state: one board, the cumulative score, and the advisor's
//! session memory.

use crate::board::Board;
use crate::constants::{Direction, BOARD_SIZE, FOUR_SPAWN_ODDS, WINNING_TILE};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Errors the engine reports to its callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The requested move cannot change the board. The game state is left
    /// untouched; callers should gate on `is_move_legal` and re-prompt.
    #[error("move {0:?} is not legal on the current board")]
    IllegalMove(Direction),
}

/// One game of 2048.
///
/// Created empty, seeded with two random tiles before play begins, and
/// mutated once per accepted move (shift, merge, refill with one random
/// tile). The score is the running sum of all merge results and never
/// decreases. `last_move_up` is session memory for the advisor: it is set
/// when the advisor was forced to suggest up, and consumed on the next
/// suggestion to steer back down.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    score: u32,
    last_move_up: bool,
    rng: SmallRng,
}

impl Game {
    /// Creates a game with an entropy-seeded RNG and two starting tiles.
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Creates a game with a fixed seed, for reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        let mut game = Self {
            board: Board::new(),
            score: 0,
            last_move_up: false,
            rng,
        };
        game.spawn_random_tile();
        game.spawn_random_tile();
        game
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cumulative score: the sum of every merged tile created so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the previous advisor suggestion was a forced up move.
    pub fn last_move_up(&self) -> bool {
        self.last_move_up
    }

    pub(crate) fn set_last_move_up(&mut self, value: bool) {
        self.last_move_up = value;
    }

    /// Clears and returns the forced-up flag.
    pub(crate) fn take_last_move_up(&mut self) -> bool {
        std::mem::replace(&mut self.last_move_up, false)
    }

    pub(crate) fn rng_mut(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// True if a move in `direction` would change the board.
    pub fn is_move_legal(&self, direction: Direction) -> bool {
        self.board.is_move_legal(direction)
    }

    /// Applies one move: shift, merge, re-shift, then spawn one random tile.
    ///
    /// Rejects illegal moves without touching any state. The score grows by
    /// the value of every merged tile the move created.
    pub fn apply_move(&mut self, direction: Direction) -> Result<(), MoveError> {
        if !self.board.is_move_legal(direction) {
            return Err(MoveError::IllegalMove(direction));
        }
        self.score += self.board.slide(direction);
        self.spawn_random_tile();
        Ok(())
    }

    /// True iff some cell holds a tile of at least 2048.
    pub fn is_game_won(&self) -> bool {
        self.board.largest_tile() >= WINNING_TILE
    }

    /// True iff no direction is legal.
    pub fn is_game_over(&self) -> bool {
        Direction::ALL
            .iter()
            .all(|&direction| !self.board.is_move_legal(direction))
    }

    /// Places one tile on a uniformly random empty cell: a 4 with
    /// probability 1/10, otherwise a 2. Collisions with occupied cells are
    /// recovered by redrawing fresh random coordinates, never by scanning.
    fn spawn_random_tile(&mut self) {
        debug_assert!(self.board.has_empty_cell(), "no room to spawn a tile");
        loop {
            let row = self.rng.gen_range(0..BOARD_SIZE);
            let col = self.rng.gen_range(0..BOARD_SIZE);
            if self.board.tile(row, col).is_none() {
                let value = if self.rng.gen_range(0..FOUR_SPAWN_ODDS) == 0 {
                    4
                } else {
                    2
                };
                self.board.place_tile(row, col, value);
                return;
            }
        }
    }

    /// Builds a game in a known state. Test-only.
    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, score: u32, seed: u64) -> Self {
        Self {
            board,
            score,
            last_move_up: false,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
