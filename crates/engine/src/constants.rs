//! Constants and core enums for the 2048 engine.

/// The board is fixed at 4x4.
pub const BOARD_SIZE: usize = 4;

/// Index of the bottom row, the one the advisor tries to keep anchored.
pub const BOTTOM_ROW: usize = BOARD_SIZE - 1;

/// The tile value that wins the game.
pub const WINNING_TILE: u32 = 2048;

/// A spawned tile is a 4 one time in this many draws, otherwise a 2.
pub const FOUR_SPAWN_ODDS: u32 = 10;

/// One of the four directional inputs. A closed enumeration; every move
/// shifts the whole board toward one of these edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order they are checked for game over.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}
