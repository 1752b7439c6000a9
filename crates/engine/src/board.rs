//! The core board representation for the 2048 engine.

use crate::constants::{Direction, BOARD_SIZE, BOTTOM_ROW};
use std::fmt;

/// A single cell: `None` for empty, otherwise a power of two >= 2.
pub type Tile = Option<u32>;

/// The 4x4 grid of tiles, stored row-major.
///
/// Every occupied cell holds a power of two >= 2. The board itself never
/// spawns tiles or tracks score; that is the job of [`crate::game::Game`].
/// Cloning a board is how the advisor takes its snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Tile; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from raw values, with `0` meaning an empty cell.
    ///
    /// Mostly useful for setting up known positions in tests and examples.
    pub fn from_values(values: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Board::new();
        for (r, row) in values.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value != 0 {
                    board.cells[r][c] = Some(value);
                }
            }
        }
        board
    }

    /// Returns the tile at `(row, col)`.
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        self.cells[row][col]
    }

    /// Places a tile on an empty cell.
    ///
    /// Placing onto an occupied cell indicates an invariant violation
    /// upstream; the write is refused rather than corrupting the board.
    pub fn place_tile(&mut self, row: usize, col: usize, value: u32) {
        if self.cells[row][col].is_some() {
            log::error!("refusing to overwrite occupied cell ({}, {})", row, col);
            debug_assert!(false, "tile placed on occupied cell ({}, {})", row, col);
            return;
        }
        self.cells[row][col] = Some(value);
    }

    /// True if at least one cell is empty.
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().flatten().any(|tile| tile.is_none())
    }

    /// Number of occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|t| t.is_some()).count()
    }

    /// A move is legal iff some tile can slide into an empty neighbor or
    /// merge with an equal neighbor along the move's axis.
    pub fn is_move_legal(&self, direction: Direction) -> bool {
        for i in 0..BOARD_SIZE {
            let line = Self::line_coords(direction, i);
            for k in 1..BOARD_SIZE {
                let (r, c) = line[k];
                let (ahead_r, ahead_c) = line[k - 1];
                if let Some(value) = self.cells[r][c] {
                    let ahead = self.cells[ahead_r][ahead_c];
                    if ahead.is_none() || ahead == Some(value) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Shifts and merges all tiles toward `direction`, returning the sum of
    /// all newly created merged tiles.
    ///
    /// Three phases per line, scanning from the target edge inward:
    /// a maximal gravity shift with no merging, a single merge pass where
    /// each tile merges at most once (the scan index jumps past a merged
    /// pair, so no chain merges), and a re-shift to close merge gaps.
    /// Does not spawn a new tile; see [`crate::game::Game::apply_move`].
    pub(crate) fn slide(&mut self, direction: Direction) -> u32 {
        let mut gained = 0;
        for i in 0..BOARD_SIZE {
            let coords = Self::line_coords(direction, i);
            let mut line = coords.map(|(r, c)| self.cells[r][c]);
            compress(&mut line);
            gained += merge_once(&mut line);
            compress(&mut line);
            for (k, &(r, c)) in coords.iter().enumerate() {
                self.cells[r][c] = line[k];
            }
        }
        gained
    }

    /// The value of the largest tile, or 0 on an empty board.
    pub fn largest_tile(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// The position of the largest tile, ties broken by first occurrence in
    /// row-major order. `None` on an empty board.
    pub fn largest_tile_position(&self) -> Option<(usize, usize)> {
        let mut best = 0;
        let mut best_position = None;
        for (r, row) in self.cells.iter().enumerate() {
            for (c, tile) in row.iter().enumerate() {
                if let Some(value) = *tile {
                    if value > best {
                        best = value;
                        best_position = Some((r, c));
                    }
                }
            }
        }
        best_position
    }

    /// True if the occupied values of `row`, read left to right, are
    /// non-increasing. Empty cells are skipped.
    pub fn is_row_ordered(&self, row: usize) -> bool {
        let mut last: Tile = None;
        for tile in &self.cells[row] {
            if let (Some(previous), Some(value)) = (last, *tile) {
                if value > previous {
                    return false;
                }
            }
            if tile.is_some() {
                last = *tile;
            }
        }
        true
    }

    /// True if `row` is fully occupied with no two horizontally adjacent
    /// equal values, so a left or right move cannot change it.
    pub fn is_row_stable(&self, row: usize) -> bool {
        if self.cells[row].iter().any(|tile| tile.is_none()) {
            return false;
        }
        !self.cells[row].windows(2).any(|pair| pair[0] == pair[1])
    }

    /// True if some occupied bottom-row cell has an empty cell immediately
    /// to its left, meaning a vertical move could disturb the bottom row.
    pub fn bottom_row_has_gap(&self) -> bool {
        (1..BOARD_SIZE).any(|c| {
            self.cells[BOTTOM_ROW][c].is_some() && self.cells[BOTTOM_ROW][c - 1].is_none()
        })
    }

    /// Sum of the occupied tiles in the bottom row.
    pub fn bottom_row_sum(&self) -> u32 {
        self.cells[BOTTOM_ROW].iter().flatten().sum()
    }

    /// Coordinates of the `i`-th line for a move in `direction`, ordered so
    /// that index 0 is the target edge.
    fn line_coords(direction: Direction, i: usize) -> [(usize, usize); BOARD_SIZE] {
        let mut coords = [(0, 0); BOARD_SIZE];
        for (k, slot) in coords.iter_mut().enumerate() {
            *slot = match direction {
                Direction::Left => (i, k),
                Direction::Right => (i, BOARD_SIZE - 1 - k),
                Direction::Up => (k, i),
                Direction::Down => (BOARD_SIZE - 1 - k, i),
            };
        }
        coords
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Moves all occupied tiles to the front of the line, preserving order.
fn compress(line: &mut [Tile; BOARD_SIZE]) {
    let mut write = 0;
    for read in 0..BOARD_SIZE {
        if let Some(value) = line[read] {
            line[read] = None;
            line[write] = Some(value);
            write += 1;
        }
    }
}

/// Merges the first adjacent equal pair at each scan position, at most once
/// per tile. Returns the sum of the merged tiles created.
fn merge_once(line: &mut [Tile; BOARD_SIZE]) -> u32 {
    let mut gained = 0;
    let mut k = 0;
    while k + 1 < BOARD_SIZE {
        if line[k].is_some() && line[k] == line[k + 1] {
            let merged = line[k].unwrap_or(0) * 2;
            line[k] = Some(merged);
            line[k + 1] = None;
            gained += merged;
            k += 1; // the merged tile may not merge again this move
        }
        k += 1;
    }
    gained
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "+------+------+------+------+")?;
        for row in &self.cells {
            for tile in row {
                match tile {
                    Some(value) => write!(f, "| {:>4} ", value)?,
                    None => write!(f, "|    - ")?,
                }
            }
            writeln!(f, "|")?;
            writeln!(f, "+------+------+------+------+")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_predicates() {
        let board = Board::from_values([
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [64, 32, 8, 2],
        ]);
        assert!(board.is_row_ordered(3));
        assert!(board.is_row_stable(3));
        assert!(!board.bottom_row_has_gap());
        assert_eq!(board.bottom_row_sum(), 106);
    }

    #[test]
    fn ordered_ignores_empty_cells() {
        let board = Board::from_values([
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [64, 0, 8, 2],
        ]);
        assert!(board.is_row_ordered(3));
        // Not full, so never stable.
        assert!(!board.is_row_stable(3));
    }

    #[test]
    fn adjacent_equal_pair_is_unstable() {
        let board = Board::from_values([
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [64, 8, 8, 2],
        ]);
        assert!(board.is_row_ordered(3));
        assert!(!board.is_row_stable(3));
    }

    #[test]
    fn bottom_gap_detection() {
        let board = Board::from_values([
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [64, 0, 8, 0],
        ]);
        assert!(board.bottom_row_has_gap());
    }

    #[test]
    fn legality_requires_a_gap_or_a_merge() {
        // Checkerboard: nothing can slide or merge anywhere.
        let board = Board::from_values([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        for direction in Direction::ALL {
            assert!(!board.is_move_legal(direction));
        }
    }

    #[test]
    fn single_opportunity_makes_a_direction_legal() {
        // Only the vertical 2|2 pair in column 0 can move.
        let board = Board::from_values([
            [2, 4, 2, 4],
            [2, 8, 4, 2],
            [4, 4, 2, 4],
            [8, 2, 4, 2],
        ]);
        assert!(board.is_move_legal(Direction::Up));
        assert!(board.is_move_legal(Direction::Down));
    }

    #[test]
    fn slide_merges_each_tile_at_most_once() {
        let mut board = Board::from_values([
            [2, 2, 2, 2],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let gained = board.slide(Direction::Left);
        assert_eq!(gained, 8);
        assert_eq!(board.tile(0, 0), Some(4));
        assert_eq!(board.tile(0, 1), Some(4));
        assert_eq!(board.tile(0, 2), None);
        assert_eq!(board.tile(0, 3), None);
    }

    #[test]
    fn slide_reshifts_after_merging() {
        // [4, 2, 2, _] left: the 2s merge behind the 4 and close the gap.
        let mut board = Board::from_values([
            [4, 2, 2, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let gained = board.slide(Direction::Left);
        assert_eq!(gained, 4);
        assert_eq!(board.tile(0, 0), Some(4));
        assert_eq!(board.tile(0, 1), Some(4));
        assert_eq!(board.tile(0, 2), None);
    }

    #[test]
    fn single_tile_slides_to_the_far_edge() {
        let mut board = Board::from_values([
            [0, 0, 2, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        board.slide(Direction::Right);
        assert_eq!(board.tile(0, 3), Some(2));
        assert_eq!(board.occupied_cells(), 1);
    }

    #[test]
    fn largest_tile_ties_break_row_major() {
        let board = Board::from_values([
            [0, 8, 0, 0],
            [0, 0, 8, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        assert_eq!(board.largest_tile(), 8);
        assert_eq!(board.largest_tile_position(), Some((0, 1)));
    }
}
