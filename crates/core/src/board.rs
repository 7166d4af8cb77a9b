//! Board module - owns the grid and applies moves
//!
//! The grid is `height x width` cells stored as a flat row-major vector
//! (`row * width + col`). Coordinates are `(row, col)` with row 0 at the top
//! and column 0 on the left. Dimensions are fixed at construction.
//!
//! A move walks one line per starting cell. Starting cells sit on the edge the
//! tiles compact toward, and each line is read by stepping away from that edge
//! with [`Direction::offset`], so index 0 of every extracted line is the cell
//! nearest the destination edge. The line is merged, written back along the
//! same walk, and if any cell changed a single new tile is spawned.

use std::fmt;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::BoardError;
use crate::merge::merge_in_place;
use crate::rng::{spawn_value, SpawnRng};
use crate::snapshot::BoardSnapshot;
use crate::types::{Direction, Tile, EMPTY, INITIAL_TILES, MIN_CELLS};

/// The game board - a fixed-size grid of tiles plus its spawn RNG
#[derive(Debug, Clone)]
pub struct Board<R = StdRng> {
    height: usize,
    width: usize,
    /// Flat array of tiles, row-major order (row * width + col)
    cells: Vec<Tile>,
    /// Starting cells per direction, indexed by [`Direction::index`]
    starts: [Vec<(usize, usize)>; 4],
    rng: R,
}

impl Board<StdRng> {
    /// Create a board seeded from OS entropy
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        Self::with_rng(height, width, StdRng::from_entropy())
    }

    /// Create a board whose spawns are reproducible for a given seed
    pub fn with_seed(height: usize, width: usize, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(height, width, StdRng::seed_from_u64(seed))
    }
}

impl<R: SpawnRng> Board<R> {
    /// Create a board that draws spawns from `rng`
    ///
    /// Grids with fewer than two cells are rejected. The board starts out
    /// reset, holding two random tiles.
    pub fn with_rng(height: usize, width: usize, rng: R) -> Result<Self, BoardError> {
        if height == 0 || width == 0 || height.saturating_mul(width) < MIN_CELLS {
            return Err(BoardError::GridTooSmall { height, width });
        }

        let mut board = Self {
            height,
            width,
            cells: vec![EMPTY; height * width],
            starts: starting_cells(height, width),
            rng,
        };
        board.reset();
        Ok(board)
    }

    /// Clear the grid and place the initial tiles
    pub fn reset(&mut self) {
        self.clear();
        for _ in 0..INITIAL_TILES {
            self.new_tile();
        }
        debug!("reset {}x{} board", self.height, self.width);
    }

    /// Set every cell to empty without spawning anything
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Number of rows
    pub fn grid_height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub fn grid_width(&self) -> usize {
        self.width
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.height || col >= self.width {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }

    /// Get the tile at `(row, col)`
    pub fn get_tile(&self, row: usize, col: usize) -> Result<Tile, BoardError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the tile at `(row, col)`
    ///
    /// The value is stored as given; callers seeding scenarios are trusted to
    /// pass 0 or a power of two.
    pub fn set_tile(&mut self, row: usize, col: usize, value: Tile) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Coordinates of every empty cell, row-major
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile == EMPTY)
            .map(|(idx, _)| (idx / self.width, idx % self.width))
            .collect()
    }

    /// Pick one empty cell uniformly at random, or `None` if the board is full
    pub fn find_random_empty_tile(&mut self) -> Option<(usize, usize)> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let pick = self.rng.pick_index(empty.len());
        empty.get(pick).copied()
    }

    /// Spawn a 2 (90%) or 4 (10%) in a random empty cell
    ///
    /// A full board is left untouched, but the value draw is still consumed.
    /// Returns where the tile landed.
    pub fn new_tile(&mut self) -> Option<(usize, usize)> {
        let unit = self.rng.next_unit();
        let Some((row, col)) = self.find_random_empty_tile() else {
            debug!("board full, no tile spawned");
            return None;
        };

        let value = spawn_value(unit);
        self.cells[row * self.width + col] = value;
        trace!("spawned {} at ({}, {})", value, row, col);
        Some((row, col))
    }

    /// Length of the lines walked for `direction`
    fn line_len(&self, direction: Direction) -> usize {
        if direction.is_vertical() {
            self.height
        } else {
            self.width
        }
    }

    /// Slide every line toward `direction`
    ///
    /// Spawns one tile if any cell changed. Returns whether anything changed;
    /// a move that changes nothing leaves the board exactly as it was.
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        let (d_row, d_col) = direction.offset();
        let steps = self.line_len(direction);
        let width = self.width;

        let mut indices: Vec<usize> = Vec::with_capacity(steps);
        let mut line: Vec<Tile> = Vec::with_capacity(steps);
        let mut has_changes = false;

        for &(row0, col0) in &self.starts[direction.index()] {
            indices.clear();
            indices.extend((0..steps as isize).map(|step| {
                let row = (row0 as isize + step * d_row) as usize;
                let col = (col0 as isize + step * d_col) as usize;
                row * width + col
            }));

            line.clear();
            line.extend(indices.iter().map(|&idx| self.cells[idx]));

            if merge_in_place(&mut line) {
                has_changes = true;
                for (&idx, &value) in indices.iter().zip(&line) {
                    self.cells[idx] = value;
                }
                trace!("{} line from ({}, {}) -> {:?}", direction.as_str(), row0, col0, line);
            }
        }

        if has_changes {
            self.new_tile();
        } else {
            debug!("move {} changed nothing", direction.as_str());
        }
        has_changes
    }

    /// Mutable access to the spawn RNG (e.g. to queue scripted draws)
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R> Board<R> {
    /// Flat row-major view of the grid
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&tile| tile != EMPTY).count()
    }

    /// Copy the grid into a serializable snapshot
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_rows(self.height, self.width, self.rows())
    }
}

impl<R> fmt::Display for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for tile in row {
                if !first {
                    f.write_str(", ")?;
                }
                write!(f, "{}", tile)?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Starting cells per direction, in [`Direction::ALL`] order
fn starting_cells(height: usize, width: usize) -> [Vec<(usize, usize)>; 4] {
    Direction::ALL.map(|direction| match direction {
        Direction::Up => (0..width).map(|col| (0, col)).collect(),
        Direction::Down => (0..width).map(|col| (height - 1, col)).collect(),
        Direction::Left => (0..height).map(|row| (row, 0)).collect(),
        Direction::Right => (0..height).map(|row| (row, width - 1)).collect(),
    })
}
