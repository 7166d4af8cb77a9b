//! Snapshot module - a serializable copy of the grid
//!
//! Snapshots are detached from the board: they own their cells and carry no
//! RNG, so they can be logged, diffed, or emitted as JSON by a driver.

use serde::{Deserialize, Serialize};

use crate::types::{Tile, EMPTY};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub height: usize,
    pub width: usize,
    /// Rows top to bottom
    pub cells: Vec<Vec<Tile>>,
    /// Number of empty cells
    pub empty: usize,
    /// Largest tile on the board (0 for an empty board)
    pub max_tile: Tile,
}

impl BoardSnapshot {
    pub fn from_rows<'a>(
        height: usize,
        width: usize,
        rows: impl IntoIterator<Item = &'a [Tile]>,
    ) -> Self {
        let cells: Vec<Vec<Tile>> = rows.into_iter().map(|row| row.to_vec()).collect();
        let empty = cells.iter().flatten().filter(|&&tile| tile == EMPTY).count();
        let max_tile = cells.iter().flatten().copied().max().unwrap_or(EMPTY);

        Self {
            height,
            width,
            cells,
            empty,
            max_tile,
        }
    }

    /// Tile at `(row, col)`, `None` when out of bounds
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }
}
