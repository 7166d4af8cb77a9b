//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the game core, the demo
//! binary, and tests alike.
//!
//! # Tiles
//!
//! A tile is a `u32` cell value:
//!
//! - `0` is an empty cell
//! - any other value is a power of two, at least 2
//!
//! # Spawning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_TWO` | 2 | Spawned when the unit draw is `<= SPAWN_TWO_THRESHOLD` |
//! | `TILE_FOUR` | 4 | Spawned otherwise |
//! | `SPAWN_TWO_THRESHOLD` | 0.9 | Probability of spawning a 2 |
//! | `INITIAL_TILES` | 2 | Tiles placed by every reset |
//!
//! # Examples
//!
//! ```
//! use twenty48_types::{Direction, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("Up").unwrap();
//! assert_eq!(dir, Direction::Up);
//!
//! // Lines for UP are walked downwards, one row at a time
//! assert_eq!(dir.offset(), (1, 0));
//!
//! assert_eq!(DEFAULT_GRID_HEIGHT, 4);
//! assert_eq!(DEFAULT_GRID_WIDTH, 4);
//! ```

use serde::{Deserialize, Serialize};

/// A single cell value (0 = empty)
pub type Tile = u32;

/// Value of an empty cell
pub const EMPTY: Tile = 0;

/// Tile spawned 90% of the time
pub const TILE_TWO: Tile = 2;

/// Tile spawned 10% of the time
pub const TILE_FOUR: Tile = 4;

/// Unit draws at or below this value spawn a 2, anything above spawns a 4
pub const SPAWN_TWO_THRESHOLD: f64 = 0.9;

/// Number of tiles placed on a freshly reset board
pub const INITIAL_TILES: usize = 2;

/// Smallest grid (in cells) that can hold the initial tiles
pub const MIN_CELLS: usize = INITIAL_TILES;

/// Classic board height
pub const DEFAULT_GRID_HEIGHT: usize = 4;

/// Classic board width
pub const DEFAULT_GRID_WIDTH: usize = 4;

/// The four slide directions
///
/// Each direction names the edge tiles compact toward:
/// - **Up**: toward row 0
/// - **Down**: toward the last row
/// - **Left**: toward column 0
/// - **Right**: toward the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(d_row, d_col)` that walks a line away from its starting cell
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::Direction;
    ///
    /// assert_eq!(Direction::Up.offset(), (1, 0));
    /// assert_eq!(Direction::Down.offset(), (-1, 0));
    /// assert_eq!(Direction::Left.offset(), (0, 1));
    /// assert_eq!(Direction::Right.offset(), (0, -1));
    /// ```
    pub const fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, 1),
            Direction::Right => (0, -1),
        }
    }

    /// True when lines run along columns (Up/Down)
    pub const fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Position of this direction in [`Direction::ALL`]
    pub const fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters:
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}
