//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the 2048 rules: merging a single line and applying
//! slides to a whole grid. It has no dependencies on rendering or input,
//! which makes it:
//!
//! - **Deterministic**: spawns come from an injected [`SpawnRng`], so a seed
//!   (or a [`ScriptedRng`]) reproduces a game exactly
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: runs the same in a terminal driver, a GUI, or headless
//!
//! # Module Structure
//!
//! - [`merge`]: slide-and-merge of one row or column
//! - [`board`]: fixed-size grid, direction-generic moves, tile spawning
//! - [`rng`]: the randomness seam and a scripted stand-in
//! - [`snapshot`]: serializable copy of a board
//! - [`error`]: errors for out-of-bounds access and degenerate grids
//!
//! # Game Rules
//!
//! - Sliding compacts tiles toward one edge; equal neighbours merge once per move
//! - A move that changes any cell spawns a 2 (90%) or a 4 (10%) in a random
//!   empty cell; a move that changes nothing spawns nothing
//! - A reset clears the grid and spawns two tiles
//!
//! # Example
//!
//! ```
//! use twenty48_core::Board;
//! use twenty48_core::types::Direction;
//!
//! let mut board = Board::with_seed(4, 4, 12345).unwrap();
//! assert_eq!(board.tile_count(), 2);
//!
//! board.clear();
//! board.set_tile(0, 0, 2).unwrap();
//! board.set_tile(0, 3, 2).unwrap();
//!
//! assert!(board.move_tiles(Direction::Left));
//! assert_eq!(board.get_tile(0, 0).unwrap(), 4);
//! assert_eq!(board.tile_count(), 2); // the merged 4 plus one spawn
//! ```

pub mod board;
pub mod error;
pub mod merge;
pub mod rng;
pub mod snapshot;

pub use twenty48_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::BoardError;
pub use merge::{merge, merge_in_place};
pub use rng::{spawn_value, ScriptedRng, SpawnRng};
pub use snapshot::BoardSnapshot;
