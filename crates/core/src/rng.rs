//! RNG module - randomness used when spawning tiles
//!
//! The board never reaches for a global generator. It asks a [`SpawnRng`] for
//! two things: a uniform draw in `[0, 1)` that decides the spawned value, and a
//! uniform index that picks one of the empty cells.
//!
//! Every `rand::Rng` already satisfies the trait. [`ScriptedRng`] replays fixed
//! values so tests can pin down exactly what spawns and where.

use std::collections::VecDeque;

use rand::Rng;

use crate::types::{Tile, SPAWN_TWO_THRESHOLD, TILE_FOUR, TILE_TWO};

/// Source of randomness for tile spawning
pub trait SpawnRng {
    /// Uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`; `len` is never zero
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> SpawnRng for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Map a unit draw to the value of the spawned tile
///
/// # Examples
///
/// ```
/// use twenty48_core::rng::spawn_value;
///
/// assert_eq!(spawn_value(0.0), 2);
/// assert_eq!(spawn_value(0.9), 2);
/// assert_eq!(spawn_value(0.95), 4);
/// ```
pub fn spawn_value(unit: f64) -> Tile {
    if unit <= SPAWN_TWO_THRESHOLD {
        TILE_TWO
    } else {
        TILE_FOUR
    }
}

/// Deterministic stand-in that replays queued draws
///
/// Once a queue runs dry it keeps answering `0.0` / index `0`, which means
/// "spawn a 2 in the first empty cell (row-major)". A queued index must be
/// below the number of empty cells at the time it is drawn; debug builds
/// assert this, release builds clamp it to the last empty cell.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    units: VecDeque<f64>,
    picks: VecDeque<usize>,
}

impl ScriptedRng {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a script from unit draws and pick indices
    pub fn from_draws(
        units: impl IntoIterator<Item = f64>,
        picks: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            units: units.into_iter().collect(),
            picks: picks.into_iter().collect(),
        }
    }

    /// Queue one spawn: value draw followed by the empty-cell index
    pub fn push_spawn(&mut self, unit: f64, pick: usize) -> &mut Self {
        self.units.push_back(unit);
        self.picks.push_back(pick);
        self
    }

    /// Draws not consumed yet, as `(units, picks)`
    pub fn remaining(&self) -> (usize, usize) {
        (self.units.len(), self.picks.len())
    }
}

impl SpawnRng for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks.pop_front().unwrap_or(0);
        debug_assert!(pick < len, "scripted pick {} out of range for {} cells", pick, len);
        pick.min(len.saturating_sub(1))
    }
}
