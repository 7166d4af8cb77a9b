//! Merge module - slides and merges a single line
//!
//! A line is one row or column already extracted in the direction of motion:
//! index 0 is the cell nearest the edge tiles slide toward. Merging compacts
//! every non-zero tile toward index 0, doubles the first of each pair of equal
//! neighbours (zeros in between do not separate them), and pads the tail with
//! zeros.
//!
//! A tile produced by a merge never takes part in a second merge during the
//! same pass, so `[2, 2, 2, 2, 2]` becomes `[4, 4, 2, 0, 0]`.
//!
//! Two tiles whose sum does not fit in a [`Tile`] never merge; the second one
//! stays as a separate entry, so the line sum is always conserved.

use crate::types::{Tile, EMPTY};

/// Merge a line, returning a new line of the same length
///
/// # Examples
///
/// ```
/// use twenty48_core::merge;
///
/// assert_eq!(merge(&[2, 0, 2, 4]), vec![4, 4, 0, 0]);
/// assert_eq!(merge(&[8, 16, 16, 8]), vec![8, 32, 8, 0]);
/// ```
pub fn merge(line: &[Tile]) -> Vec<Tile> {
    let mut merged: Vec<Tile> = Vec::with_capacity(line.len());
    let mut previous = EMPTY;
    let mut merged_at: Option<usize> = None;

    for &value in line {
        if value == EMPTY {
            continue;
        }

        let doubled = match merged.len().checked_sub(1) {
            Some(last) if value == previous && merged_at != Some(last) => {
                previous.checked_mul(2).map(|sum| (last, sum))
            }
            _ => None,
        };

        match doubled {
            Some((last, sum)) => {
                merged[last] = sum;
                previous = sum;
                merged_at = Some(last);
            }
            None => {
                merged.push(value);
                previous = value;
            }
        }
    }

    merged.resize(line.len(), EMPTY);
    merged
}

/// Merge a line in place
///
/// Returns true if any position ended up with a different value.
pub fn merge_in_place(line: &mut [Tile]) -> bool {
    let merged = merge(line);
    let mut changed = false;
    for (cell, value) in line.iter_mut().zip(merged) {
        if *cell != value {
            *cell = value;
            changed = true;
        }
    }
    changed
}
