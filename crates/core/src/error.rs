//! Board errors

/// Errors returned by [`crate::Board`] operations
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
    #[error("a {height}x{width} grid cannot hold the initial tiles")]
    GridTooSmall { height: usize, width: usize },
}
