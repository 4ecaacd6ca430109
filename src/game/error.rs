use thiserror::Error;

/// Reasons a board can be rejected before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("row {row} has {found} tiles but row 0 has {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("tile at row {row}, column {col} is empty")]
    EmptyTile { row: usize, col: usize },
}
