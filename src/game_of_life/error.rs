//! Errors raised while building or addressing grids

use thiserror::Error;

/// Malformed grid input, rejected before any step runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("grid cannot be empty")]
    EmptyGrid,

    #[error("grid width cannot be zero")]
    ZeroWidth,

    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("{rows}x{columns} grid exceeds the maximum of {max} cells", max = crate::game_of_life::grid::MAX_CELLS)]
    TooLarge { rows: usize, columns: usize },

    #[error("coordinates ({row}, {col}) out of bounds for {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },

    #[error("grid is {actual_rows}x{actual_columns}, expected {rows}x{columns}")]
    DimensionMismatch {
        rows: usize,
        columns: usize,
        actual_rows: usize,
        actual_columns: usize,
    },

    #[error("cell buffer holds {len} cells, expected {expected}")]
    CellCount { len: usize, expected: usize },

    #[error("density {0} must be within [0, 1]")]
    InvalidDensity(f64),

    #[error("invalid character '{ch}' at ({row}, {col}); expected '1', '0' or '-'")]
    InvalidCharacter { ch: char, row: usize, col: usize },
}
