//! Error types raised during board construction

use thiserror::Error;

/// Invalid numeric configuration for a board
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: usize, height: usize },

    #[error("cell size must be positive")]
    ZeroCellSize,

    #[error("cell size {cell_size} does not evenly divide {width}x{height}")]
    NonDividingCellSize {
        width: usize,
        height: usize,
        cell_size: usize,
    },

    #[error("live density must be within [0, 1], got {0}")]
    DensityOutOfRange(f64),
}

/// Malformed pattern text on load
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("pattern text is empty")]
    Empty,

    #[error("row {row} has length {len}, expected {expected} (all rows must have the same length)")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::DensityOutOfRange(1.5);
        assert!(err.to_string().contains("1.5"));

        let err = FormatError::RaggedRow {
            row: 2,
            len: 4,
            expected: 5,
        };
        assert!(err.to_string().contains("row 2"));
    }
}
