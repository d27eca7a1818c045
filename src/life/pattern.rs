//! Flat-text pattern format: parsing, serialization, and file I/O
//!
//! One character per cell, `*` for alive, anything else for dead; rows of
//! equal length joined by `\n`. No header and no dimension line: the column
//! count comes from the first row, the row count from the number of lines.
//! Serialization emits no trailing newline; parsing tolerates one.

use crate::error::FormatError;
use crate::life::{Board, Cell};
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::Path;

/// Live-cell marker in pattern text.
pub const ALIVE_CHAR: char = '*';
/// Dead-cell marker emitted by serialization.
pub const DEAD_CHAR: char = ' ';

impl Board {
    /// Parse a board from pattern text. `cell_size` is fixed at 1.
    ///
    /// Ragged rows and empty input are format errors; a partially-parsed
    /// board is never returned.
    pub fn from_text(text: &str) -> Result<Self, FormatError> {
        // A single trailing newline is a file-format convenience, not an
        // extra empty row.
        let text = text.strip_suffix('\n').unwrap_or(text);
        if text.is_empty() {
            return Err(FormatError::Empty);
        }

        let lines: Vec<&str> = text.split('\n').collect();
        let columns = lines[0].chars().count();
        if columns == 0 {
            return Err(FormatError::Empty);
        }

        let mut cells = Vec::with_capacity(columns * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != columns {
                return Err(FormatError::RaggedRow {
                    row,
                    len,
                    expected: columns,
                });
            }
            cells.extend(line.chars().map(|c| Cell::new(c == ALIVE_CHAR)));
        }

        Ok(Self::from_cells(columns, lines.len(), cells))
    }

    /// Serialize to pattern text, row-major, without a trailing newline.
    pub fn to_text(&self) -> String {
        (0..self.rows())
            .map(|row| {
                (0..self.columns())
                    .map(|col| {
                        if self.is_alive(col, row) {
                            ALIVE_CHAR
                        } else {
                            DEAD_CHAR
                        }
                    })
                    .collect::<String>()
            })
            .join("\n")
    }
}

/// Load a board from a pattern file.
pub fn load_board_from_file<P: AsRef<Path>>(path: P) -> Result<Board> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    Board::from_text(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Save a board to a pattern file, creating parent directories as needed.
pub fn save_board_to_file<P: AsRef<Path>>(board: &Board, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, board.to_text())
        .with_context(|| format!("Failed to write pattern file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Write a few classic seed patterns into a directory.
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let glider = " *  \n  * \n*** \n    ";
    std::fs::write(dir.join("glider.txt"), glider).context("Failed to write glider.txt")?;

    let blinker = "     \n *** \n     ";
    std::fs::write(dir.join("blinker.txt"), blinker).context("Failed to write blinker.txt")?;

    let block = "    \n ** \n ** \n    ";
    std::fs::write(dir.join("block.txt"), block).context("Failed to write block.txt")?;

    Ok(())
}
