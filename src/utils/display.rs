//! Terminal rendering and colored console output

use crate::life::{Board, Census};

/// Render a board for the terminal, one glyph per cell.
pub fn render_board(board: &Board) -> String {
    let mut output = String::with_capacity(board.rows() * (board.columns() + 1));
    for row in 0..board.rows() {
        for col in 0..board.columns() {
            output.push(if board.is_alive(col, row) { '█' } else { '·' });
        }
        output.push('\n');
    }
    output
}

/// One-line census summary for status output.
pub fn format_census(census: &Census) -> String {
    format!(
        "{} live cell(s) in {} shape(s)",
        census.alive_cells, census.shapes
    )
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board() {
        let board = Board::from_text("* \n *").unwrap();
        let rendered = render_board(&board);
        assert_eq!(rendered, "█·\n·█\n");
    }

    #[test]
    fn test_format_census() {
        let board = Board::from_text("** \n  *").unwrap();
        let line = format_census(&board.census());
        assert!(line.contains("3 live cell(s)"));
        assert!(line.contains("1 shape(s)"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
