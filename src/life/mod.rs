//! Game of Life simulation core

pub mod board;
pub mod cell;
pub mod census;
pub mod pattern;

pub use board::Board;
pub use cell::Cell;
pub use census::Census;
pub use pattern::{create_example_patterns, load_board_from_file, save_board_to_file};
