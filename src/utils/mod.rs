//! Display helpers for the console driver

pub mod display;

pub use display::{format_census, render_board, ColorOutput};
