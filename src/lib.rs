//! Conway's Game of Life on a toroidal grid
//!
//! This library provides the simulation core: a fixed-size wrap-around
//! board, two-phase generation stepping with simultaneous-update semantics,
//! connected-shape counting, and a flat-text pattern format for loading and
//! saving grids.

pub mod config;
pub mod error;
pub mod life;
pub mod utils;

pub use config::Settings;
pub use error::{ConfigError, FormatError};
pub use life::{Board, Cell, Census};
