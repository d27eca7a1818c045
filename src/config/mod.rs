//! Configuration management for the simulation driver

pub mod settings;

pub use settings::{BoardConfig, CliOverrides, RunConfig, Settings};
