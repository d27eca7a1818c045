//! Configuration settings for the simulation driver

use crate::error::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// Numeric board parameters. `live_density` defaults to 0.1 when the field
/// is absent from the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: usize,
    #[serde(default = "default_live_density")]
    pub live_density: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Pause between rendered generations, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Stop after this many generations; `None` runs until interrupted.
    #[serde(default)]
    pub max_generations: Option<u64>,
}

fn default_live_density() -> f64 {
    0.1
}

fn default_delay_ms() -> u64 {
    100
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                width: 50,
                height: 20,
                cell_size: 1,
                live_density: 0.5,
            },
            run: RunConfig::default(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            max_generations: None,
        }
    }
}

impl Settings {
    /// Load settings from a YAML or JSON file, dispatching on extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        let settings: Settings = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Check the board parameters against the same rules board construction
    /// enforces, so a bad file is rejected before any board exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        if board.width == 0 || board.height == 0 {
            return Err(ConfigError::NonPositiveDimensions {
                width: board.width,
                height: board.height,
            });
        }
        if board.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if board.width % board.cell_size != 0 || board.height % board.cell_size != 0 {
            return Err(ConfigError::NonDividingCellSize {
                width: board.width,
                height: board.height,
                cell_size: board.cell_size,
            });
        }
        if !(0.0..=1.0).contains(&board.live_density) {
            return Err(ConfigError::DensityOutOfRange(board.live_density));
        }
        Ok(())
    }

    /// Merge settings with command line overrides.
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(density) = cli_overrides.live_density {
            self.board.live_density = density;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.run.delay_ms = delay_ms;
        }
        if let Some(generations) = cli_overrides.max_generations {
            self.run.max_generations = Some(generations);
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub live_density: Option<f64>,
    pub delay_ms: Option<u64>,
    pub max_generations: Option<u64>,
}
