//! Console driver for the toroidal Game of Life simulation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use toroidal_life::{
    config::{CliOverrides, Settings},
    life::{create_example_patterns, load_board_from_file, save_board_to_file, Board},
    utils::{format_census, render_board, ColorOutput},
};

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Conway's Game of Life on a toroidal grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation and render it to the terminal
    Run {
        /// Configuration file path (YAML or JSON)
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Start from a pattern file instead of a random board
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Live density for random boards (overrides config)
        #[arg(short, long)]
        density: Option<f64>,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Delay between generations in milliseconds (overrides config)
        #[arg(long)]
        delay: Option<u64>,

        /// Seed for the random board, for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Save the final pattern to this file when the run ends
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Load a pattern file and report its live-cell and shape counts
    Census {
        /// Pattern file path
        pattern: PathBuf,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            pattern,
            density,
            generations,
            delay,
            seed,
            save,
        } => run_command(config, pattern, density, generations, delay, seed, save),
        Commands::Census { pattern } => census_command(pattern),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_command(
    config_path: PathBuf,
    pattern: Option<PathBuf>,
    density: Option<f64>,
    generations: Option<u64>,
    delay: Option<u64>,
    seed: Option<u64>,
    save: Option<PathBuf>,
) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&CliOverrides {
        live_density: density,
        delay_ms: delay,
        max_generations: generations,
    });
    settings.validate().context("Configuration validation failed")?;

    let mut board = match &pattern {
        Some(path) => load_board_from_file(path)?,
        None => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Board::random(
                settings.board.width,
                settings.board.height,
                settings.board.cell_size,
                settings.board.live_density,
                &mut rng,
            )?
        }
    };

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Running {}x{} board, press Enter to stop",
            board.columns(),
            board.rows()
        ))
    );
    thread::sleep(Duration::from_millis(settings.run.delay_ms));

    let stop = spawn_stop_watcher();
    let mut generation: u64 = 0;
    while !stop.load(Ordering::Relaxed) {
        if let Some(max) = settings.run.max_generations {
            if generation >= max {
                break;
            }
        }

        // Clear screen and move the cursor home before each frame.
        print!("\x1b[2J\x1b[H");
        println!("Generation {}", generation);
        print!("{}", render_board(&board));

        board.advance();
        generation += 1;
        thread::sleep(Duration::from_millis(settings.run.delay_ms));
    }

    let census = board.census();
    println!();
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Stopped after {} generation(s): {}",
            generation,
            format_census(&census)
        ))
    );

    if let Some(path) = save {
        save_board_to_file(&board, &path)
            .with_context(|| format!("Failed to save pattern to {}", path.display()))?;
        println!(
            "{}",
            ColorOutput::success(&format!("Final pattern saved to {}", path.display()))
        );
    }

    Ok(())
}

/// Watch stdin from a detached thread and raise a flag on the first line
/// (Enter). The run loop polls the flag once per generation; nothing else is
/// shared between the threads.
fn spawn_stop_watcher() -> Arc<AtomicBool> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    thread::spawn(move || {
        let mut line = String::new();
        let _ = std::io::stdin().read_line(&mut line);
        flag.store(true, Ordering::Relaxed);
    });
    stop
}

fn census_command(pattern: PathBuf) -> Result<()> {
    let board = load_board_from_file(&pattern)?;

    println!("Pattern {} ({}x{}):", pattern.display(), board.columns(), board.rows());
    print!("{}", render_board(&board));
    println!("{}", ColorOutput::info(&format_census(&board.census())));

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("{}", ColorOutput::success("Setup complete"));
    println!("Run: cargo run -- run --config {}", config_path.display());
    println!(
        "Or:  cargo run -- run --pattern {}",
        patterns_dir.join("glider.txt").display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "toroidal_life",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());
    }

    #[test]
    fn test_census_command_reads_pattern() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("cross.txt");
        std::fs::write(&path, " * \n***\n * ").unwrap();

        assert!(census_command(path).is_ok());
    }
}
