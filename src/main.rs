//! Main CLI application for the two-species Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use duolife::{
    config::{CliOverrides, Settings},
    frontend::{AutoStartInput, TerminalRenderer},
    run_simulation,
    utils::{CensusReport, ColorOutput},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "duolife")]
#[command(about = "Two-species Game of Life")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation in the terminal
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Frames between generations (overrides config)
        #[arg(short, long)]
        period: Option<u32>,

        /// RNG seed for reproducible runs (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Per-draw seeding probability (overrides config)
        #[arg(long)]
        probability: Option<f64>,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Frame rate cap (overrides config)
        #[arg(long)]
        fps: Option<f64>,

        /// Print the final census as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration and print the derived rule table
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            period,
            seed,
            probability,
            generations,
            fps,
            json,
        } => run_command(config, period, seed, probability, generations, fps, json),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Check { config } => check_command(config),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(
    config_path: PathBuf,
    period: Option<u32>,
    seed: Option<u64>,
    probability: Option<f64>,
    generations: Option<u64>,
    fps: Option<f64>,
    json: bool,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;

    let cli_overrides = CliOverrides {
        period,
        seed_probability: probability,
        rng_seed: seed,
        max_generations: generations,
        max_fps: fps,
    };
    settings.merge_with_cli(&cli_overrides);

    settings.validate().context("Configuration validation failed")?;

    let mut renderer = TerminalRenderer::stdout(settings.cols(), settings.rows());
    let mut input = AutoStartInput::new(settings.simulation.auto_start_frame);

    let (final_grid, generations) =
        run_simulation(&settings, &mut renderer, &mut input).context("Simulation failed")?;

    let report = CensusReport::of(&final_grid, generations);
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    println!("{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

fn check_command(config_path: PathBuf) -> Result<()> {
    let settings = load_settings(&config_path)?;
    settings.validate().context("Configuration validation failed")?;

    let weights = settings.weights();
    println!(
        "Grid: {} x {} cells ({} x {} px at cell size {})",
        settings.cols(),
        settings.rows(),
        settings.display.screen_width,
        settings.display.screen_height,
        settings.display.cell_size
    );
    println!("Weights: A = {}, B = {}", weights.a, weights.b);
    println!("\nRule table (weighted neighbor sum -> outcome):");

    let table = settings.rule_table()?;
    for entry in table.entries() {
        let outcome = match entry.birth {
            Some(species) => format!("survive, or birth of {species}"),
            None => String::from("survive only"),
        };
        println!(
            "  {:3} = {}A + {}B  ->  {}",
            entry.sum, entry.count_a, entry.count_b, outcome
        );
    }

    println!("\n{}", ColorOutput::success("Configuration is valid"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "duolife",
            "run",
            "--config",
            "test.yaml",
            "--period",
            "5",
            "--generations",
            "100",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());

        // A second run without --force leaves the file alone
        assert!(setup_command(temp_dir.path().to_path_buf(), false).is_ok());
    }

    #[test]
    fn test_check_command_with_generated_config() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();
        let config = temp_dir.path().join("config/default.yaml");
        assert!(check_command(config).is_ok());
    }
}
