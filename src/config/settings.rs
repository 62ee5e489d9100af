//! Configuration settings for the two-species Game of Life

use crate::engine::{RuleTable, SpeciesWeights};
use crate::utils::Color;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub display: DisplayConfig,
    pub species: SpeciesConfig,
    pub simulation: SimulationConfig,
}

/// Screen geometry and frame pacing.
///
/// Grid dimensions in cells are derived from the screen size and the cell
/// size; the screen must divide evenly into cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub cell_size: u32,
    pub max_fps: f64,
    pub dead_color: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesConfig {
    pub a: SpeciesStyle,
    pub b: SpeciesStyle,
}

/// Weight, color and sprite asset for one species
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesStyle {
    pub weight: u32,
    pub color: Color,
    pub sprite: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Frames between generation steps
    pub period: u32,
    /// Success probability of each of the two seeding draws per cell
    pub seed_probability: f64,
    /// Fixed RNG seed; a fresh one is drawn when absent
    pub rng_seed: Option<u64>,
    /// Frame at which the reference host fires the start trigger
    pub auto_start_frame: u32,
    /// Stop after this many generations; run forever when absent
    pub max_generations: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplayConfig {
                screen_width: 1920,
                screen_height: 1280,
                cell_size: 40,
                max_fps: 60.0,
                dead_color: Color::Black,
            },
            species: SpeciesConfig {
                a: SpeciesStyle {
                    weight: 11,
                    color: Color::Red,
                    sprite: String::from("charmander-square"),
                },
                b: SpeciesStyle {
                    weight: 3,
                    color: Color::Yellow,
                    sprite: String::from("bulbasaur-square"),
                },
            },
            simulation: SimulationConfig {
                period: 20,
                seed_probability: 0.25,
                rng_seed: None,
                auto_start_frame: 1,
                max_generations: None,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Grid height in cells
    pub fn rows(&self) -> usize {
        (self.display.screen_height / self.display.cell_size) as usize
    }

    /// Grid width in cells
    pub fn cols(&self) -> usize {
        (self.display.screen_width / self.display.cell_size) as usize
    }

    pub fn weights(&self) -> SpeciesWeights {
        SpeciesWeights {
            a: self.species.a.weight,
            b: self.species.b.weight,
        }
    }

    /// Build the rule table for the configured weights
    pub fn rule_table(&self) -> Result<RuleTable> {
        RuleTable::new(self.weights()).context("Species weights do not support sum-based rules")
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.display.cell_size == 0 {
            anyhow::bail!("Cell size must be positive");
        }

        if self.display.screen_width == 0 || self.display.screen_height == 0 {
            anyhow::bail!("Screen dimensions must be positive");
        }

        if self.display.screen_width % self.display.cell_size != 0
            || self.display.screen_height % self.display.cell_size != 0
        {
            anyhow::bail!(
                "Screen dimensions {}x{} are not evenly divisible by cell size {}",
                self.display.screen_width,
                self.display.screen_height,
                self.display.cell_size
            );
        }

        if self.display.max_fps <= 0.0 {
            anyhow::bail!("Maximum FPS must be positive");
        }

        if self.simulation.period == 0 {
            anyhow::bail!("Generation period must be positive");
        }

        if self.simulation.seed_probability <= 0.0 || self.simulation.seed_probability >= 1.0 {
            anyhow::bail!(
                "Seed probability must be strictly between 0 and 1, got {}",
                self.simulation.seed_probability
            );
        }

        if self.species.a.sprite.is_empty() || self.species.b.sprite.is_empty() {
            anyhow::bail!("Species sprite identifiers cannot be empty");
        }

        // Rejects equal or otherwise colliding weights
        self.rule_table()?;

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(period) = cli_overrides.period {
            self.simulation.period = period;
        }
        if let Some(probability) = cli_overrides.seed_probability {
            self.simulation.seed_probability = probability;
        }
        if let Some(seed) = cli_overrides.rng_seed {
            self.simulation.rng_seed = Some(seed);
        }
        if let Some(generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(generations);
        }
        if let Some(fps) = cli_overrides.max_fps {
            self.display.max_fps = fps;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub period: Option<u32>,
    pub seed_probability: Option<f64>,
    pub rng_seed: Option<u64>,
    pub max_generations: Option<u64>,
    pub max_fps: Option<f64>,
}
