//! Two-Species Game of Life
//!
//! A two-color variant of Conway's Game of Life in which live cells belong
//! to one of two competing species. Neighborhoods are counted as weighted
//! sums whose values uniquely identify the species composition, which lets
//! the survival and birth rules branch on a single number per cell.

pub mod config;
pub mod engine;
pub mod frontend;
pub mod host;
pub mod utils;

pub use config::Settings;
pub use engine::{Cell, Grid, RuleTable, Species};

use anyhow::Result;
use engine::{seed_grid, RngSource};
use host::{InputSource, Renderer};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed a grid from the settings and drive the host loop until it exits.
/// Returns the final grid and the number of generations stepped.
pub fn run_simulation(
    settings: &Settings,
    renderer: &mut dyn Renderer,
    input: &mut dyn InputSource,
) -> Result<(Grid, u64)> {
    settings.validate()?;
    let rules = settings.rule_table()?;

    let mut rng = match settings.simulation.rng_seed {
        Some(seed) => RngSource(ChaCha8Rng::seed_from_u64(seed)),
        None => RngSource(ChaCha8Rng::from_entropy()),
    };
    let grid = seed_grid(
        settings.cols(),
        settings.rows(),
        settings.simulation.seed_probability,
        &mut rng,
    );

    host::run_loop(settings, grid, &rules, renderer, input)
}
