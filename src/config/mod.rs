//! Configuration management for the two-species Game of Life

pub mod settings;

pub use settings::{
    CliOverrides, DisplayConfig, Settings, SimulationConfig, SpeciesConfig, SpeciesStyle,
};
