//! Two-species Game of Life core: cells, grid, seeding and update rules

pub mod cell;
pub mod grid;
pub mod rules;
pub mod seed;

pub use cell::{Cell, Species, SpeciesWeights};
pub use grid::{Grid, GridError};
pub use rules::{AmbiguousWeights, RuleEntry, RuleTable};
pub use seed::{seed_grid, RandomSource, RngSource};
