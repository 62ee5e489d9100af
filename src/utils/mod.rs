//! Output formatting helpers

pub mod display;

pub use display::{CensusReport, Color, ColorOutput, GridFormatter};
