//! Cell states and species weights for the two-species Game of Life

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One of the two competing "alive" kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    A,
    B,
}

impl Species {
    /// The other species
    pub fn rival(self) -> Species {
        match self {
            Species::A => Species::B,
            Species::B => Species::A,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::A => write!(f, "A"),
            Species::B => write!(f, "B"),
        }
    }
}

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive(Species),
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive(_))
    }

    pub fn species(self) -> Option<Species> {
        match self {
            Cell::Dead => None,
            Cell::Alive(species) => Some(species),
        }
    }
}

/// Errors in glyph parsing for grids and cells
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid cell glyph '{0}', expected '.', 'A' or 'B'")]
pub struct CellParseError(pub char);

impl TryFrom<char> for Cell {
    type Error = CellParseError;

    fn try_from(glyph: char) -> Result<Self, Self::Error> {
        match glyph {
            '.' => Ok(Cell::Dead),
            'A' => Ok(Cell::Alive(Species::A)),
            'B' => Ok(Cell::Alive(Species::B)),
            other => Err(CellParseError(other)),
        }
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> char {
        match cell {
            Cell::Dead => '.',
            Cell::Alive(Species::A) => 'A',
            Cell::Alive(Species::B) => 'B',
        }
    }
}

/// Per-species neighbor weights.
///
/// The weights must be chosen so that every weighted sum of 2 or 3 neighbors
/// identifies a unique (count A, count B) composition; `RuleTable::new`
/// verifies this before any rule built from the weights is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesWeights {
    pub a: u32,
    pub b: u32,
}

impl Default for SpeciesWeights {
    fn default() -> Self {
        Self { a: 11, b: 3 }
    }
}

impl SpeciesWeights {
    /// Weighted value a cell contributes to its neighbors' sums
    pub fn value_of(&self, cell: Cell) -> u32 {
        match cell {
            Cell::Dead => 0,
            Cell::Alive(Species::A) => self.a,
            Cell::Alive(Species::B) => self.b,
        }
    }

    /// Weighted sum of a neighborhood composition
    pub fn sum_of(&self, count_a: u32, count_b: u32) -> u32 {
        count_a * self.a + count_b * self.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = SpeciesWeights::default();
        assert_eq!(weights.a, 11);
        assert_eq!(weights.b, 3);
    }

    #[test]
    fn test_cell_values() {
        let weights = SpeciesWeights::default();
        assert_eq!(weights.value_of(Cell::Dead), 0);
        assert_eq!(weights.value_of(Cell::Alive(Species::A)), 11);
        assert_eq!(weights.value_of(Cell::Alive(Species::B)), 3);
    }

    #[test]
    fn test_composition_sums() {
        let weights = SpeciesWeights::default();
        assert_eq!(weights.sum_of(2, 0), 22);
        assert_eq!(weights.sum_of(0, 2), 6);
        assert_eq!(weights.sum_of(1, 1), 14);
        assert_eq!(weights.sum_of(1, 2), 17);
        assert_eq!(weights.sum_of(2, 1), 25);
        assert_eq!(weights.sum_of(0, 3), 9);
        assert_eq!(weights.sum_of(3, 0), 33);
    }

    #[test]
    fn test_glyph_round_trip() {
        for cell in [Cell::Dead, Cell::Alive(Species::A), Cell::Alive(Species::B)] {
            let glyph: char = cell.into();
            assert_eq!(Cell::try_from(glyph), Ok(cell));
        }
        assert!(Cell::try_from('X').is_err());
    }

    #[test]
    fn test_rival() {
        assert_eq!(Species::A.rival(), Species::B);
        assert_eq!(Species::B.rival(), Species::A);
    }
}
