//! Survival and birth rules for the two-species game.
//!
//! Neighbor sums are compared against a table built once from the species
//! weights rather than against raw numeric literals, so the rule set stays
//! correct if the weights ever change.

use crate::engine::cell::{Cell, Species, SpeciesWeights};
use crate::engine::grid::Grid;
use std::collections::BTreeMap;
use thiserror::Error;

/// Rejection of weights that make neighbor sums ambiguous
#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "ambiguous species weights a={a}, b={b}: compositions {first_a}A+{first_b}B and \
     {second_a}A+{second_b}B share neighbor sum {sum}"
)]
pub struct AmbiguousWeights {
    pub a: u32,
    pub b: u32,
    pub sum: u32,
    pub first_a: u32,
    pub first_b: u32,
    pub second_a: u32,
    pub second_b: u32,
}

/// One row of the derived rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleEntry {
    /// Weighted neighbor sum this entry matches
    pub sum: u32,
    /// Species-A neighbors in the composition
    pub count_a: u32,
    /// Species-B neighbors in the composition
    pub count_b: u32,
    /// Species born into a dead cell with this sum, if any
    pub birth: Option<Species>,
}

/// Rule table mapping weighted neighbor sums to outcomes.
///
/// Survival: a live cell keeps its species iff its neighbor sum corresponds
/// to 2 or 3 live neighbors in any species mix; every other sum kills it.
/// Birth: a dead cell whose sum corresponds to exactly 3 neighbors becomes
/// alive with the majority species. Three integer neighbor counts always
/// have a 2-vs-1 majority, so no tie-break exists.
#[derive(Debug, Clone)]
pub struct RuleTable {
    weights: SpeciesWeights,
    entries: BTreeMap<u32, RuleEntry>,
}

impl RuleTable {
    /// Build the table from species weights.
    ///
    /// Fails if any two distinct (count A, count B) compositions with
    /// 2 or 3 total neighbors produce the same weighted sum; the whole
    /// sum-based branching is unsound for such weights.
    pub fn new(weights: SpeciesWeights) -> Result<Self, AmbiguousWeights> {
        let mut entries: BTreeMap<u32, RuleEntry> = BTreeMap::new();

        for total in 2..=3u32 {
            for count_a in 0..=total {
                let count_b = total - count_a;
                let sum = weights.sum_of(count_a, count_b);

                let birth = if total == 3 {
                    Some(if count_a > count_b { Species::A } else { Species::B })
                } else {
                    None
                };

                let entry = RuleEntry {
                    sum,
                    count_a,
                    count_b,
                    birth,
                };
                if let Some(existing) = entries.insert(sum, entry) {
                    return Err(AmbiguousWeights {
                        a: weights.a,
                        b: weights.b,
                        sum,
                        first_a: existing.count_a,
                        first_b: existing.count_b,
                        second_a: count_a,
                        second_b: count_b,
                    });
                }
            }
        }

        Ok(Self { weights, entries })
    }

    /// Build the table for the default weights (11 and 3), which are known
    /// to be unambiguous.
    pub fn default_table() -> Self {
        Self::new(SpeciesWeights::default()).expect("default weights are unambiguous")
    }

    pub fn weights(&self) -> SpeciesWeights {
        self.weights
    }

    /// All entries, ordered by neighbor sum
    pub fn entries(&self) -> impl Iterator<Item = &RuleEntry> {
        self.entries.values()
    }

    /// Whether a live cell with this neighbor sum survives
    pub fn survives(&self, sum: u32) -> bool {
        self.entries.contains_key(&sum)
    }

    /// Species born into a dead cell with this neighbor sum, if any
    pub fn birth(&self, sum: u32) -> Option<Species> {
        self.entries.get(&sum).and_then(|entry| entry.birth)
    }

    /// Next state of a single cell given its weighted neighbor sum.
    ///
    /// Survival is applied first, then birth to cells still dead afterwards.
    /// Birth sums are 3-neighbor survival sums, so a cell killed by the
    /// survival pass can never be reborn in the same step.
    pub fn next_cell(&self, current: Cell, sum: u32) -> Cell {
        let after_survival = match current {
            Cell::Alive(species) if self.survives(sum) => Cell::Alive(species),
            _ => Cell::Dead,
        };
        match after_survival {
            Cell::Dead => self.birth(sum).map(Cell::Alive).unwrap_or(Cell::Dead),
            alive => alive,
        }
    }

    /// Produce the next generation. Pure: the result depends only on the
    /// current grid, and the input is left untouched.
    pub fn step(&self, current: &Grid) -> Grid {
        let sums = current.neighbor_sums(&self.weights);
        let cells = current
            .cells()
            .iter()
            .zip(sums)
            .map(|(&cell, sum)| self.next_cell(cell, sum))
            .collect();
        Grid::from_flat(current.width, current.height, cells)
    }

    /// Evolve the grid for multiple generations
    pub fn step_generations(&self, mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = self.step(&grid);
        }
        grid
    }
}
