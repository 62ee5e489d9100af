//! Grid representation and weighted neighbor counting

use crate::engine::cell::{Cell, Species, SpeciesWeights};
use itertools::iproduct;
use std::fmt;
use thiserror::Error;

/// Errors constructing a grid from external cell data
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid cannot be empty")]
    Empty,
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("invalid cell glyph '{glyph}' at ({row}, {col})")]
    BadGlyph { glyph: char, row: usize, col: usize },
    #[error("coordinates ({row}, {col}) out of bounds for {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

/// A fixed-size matrix of cells, row-major.
///
/// Cell `(row, col)` corresponds to the screen square at pixel
/// `(col * cell_size, row * cell_size)`. Positions outside the grid are
/// permanently dead and contribute 0 to every neighbor sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Create a grid from a 2D cell array
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        if cells.is_empty() || cells[0].is_empty() {
            return Err(GridError::Empty);
        }

        let height = cells.len();
        let width = cells[0].len();

        for (row, line) in cells.iter().enumerate() {
            if line.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    found: line.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Parse a grid from its glyph form: one line per row, '.' dead,
    /// 'A'/'B' alive. Blank lines and surrounding whitespace are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();

        let mut cells = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let mut parsed = Vec::with_capacity(line.len());
            for (col, glyph) in line.chars().enumerate() {
                let cell = Cell::try_from(glyph)
                    .map_err(|_| GridError::BadGlyph { glyph, row, col })?;
                parsed.push(cell);
            }
            cells.push(parsed);
        }

        Self::from_cells(cells)
    }

    /// Build a grid from a flat row-major cell vector
    pub(crate) fn from_flat(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get the cell at coordinates; out-of-bounds positions are dead
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            Cell::Dead
        }
    }

    /// Set the cell at coordinates
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Weighted sum of the 8 Moore neighbors of a cell.
    ///
    /// The boundary policy is zero padding: neighbors outside the grid
    /// contribute 0, never wrap.
    pub fn neighbor_sum(&self, row: usize, col: usize, weights: &SpeciesWeights) -> u32 {
        let mut sum = 0;
        for (dr, dc) in iproduct!(-1isize..=1, -1isize..=1) {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r >= 0 && c >= 0 {
                sum += weights.value_of(self.get(r as usize, c as usize));
            }
        }
        sum
    }

    /// Weighted neighbor sums for every cell, same dimensions as the grid.
    ///
    /// This is the discrete convolution with the 3x3 all-ones kernel whose
    /// center is 0, done as nested loops with bounds checks.
    pub fn neighbor_sums(&self, weights: &SpeciesWeights) -> Vec<u32> {
        iproduct!(0..self.height, 0..self.width)
            .map(|(row, col)| self.neighbor_sum(row, col, weights))
            .collect()
    }

    /// Coordinates of all living cells
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(row, col)| self.get(row, col).is_alive())
            .collect()
    }

    /// Count living cells of each species: (species A, species B)
    pub fn census(&self) -> (usize, usize) {
        let mut count_a = 0;
        let mut count_b = 0;
        for cell in &self.cells {
            match cell.species() {
                Some(Species::A) => count_a += 1,
                Some(Species::B) => count_b += 1,
                None => {}
            }
        }
        (count_a, count_b)
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "{}", char::from(self.get(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.cells().len(), 9);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let text = ".A.\nB.B\n.A.\n";
        let grid = Grid::parse(text).unwrap();
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.census(), (2, 2));
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Grid::parse(""), Err(GridError::Empty));
        assert!(matches!(
            Grid::parse(".A.\nAX.\n"),
            Err(GridError::BadGlyph { glyph: 'X', row: 1, col: 1 })
        ));
        assert!(matches!(
            Grid::parse(".A.\nAA\n"),
            Err(GridError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_out_of_bounds_is_dead() {
        let grid = Grid::parse("AA\nAA\n").unwrap();
        assert_eq!(grid.get(5, 5), Cell::Dead);
        assert_eq!(grid.get(0, 2), Cell::Dead);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.set(2, 0, Cell::Alive(Species::A)).is_err());
        assert!(grid.set(1, 1, Cell::Alive(Species::A)).is_ok());
    }

    #[test]
    fn test_neighbor_sum_center() {
        let weights = SpeciesWeights::default();
        let grid = Grid::parse("AAA\nA.A\nAAA\n").unwrap();
        // 8 species-A neighbors around the center
        assert_eq!(grid.neighbor_sum(1, 1, &weights), 8 * 11);
    }

    #[test]
    fn test_neighbor_sum_boundary_padding() {
        let weights = SpeciesWeights::default();
        let grid = Grid::parse("AB\nBA\n").unwrap();
        // Corner cell sees only its 3 in-bounds neighbors
        assert_eq!(grid.neighbor_sum(0, 0, &weights), 3 + 3 + 11);
        // Edge positions outside the grid contribute exactly 0
        let lone = Grid::parse("A..\n...\n...\n").unwrap();
        assert_eq!(lone.neighbor_sum(0, 0, &weights), 0);
        assert_eq!(lone.neighbor_sum(0, 1, &weights), 11);
        assert_eq!(lone.neighbor_sum(1, 1, &weights), 11);
    }

    #[test]
    fn test_neighbor_sums_matrix() {
        let weights = SpeciesWeights::default();
        let grid = Grid::parse(".B.\n...\n...\n").unwrap();
        let sums = grid.neighbor_sums(&weights);
        assert_eq!(sums.len(), 9);
        assert_eq!(sums, vec![3, 0, 3, 3, 3, 3, 0, 0, 0]);
    }

    #[test]
    fn test_mixed_neighbor_sum() {
        let weights = SpeciesWeights::default();
        let grid = Grid::parse("A.B\n...\n...\n").unwrap();
        // Middle of the top row sees one A and one B
        assert_eq!(grid.neighbor_sum(0, 1, &weights), 14);
    }
}
