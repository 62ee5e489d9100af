//! Display and output formatting utilities

use crate::engine::{Cell, Grid, Species};
use serde::{Deserialize, Serialize};

/// Terminal colors, used both for CLI messages and for cell rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// ANSI foreground code
    pub fn code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

/// Population counts for one grid state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CensusReport {
    pub generation: u64,
    pub species_a: usize,
    pub species_b: usize,
    pub dead: usize,
}

impl CensusReport {
    pub fn of(grid: &Grid, generation: u64) -> Self {
        let (species_a, species_b) = grid.census();
        Self {
            generation,
            species_a,
            species_b,
            dead: grid.width * grid.height - species_a - species_b,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for CensusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Generation {}:", self.generation)?;
        writeln!(f, "  Species A: {}", self.species_a)?;
        writeln!(f, "  Species B: {}", self.species_b)?;
        write!(f, "  Dead:      {}", self.dead)
    }
}

/// Format grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form, one glyph per cell
    pub fn format_compact(grid: &Grid) -> String {
        let mut output = String::new();
        for row in 0..grid.height {
            for col in 0..grid.width {
                output.push(Self::glyph(grid.get(row, col)));
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with row and column coordinates
    pub fn format_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..grid.width {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..grid.height {
            output.push_str(&format!("{:2} ", row));
            for col in 0..grid.width {
                output.push(' ');
                output.push(Self::glyph(grid.get(row, col)));
            }
            output.push('\n');
        }

        output
    }

    fn glyph(cell: Cell) -> char {
        match cell.species() {
            Some(Species::A) => '█',
            Some(Species::B) => '▒',
            None => '·',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_formatting() {
        let grid = Grid::parse("A.B\n.A.\nB.A\n").unwrap();

        let compact = GridFormatter::format_compact(&grid);
        assert!(compact.contains('█'));
        assert!(compact.contains('▒'));
        assert!(compact.contains('·'));

        let with_coords = GridFormatter::format_with_coords(&grid);
        assert!(with_coords.contains(" 0 1 2"));
    }

    #[test]
    fn test_census_report() {
        let grid = Grid::parse("A.B\n.A.\nB.A\n").unwrap();
        let report = CensusReport::of(&grid, 3);
        assert_eq!(report.species_a, 3);
        assert_eq!(report.species_b, 2);
        assert_eq!(report.dead, 4);
        assert_eq!(report.generation, 3);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"species_a\": 3"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
