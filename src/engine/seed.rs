//! Random initial seeding of the grid

use crate::engine::cell::{Cell, Species};
use crate::engine::grid::Grid;
use rand::Rng;

/// Source of Bernoulli draws for seeding
pub trait RandomSource {
    /// One Bernoulli trial with success probability `p`
    fn bernoulli(&mut self, p: f64) -> bool;
}

/// Adapter making any `rand::Rng` usable as a `RandomSource`, so the host
/// can pass a thread RNG or a seeded one interchangeably
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn bernoulli(&mut self, p: f64) -> bool {
        self.0.gen_bool(p)
    }
}

/// Seed a fresh grid from two independent Bernoulli draws per cell.
///
/// (1, 0) yields species A, (0, 1) species B, and both (0, 0) and (1, 1)
/// leave the cell dead. With p = 0.25 this gives P(A) = P(B) = 0.1875 and
/// P(dead) = 0.625. Both draws happen for every cell, even though the first
/// one alone decides between A and not-A.
pub fn seed_grid(
    width: usize,
    height: usize,
    probability: f64,
    rng: &mut dyn RandomSource,
) -> Grid {
    let mut cells = Vec::with_capacity(width * height);

    for _ in 0..width * height {
        let draw_a = rng.bernoulli(probability);
        let draw_b = rng.bernoulli(probability);
        cells.push(match (draw_a, draw_b) {
            (true, false) => Cell::Alive(Species::A),
            (false, true) => Cell::Alive(Species::B),
            _ => Cell::Dead,
        });
    }

    Grid::from_flat(width, height, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Plays back a fixed sequence of draws
    struct ScriptedRandom {
        draws: Vec<bool>,
        next: usize,
    }

    impl ScriptedRandom {
        fn new(draws: Vec<bool>) -> Self {
            Self { draws, next: 0 }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn bernoulli(&mut self, _p: f64) -> bool {
            let draw = self.draws[self.next];
            self.next += 1;
            draw
        }
    }

    #[test]
    fn test_two_draw_outcomes() {
        let mut rng = ScriptedRandom::new(vec![
            true, false, // A
            false, true, // B
            false, false, // dead
            true, true, // both hits are also dead
        ]);
        let grid = seed_grid(4, 1, 0.25, &mut rng);
        assert_eq!(grid.get(0, 0), Cell::Alive(Species::A));
        assert_eq!(grid.get(0, 1), Cell::Alive(Species::B));
        assert_eq!(grid.get(0, 2), Cell::Dead);
        assert_eq!(grid.get(0, 3), Cell::Dead);
        assert_eq!(rng.next, 8, "exactly two draws per cell");
    }

    #[test]
    fn test_seeding_is_deterministic_for_a_fixed_seed() {
        let mut rng1 = RngSource(ChaCha8Rng::seed_from_u64(42));
        let mut rng2 = RngSource(ChaCha8Rng::seed_from_u64(42));
        let grid1 = seed_grid(32, 24, 0.25, &mut rng1);
        let grid2 = seed_grid(32, 24, 0.25, &mut rng2);
        assert_eq!(grid1, grid2);
    }

    #[test]
    fn test_seeding_distribution() {
        let mut rng = RngSource(ChaCha8Rng::seed_from_u64(7));
        let grid = seed_grid(400, 400, 0.25, &mut rng);
        let cells = (400 * 400) as f64;
        let (count_a, count_b) = grid.census();
        let p_a = count_a as f64 / cells;
        let p_b = count_b as f64 / cells;
        let p_dead = 1.0 - p_a - p_b;

        // Expected: P(A) = P(B) = 0.25 * 0.75 = 0.1875, P(dead) = 0.625.
        // 160k cells put the empirical rates well within 1% absolute.
        assert!((p_a - 0.1875).abs() < 0.01, "P(A) = {p_a}");
        assert!((p_b - 0.1875).abs() < 0.01, "P(B) = {p_b}");
        assert!((p_dead - 0.625).abs() < 0.01, "P(dead) = {p_dead}");
    }
}
