//! Policies choosing the tile index of freshly created cells

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{DEFAULT_FILL_RANGE, DEFAULT_SEED};

/// Chooses the initial tile index of a new cell
pub trait CellFill {
    /// Tile index for the cell at `(i, j)`
    fn tile_index(&mut self, i: usize, j: usize) -> usize;
}

/// Uniformly random tile indices in `[0, range)` from a seeded generator
///
/// Two fills created with the same seed and range produce the same sequence.
#[derive(Debug, Clone)]
pub struct RandomFill {
    rng: StdRng,
    range: usize,
}

impl RandomFill {
    /// Random fill over the default range
    pub fn seeded(seed: u64) -> Self {
        Self::with_range(seed, DEFAULT_FILL_RANGE)
    }

    /// Random fill over `[0, range)`; a zero range always yields 0
    pub fn with_range(seed: u64, range: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range,
        }
    }

    /// Upper bound (exclusive) of produced indices
    pub const fn range(&self) -> usize {
        self.range
    }
}

impl Default for RandomFill {
    fn default() -> Self {
        Self::seeded(DEFAULT_SEED)
    }
}

impl CellFill for RandomFill {
    fn tile_index(&mut self, _i: usize, _j: usize) -> usize {
        if self.range == 0 {
            return 0;
        }
        self.rng.random_range(0..self.range)
    }
}

/// Fills every cell with the same tile index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UniformFill(pub usize);

impl CellFill for UniformFill {
    fn tile_index(&mut self, _i: usize, _j: usize) -> usize {
        self.0
    }
}
