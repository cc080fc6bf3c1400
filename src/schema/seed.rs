//! Randomized seeding operations applied once when a scenario is loaded.

use rand::prelude::*;

use crate::compute::Grid;

/// Random number generator wrapper for seeding operations.
pub struct SeedRng {
    rng: StdRng,
}

impl SeedRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Uniform index in `0..upper`.
    #[inline]
    fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// One-shot grid mutation, identified by its integer code in scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOp {
    /// Code 0: set one random cell alive.
    SetRandomCellAlive,
    /// Code 1: set one random cell dead.
    SetRandomCellDead,
    /// Code 2: set one random row entirely alive.
    FillRandomRow,
    /// Code 3: set one random column entirely alive.
    FillRandomColumn,
}

impl SeedOp {
    pub fn code(self) -> i64 {
        match self {
            SeedOp::SetRandomCellAlive => 0,
            SeedOp::SetRandomCellDead => 1,
            SeedOp::FillRandomRow => 2,
            SeedOp::FillRandomColumn => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(SeedOp::SetRandomCellAlive),
            1 => Some(SeedOp::SetRandomCellDead),
            2 => Some(SeedOp::FillRandomRow),
            3 => Some(SeedOp::FillRandomColumn),
            _ => None,
        }
    }

    /// Apply to a grid, consuming exactly one draw from `rng`.
    pub fn apply(self, grid: &mut Grid, rng: &mut SeedRng) {
        match self {
            SeedOp::SetRandomCellAlive => {
                let pos = rng.index(grid.len());
                grid.set_index(pos, true);
            }
            SeedOp::SetRandomCellDead => {
                let pos = rng.index(grid.len());
                grid.set_index(pos, false);
            }
            SeedOp::FillRandomRow => {
                let y = rng.index(grid.height());
                grid.fill_row(y);
            }
            SeedOp::FillRandomColumn => {
                let x = rng.index(grid.width());
                grid.fill_column(x);
            }
        }
    }
}

/// Apply raw op codes in order. Unknown codes are skipped.
///
/// Returns the number of operations applied.
pub fn apply_op_codes(grid: &mut Grid, codes: &[i64], rng: &mut SeedRng) -> usize {
    let mut applied = 0;
    for &code in codes {
        match SeedOp::from_code(code) {
            Some(op) => {
                op.apply(grid, rng);
                applied += 1;
            }
            None => log::warn!("Skipping unknown seed op code {}", code),
        }
    }
    applied
}
