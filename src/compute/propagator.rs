//! Life Propagator - Generation engine for the Game of Life.
//!
//! Advances a [`SimulationState`] one generation at a time. Each step reads
//! only the current grid and writes into a separate buffer, which is swapped
//! in once every cell has been computed.

use super::{Grid, neighbor_count, next_state};

/// Engine lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Budget remaining and at least one live cell.
    Active,
    /// Budget exhausted or no live cells left.
    Terminated,
}

/// Simulation state container.
///
/// Exclusively owns the current generation's grid. No history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    /// Current generation's cells.
    pub grid: Grid,
    /// Maximum number of generations to run.
    pub epoch_budget: u64,
    /// Number of steps taken so far.
    pub generation: u64,
    /// Export a still image per generation.
    pub out_frames: bool,
    /// Dump the grid to stdout per generation.
    pub verbose: bool,
}

impl SimulationState {
    /// Create a state at generation 0 with both flags off.
    pub fn new(grid: Grid, epoch_budget: u64) -> Self {
        Self {
            grid,
            epoch_budget,
            generation: 0,
            out_frames: false,
            verbose: false,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of live cells in the current generation.
    pub fn count_lives(&self) -> usize {
        self.grid.count_lives()
    }

    /// True when the budget is spent or nothing is alive.
    pub fn is_terminated(&self) -> bool {
        self.generation >= self.epoch_budget || self.count_lives() == 0
    }

    pub fn engine_state(&self) -> EngineState {
        if self.is_terminated() {
            EngineState::Terminated
        } else {
            EngineState::Active
        }
    }

    /// Owned copy of the current grid for external renderers.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }
}

/// Errors from driving the engine outside its contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Simulation terminated at generation {generation}; step() is not allowed")]
    Terminated { generation: u64 },
    #[error("Propagator built for {expected:?} but state is {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

/// CPU Game of Life propagator.
pub struct LifePropagator {
    /// Pre-allocated write buffer for the next generation (reused each step).
    next: Grid,
}

impl LifePropagator {
    /// Create a propagator for grids of the given dimensions.
    ///
    /// # Panics
    /// Panics under the same conditions as [`Grid::new`]: a zero dimension
    /// or a cell count that overflows `usize`. Use [`LifePropagator::for_state`]
    /// to size the buffer from an existing, already valid grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            next: Grid::new(width, height),
        }
    }

    /// Create a propagator matching a state's dimensions.
    pub fn for_state(state: &SimulationState) -> Self {
        Self::new(state.width(), state.height())
    }

    /// Perform one generation step.
    pub fn step(&mut self, state: &mut SimulationState) -> Result<(), EngineError> {
        if !self.next.same_shape(&state.grid) {
            return Err(EngineError::ShapeMismatch {
                expected: (self.next.width(), self.next.height()),
                actual: (state.width(), state.height()),
            });
        }
        if state.is_terminated() {
            return Err(EngineError::Terminated {
                generation: state.generation,
            });
        }

        let current = &state.grid;
        let width = current.width();
        for (i, cell) in self.next.cells_mut().iter_mut().enumerate() {
            let (x, y) = (i % width, i / width);
            *cell = next_state(current.get(x, y), neighbor_count(current, x, y));
        }

        // Swap grids (no allocation); the old generation becomes the next write buffer
        std::mem::swap(&mut state.grid, &mut self.next);
        state.generation += 1;

        log::debug!(
            "generation {}: {} lives",
            state.generation,
            state.count_lives()
        );
        Ok(())
    }

    /// Step until terminated or `max_steps` reached. Returns steps taken.
    pub fn run(&mut self, state: &mut SimulationState, max_steps: u64) -> Result<u64, EngineError> {
        let mut taken = 0;
        while taken < max_steps && !state.is_terminated() {
            self.step(state)?;
            taken += 1;
        }
        Ok(taken)
    }
}

/// Simulation statistics for monitoring.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimulationStats {
    pub generation: u64,
    pub live_cells: usize,
    pub total_cells: usize,
    pub density: f32,
}

impl SimulationStats {
    /// Compute statistics from state.
    pub fn from_state(state: &SimulationState) -> Self {
        let live_cells = state.count_lives();
        let total_cells = state.grid.len();
        Self {
            generation: state.generation,
            live_cells,
            total_cells,
            density: live_cells as f32 / total_cells as f32,
        }
    }
}
