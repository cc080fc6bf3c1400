//! Compute module - Grid model and generation engine for the Game of Life.

mod grid;
mod neighborhood;
mod propagator;
mod rule;

pub use grid::*;
pub use neighborhood::*;
pub use propagator::*;
pub use rule::*;
