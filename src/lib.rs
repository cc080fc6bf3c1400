//! Image Life - Conway's Game of Life seeded from raster images.
//!
//! This crate runs the classic B3/S23 automaton on a dense, fixed-boundary
//! grid. The initial generation is sampled from an image (one cell per
//! pixel) or restored from a JSON scenario, and the generation sequence is
//! rendered as a looping GIF.
//!
//! # Architecture
//!
//! - `compute`: Grid model, neighborhood counting, transition rule, propagator
//! - `schema`: Scenario records, image sampling, seeding ops, run configuration
//! - `animation`: GIF recording and JPEG still export
//! - `driver`: The run loop tying the above together
//!
//! # Example
//!
//! ```rust,no_run
//! use image_life::{
//!     compute::LifePropagator,
//!     schema::{LivesPolicy, Scenario, SeedRng},
//! };
//!
//! // Restore a scenario and apply its seeding ops
//! let scenario = Scenario::load("input.json").unwrap();
//! let mut rng = SeedRng::new(42);
//! let mut state = scenario.into_state(&mut rng, LivesPolicy::Lenient).unwrap();
//!
//! // Step until the budget is spent or everything has died
//! let mut propagator = LifePropagator::for_state(&state);
//! while !state.is_terminated() {
//!     propagator.step(&mut state).unwrap();
//! }
//!
//! println!("Lives after {} generations: {}", state.generation, state.count_lives());
//! ```

pub mod animation;
pub mod compute;
pub mod driver;
pub mod error;
pub mod schema;

// Re-export commonly used types
pub use compute::{Grid, LifePropagator, SimulationState, SimulationStats};
pub use error::RunError;
pub use schema::{RunConfig, Scenario, SeedRng};
