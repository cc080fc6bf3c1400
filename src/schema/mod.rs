//! Schema module - Scenario records, run configuration and seeding for Life simulations.

mod config;
mod sampler;
mod scenario;
mod seed;

pub use config::*;
pub use sampler::*;
pub use scenario::*;
pub use seed::*;
