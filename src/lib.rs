//! Conway's Game of Life generation engine
//!
//! This library advances a fixed-size, non-wrapping Game of Life grid one
//! generation at a time and provides the driver-side pieces around it:
//! run state, seeding, text I/O and pattern analysis.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Cell, ConfigurationError, GenerationEngine, Grid};
pub use simulation::{RunState, Simulation};

/// Advance `grid` by `generations` steps with a fresh engine
pub fn evolve(grid: &Grid, generations: usize) -> Grid {
    GenerationEngine::new().run(grid, generations)
}
