//! Game of Life core functionality

pub mod cell;
pub mod engine;
pub mod error;
pub mod grid;
pub mod io;
pub mod rules;
pub mod seed;

pub use cell::Cell;
pub use engine::GenerationEngine;
pub use error::ConfigurationError;
pub use grid::Grid;
pub use rules::GameOfLifeRules;
pub use io::{load_grid_from_file, save_grid_to_file, parse_grid_from_string, grid_to_string, create_example_patterns};
pub use seed::{random_grid, seeded_grid};
