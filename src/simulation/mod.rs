//! Driver-side simulation state: run control, analysis and snapshots

pub mod analysis;
pub mod error;
pub mod run_state;
pub mod driver;
pub mod snapshot;

pub use analysis::{analyze_patterns, PatternReport, StabilityAnalysis};
pub use error::SimulationError;
pub use run_state::RunState;
pub use driver::Simulation;
pub use snapshot::{save_generation, Snapshot};
