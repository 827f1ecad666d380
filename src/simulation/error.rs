use crate::game_of_life::ConfigurationError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("cells can only be edited while the simulation is not running")]
    EditWhileRunning,

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
