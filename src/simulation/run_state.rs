//! Run state of an interactive simulation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the driver is editing cells, ticking, or holding still
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Initial state before the first play; cells may be toggled
    #[default]
    Editing,
    Running,
    /// Stopped after running; cells may be toggled again
    Paused,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }

    pub fn allows_editing(self) -> bool {
        !self.is_running()
    }

    /// State after pressing play
    pub fn play(self) -> Self {
        RunState::Running
    }

    /// State after pressing pause; only a running simulation pauses
    pub fn pause(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            other => other,
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunState::Editing => "editing",
            RunState::Running => "running",
            RunState::Paused => "paused",
        };
        f.write_str(label)
    }
}
