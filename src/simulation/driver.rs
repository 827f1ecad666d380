//! Simulation state owned by a driver loop

use super::{RunState, SimulationError};
use crate::game_of_life::{Cell, GenerationEngine, Grid};
use log::{debug, info};

/// A grid plus the engine and run state that advance it.
///
/// Holds a second buffer of the same size so each generation is computed
/// off to the side and swapped in whole.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    scratch: Grid,
    engine: GenerationEngine,
    generation: u64,
    state: RunState,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        info!("new {}x{} simulation with {} live cells", grid.rows(), grid.columns(), grid.living_count());
        Self {
            scratch: grid.clone(),
            grid,
            engine: GenerationEngine::new(),
            generation: 0,
            state: RunState::Editing,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the simulation and hand back the current grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Number of generations advanced so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn play(&mut self) {
        self.transition(self.state.play());
    }

    pub fn pause(&mut self) {
        self.transition(self.state.pause());
    }

    fn transition(&mut self, next: RunState) {
        if next != self.state {
            debug!("run state {} -> {} at generation {}", self.state, next, self.generation);
            self.state = next;
        }
    }

    /// Flip a cell while editing or paused
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Cell, SimulationError> {
        if !self.state.allows_editing() {
            return Err(SimulationError::EditWhileRunning);
        }
        Ok(self.grid.toggle(row, col)?)
    }

    /// Advance one generation if running. Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.step_once();
        true
    }

    /// Advance exactly one generation regardless of run state
    pub fn step_once(&mut self) -> &Grid {
        // Grid dimensions never change, so the scratch buffer always fits.
        self.engine.fill_next(&self.grid, &mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        debug!("generation {}: {} live cells", self.generation, self.grid.living_count());
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Grid {
        Grid::with_living(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_starts_editing() {
        let sim = Simulation::new(blinker());
        assert_eq!(sim.state(), RunState::Editing);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_tick_only_advances_while_running() {
        let mut sim = Simulation::new(blinker());
        assert!(!sim.tick());
        assert_eq!(sim.grid(), &blinker());

        sim.play();
        assert!(sim.tick());
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.grid(), &Grid::with_living(5, 5, &[(1, 2), (2, 2), (3, 2)]).unwrap());

        sim.pause();
        assert!(!sim.tick());
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_toggle_rules() {
        let mut sim = Simulation::new(blinker());
        assert_eq!(sim.toggle_cell(0, 0).unwrap(), Cell::Alive);

        sim.play();
        assert_eq!(sim.toggle_cell(0, 0), Err(SimulationError::EditWhileRunning));

        sim.pause();
        assert_eq!(sim.toggle_cell(0, 0).unwrap(), Cell::Dead);
        assert!(matches!(
            sim.toggle_cell(9, 9),
            Err(SimulationError::Configuration(_))
        ));
    }

    #[test]
    fn test_toggled_dead_cell_stays_dead() {
        // A cell switched off while paused must follow the rules on the next
        // step rather than keep its previous next-state.
        let mut sim = Simulation::new(Grid::with_living(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap());
        sim.step_once();
        sim.toggle_cell(1, 1).unwrap();
        sim.step_once();
        assert_eq!(sim.grid().get(1, 1), Cell::Alive); // reborn: three live neighbors

        let mut sim = Simulation::new(Grid::with_living(4, 4, &[(0, 0)]).unwrap());
        sim.toggle_cell(0, 0).unwrap();
        sim.step_once();
        assert!(sim.grid().is_extinct());
    }

    #[test]
    fn test_step_once_ignores_run_state() {
        let mut sim = Simulation::new(blinker());
        sim.step_once();
        sim.step_once();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.into_grid(), blinker());
    }
}
