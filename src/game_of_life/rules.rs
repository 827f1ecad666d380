//! Conway's transition rule

use super::Cell;

/// Largest possible live-neighbor count in a Moore neighborhood
pub const MAX_NEIGHBORS: u8 = 8;

/// Game of Life rules (B3/S23)
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// State of a cell in the next generation given its current state and
    /// live-neighbor count.
    pub fn next_state(current: Cell, live_neighbors: u8) -> Cell {
        match (current, live_neighbors) {
            // Underpopulation
            (Cell::Alive, 0..=1) => Cell::Dead,
            // Survival
            (Cell::Alive, 2..=3) => Cell::Alive,
            // Overpopulation
            (Cell::Alive, _) => Cell::Dead,
            // Reproduction
            (Cell::Dead, 3) => Cell::Alive,
            (Cell::Dead, _) => Cell::Dead,
        }
    }

    /// Boolean form of [`Self::next_state`]
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        Self::next_state(Cell::from(current_state), neighbor_count).is_alive()
    }

    /// Neighbor counts that bring a dead cell to life
    pub fn birth_neighbor_counts() -> Vec<u8> {
        vec![3]
    }

    /// Neighbor counts that keep a live cell alive
    pub fn survival_neighbor_counts() -> Vec<u8> {
        vec![2, 3]
    }

    pub fn max_neighbor_count() -> u8 {
        MAX_NEIGHBORS
    }

    /// Check if a neighbor count is valid (0-8)
    pub fn is_valid_neighbor_count(count: u8) -> bool {
        count <= MAX_NEIGHBORS
    }
}
