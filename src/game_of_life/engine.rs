//! Generation transition engine

use super::{ConfigurationError, GameOfLifeRules, Grid};

/// Advances a grid by one generation under Conway's rules.
///
/// The engine holds no state between calls. Every step reads only the
/// current grid and writes only into a separate next-generation buffer,
/// so the result does not depend on iteration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationEngine;

impl GenerationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the next generation into a freshly allocated grid
    pub fn step(&self, current: &Grid) -> Grid {
        let mut next = current.clone();
        self.fill_next(current, &mut next);
        next
    }

    /// Compute the next generation into a caller-owned buffer.
    ///
    /// `next` must have the same dimensions as `current`; its previous
    /// contents are overwritten entirely.
    pub fn step_into(&self, current: &Grid, next: &mut Grid) -> Result<(), ConfigurationError> {
        if !current.same_dimensions(next) {
            return Err(ConfigurationError::DimensionMismatch {
                rows: current.rows(),
                columns: current.columns(),
                actual_rows: next.rows(),
                actual_columns: next.columns(),
            });
        }
        self.fill_next(current, next);
        Ok(())
    }

    /// Double-buffered step: compute into `scratch`, then swap it with
    /// `current`. `current` only changes once the whole generation is done.
    pub fn advance(&self, current: &mut Grid, scratch: &mut Grid) -> Result<(), ConfigurationError> {
        self.step_into(current, scratch)?;
        std::mem::swap(current, scratch);
        Ok(())
    }

    /// Evolve the grid for multiple generations
    pub fn run(&self, grid: &Grid, generations: usize) -> Grid {
        let mut current = grid.clone();
        let mut scratch = grid.clone();
        for _ in 0..generations {
            self.fill_next(&current, &mut scratch);
            std::mem::swap(&mut current, &mut scratch);
        }
        current
    }

    pub(crate) fn fill_next(&self, current: &Grid, next: &mut Grid) {
        let columns = current.columns();
        for (idx, cell) in next.cells_mut().iter_mut().enumerate() {
            let (row, col) = (idx / columns, idx % columns);
            let live_neighbors = current.count_neighbors(row, col);
            *cell = GameOfLifeRules::next_state(current.get(row, col), live_neighbors);
        }
    }
}
