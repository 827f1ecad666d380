//! Grid representation and utilities for Game of Life

use super::{Cell, ConfigurationError};
use std::fmt;

/// Offsets of the Moore neighborhood, row-major
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Upper bound on `rows * columns`
pub const MAX_CELLS: usize = 1 << 30;

/// A fixed-size Game of Life grid stored row-major.
///
/// Dimensions are set at construction and never change; there is no
/// wraparound, so positions outside the grid read as permanently dead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(rows: usize, columns: usize) -> Result<Self, ConfigurationError> {
        let len = Self::check_dimensions(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Create a grid from rows of cells
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Result<Self, ConfigurationError> {
        let rows = cells.len();
        if rows == 0 {
            return Err(ConfigurationError::EmptyGrid);
        }

        let columns = cells[0].len();
        if columns == 0 {
            return Err(ConfigurationError::ZeroWidth);
        }

        for (row, line) in cells.iter().enumerate() {
            if line.len() != columns {
                return Err(ConfigurationError::RaggedRow {
                    row,
                    len: line.len(),
                    expected: columns,
                });
            }
        }

        Ok(Self {
            rows,
            columns,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Create a grid from rows of booleans (`true` = alive)
    pub fn from_bools(cells: Vec<Vec<bool>>) -> Result<Self, ConfigurationError> {
        Self::from_cells(
            cells
                .into_iter()
                .map(|row| row.into_iter().map(Cell::from).collect())
                .collect(),
        )
    }

    /// Create a grid from an already flattened row-major buffer
    pub fn from_flat(rows: usize, columns: usize, cells: Vec<Cell>) -> Result<Self, ConfigurationError> {
        let expected = Self::check_dimensions(rows, columns)?;
        if cells.len() != expected {
            return Err(ConfigurationError::CellCount {
                len: cells.len(),
                expected,
            });
        }
        Ok(Self { rows, columns, cells })
    }

    /// Create a grid of the given size with the listed cells alive
    pub fn with_living(rows: usize, columns: usize, living: &[(usize, usize)]) -> Result<Self, ConfigurationError> {
        let mut grid = Self::new(rows, columns)?;
        for &(row, col) in living {
            grid.set(row, col, Cell::Alive)?;
        }
        Ok(grid)
    }

    /// Validate dimensions and return the cell count they describe
    fn check_dimensions(rows: usize, columns: usize) -> Result<usize, ConfigurationError> {
        if rows == 0 {
            return Err(ConfigurationError::EmptyGrid);
        }
        if columns == 0 {
            return Err(ConfigurationError::ZeroWidth);
        }
        rows.checked_mul(columns)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(ConfigurationError::TooLarge { rows, columns })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate over the grid one row slice at a time
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    #[inline]
    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    /// Get cell state at coordinates; out of bounds reads as dead
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if self.contains(row, col) {
            self.cells[self.index(row, col)]
        } else {
            Cell::Dead
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_alive()
    }

    /// Set cell state at coordinates
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), ConfigurationError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip the cell at coordinates and return its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, ConfigurationError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = self.cells[idx].toggled();
        Ok(self.cells[idx])
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, ConfigurationError> {
        if !self.contains(row, col) {
            return Err(ConfigurationError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.index(row, col))
    }

    /// Count living cells in the Moore neighborhood of (row, col).
    ///
    /// Offsets that land outside the grid are skipped, never wrapped.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                continue;
            };
            if self.contains(r, c) && self.cells[self.index(r, c)].is_alive() {
                count += 1;
            }
        }

        count
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx / self.columns, idx % self.columns))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Fraction of cells that are alive
    pub fn density(&self) -> f64 {
        self.living_count() as f64 / self.cells.len() as f64
    }

    /// Check whether no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    pub fn same_dimensions(&self, other: &Grid) -> bool {
        self.dimensions() == other.dimensions()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.cell_count(), 12);
        assert!(grid.is_extinct());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(Grid::new(0, 3), Err(ConfigurationError::EmptyGrid));
        assert_eq!(Grid::new(3, 0), Err(ConfigurationError::ZeroWidth));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(ConfigurationError::TooLarge { rows: usize::MAX, columns: 2 })
        );
        assert_eq!(
            Grid::new(100_000, 100_000),
            Err(ConfigurationError::TooLarge { rows: 100_000, columns: 100_000 })
        );
        // Product wraps to 0 without a checked multiply
        assert_eq!(
            Grid::from_flat(usize::MAX / 2 + 1, 2, vec![]),
            Err(ConfigurationError::TooLarge { rows: usize::MAX / 2 + 1, columns: 2 })
        );
    }

    #[test]
    fn test_grid_from_bools() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_bools(cells).unwrap();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.living_count(), 5);
        assert_eq!(grid.get(1, 1), Cell::Alive);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let cells = vec![vec![true, false, true], vec![false, true]];
        assert_eq!(
            Grid::from_bools(cells),
            Err(ConfigurationError::RaggedRow { row: 1, len: 2, expected: 3 })
        );
        assert_eq!(Grid::from_bools(vec![]), Err(ConfigurationError::EmptyGrid));
        assert_eq!(Grid::from_bools(vec![vec![]]), Err(ConfigurationError::ZeroWidth));
    }

    #[test]
    fn test_from_flat_checks_length() {
        assert!(Grid::from_flat(2, 2, vec![Cell::Dead; 4]).is_ok());
        assert_eq!(
            Grid::from_flat(2, 2, vec![Cell::Dead; 3]),
            Err(ConfigurationError::CellCount { len: 3, expected: 4 })
        );
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert_eq!(grid.get(5, 5), Cell::Dead);
        assert!(matches!(
            grid.set(2, 0, Cell::Alive),
            Err(ConfigurationError::OutOfBounds { row: 2, col: 0, .. })
        ));
        assert!(grid.toggle(0, 2).is_err());
    }

    #[test]
    fn test_toggle() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert_eq!(grid.toggle(1, 0).unwrap(), Cell::Alive);
        assert!(grid.is_alive(1, 0));
        assert_eq!(grid.toggle(1, 0).unwrap(), Cell::Dead);
        assert!(grid.is_extinct());
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_bools(cells).unwrap();

        // Center cell should have 8 neighbors
        assert_eq!(grid.count_neighbors(1, 1), 8);

        // Corner cell only sees 3 positions, and the center is dead
        assert_eq!(grid.count_neighbors(0, 0), 2);
        assert_eq!(grid.count_neighbors(0, 1), 4);
    }

    #[test]
    fn test_no_wraparound() {
        // Opposite corners would be neighbors on a torus
        let grid = Grid::with_living(3, 3, &[(0, 0), (2, 2), (0, 2), (2, 0)]).unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 0);
        assert_eq!(grid.count_neighbors(2, 2), 0);
        assert_eq!(grid.count_neighbors(1, 1), 4);
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = Grid::with_living(1, 1, &[(0, 0)]).unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 0);
    }

    #[test]
    fn test_living_cells_row_major() {
        let grid = Grid::with_living(3, 4, &[(2, 1), (0, 3), (1, 0)]).unwrap();
        assert_eq!(grid.living_cells(), vec![(0, 3), (1, 0), (2, 1)]);
        assert!((grid.density() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        let grid = Grid::with_living(2, 3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(grid.to_string(), "-1-\n--1\n");
    }
}
