//! Binary cell state

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Flip between `Alive` and `Dead`
    pub fn toggled(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Character used by the text rendering
    pub fn symbol(self) -> char {
        match self {
            Cell::Alive => '1',
            Cell::Dead => '-',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Cell::Alive.toggled(), Cell::Dead);
        assert_eq!(Cell::Dead.toggled(), Cell::Alive);
        assert_eq!(Cell::Dead.toggled().toggled(), Cell::Dead);
    }

    #[test]
    fn test_bool_conversion() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert!(bool::from(Cell::Alive));
        assert!(!bool::from(Cell::Dead));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Cell::Alive.to_string(), "1");
        assert_eq!(Cell::Dead.to_string(), "-");
        assert_eq!(Cell::default(), Cell::Dead);
    }
}
