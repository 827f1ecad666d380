//! Serializable generation snapshots and on-disk export

use crate::config::OutputFormat;
use crate::game_of_life::{io::grid_to_string, Cell, ConfigurationError, Grid};
use crate::utils::GridFormatter;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One generation of a run in a JSON-friendly shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: u64,
    pub rows: usize,
    pub columns: usize,
    pub living_cells: usize,
    /// Row-major, `true` for alive
    pub cells: Vec<Vec<bool>>,
}

impl Snapshot {
    pub fn capture(generation: u64, grid: &Grid) -> Self {
        Self {
            generation,
            rows: grid.rows(),
            columns: grid.columns(),
            living_cells: grid.living_count(),
            cells: grid
                .row_slices()
                .map(|row| row.iter().map(|&cell| bool::from(cell)).collect())
                .collect(),
        }
    }

    /// Rebuild the grid, rejecting snapshots whose header disagrees with the cells
    pub fn to_grid(&self) -> Result<Grid, ConfigurationError> {
        if self.cells.len() != self.rows {
            return Err(ConfigurationError::CellCount {
                len: self.cells.len(),
                expected: self.rows,
            });
        }
        for (row, line) in self.cells.iter().enumerate() {
            if line.len() != self.columns {
                return Err(ConfigurationError::RaggedRow { row, len: line.len(), expected: self.columns });
            }
        }

        let cells = self.cells.iter().flatten().map(|&alive| Cell::from(alive)).collect();
        Grid::from_flat(self.rows, self.columns, cells)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Write one generation to `output_dir` in the requested format
pub fn save_generation<P: AsRef<Path>>(
    grid: &Grid,
    generation: u64,
    output_dir: P,
    format: OutputFormat,
) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let (path, content) = match format {
        OutputFormat::Text => (
            output_dir.join(format!("generation_{:03}.txt", generation)),
            grid_to_string(grid),
        ),
        OutputFormat::Json => (
            output_dir.join(format!("generation_{:03}.json", generation)),
            Snapshot::capture(generation, grid)
                .to_json()
                .context("Failed to serialize snapshot")?,
        ),
        OutputFormat::Visual => (
            output_dir.join(format!("generation_{:03}_visual.txt", generation)),
            format!(
                "Generation {} (Living: {}):\n{}",
                generation,
                grid.living_count(),
                GridFormatter::format_grid_with_coords(grid)
            ),
        ),
    };

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
