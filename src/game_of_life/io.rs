//! Text I/O for Game of Life grids
//!
//! Each line is one row: `1` for alive cells, `0` or `-` for dead cells.
//! Rendering always writes `1` and `-`.

use super::{Cell, ConfigurationError, Grid};
use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, warn};
use std::path::Path;

/// Load a grid from a text file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    let grid = parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse grid from file: {}", path.as_ref().display()))?;
    debug!("loaded {}x{} grid from {}", grid.rows(), grid.columns(), path.as_ref().display());
    Ok(grid)
}

/// Parse a grid from a string representation
pub fn parse_grid_from_string(content: &str) -> Result<Grid, ConfigurationError> {
    let cells = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(row, line)| {
            line.chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '1' => Ok(Cell::Alive),
                    '0' | '-' => Ok(Cell::Dead),
                    _ => Err(ConfigurationError::InvalidCharacter { ch, row, col }),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Grid::from_cells(cells)
}

/// Render a grid as newline-terminated rows of `1` / `-`
pub fn grid_to_string(grid: &Grid) -> String {
    grid.row_slices()
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .map(|line| line + "\n")
        .join("")
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, grid_to_string(grid))
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Load every `.txt` grid in a directory, sorted by file stem.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_grids_from_directory<P: AsRef<Path>>(dir_path: P) -> Result<Vec<(String, Grid)>> {
    let dir = std::fs::read_dir(&dir_path)
        .with_context(|| format!("Failed to read directory: {}", dir_path.as_ref().display()))?;

    let mut grids = Vec::new();

    for entry in dir {
        let path = entry.context("Failed to read directory entry")?.path();
        if !path.is_file() || path.extension().map_or(true, |ext| ext != "txt") {
            continue;
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        match load_grid_from_file(&path) {
            Ok(grid) => grids.push((name, grid)),
            Err(e) => warn!("skipping {}: {:#}", path.display(), e),
        }
    }

    grids.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(grids)
}

/// Write a small library of well-known patterns
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns = [
        ("block.txt", "----\n-11-\n-11-\n----\n"),
        ("blinker.txt", "-----\n-----\n-111-\n-----\n-----\n"),
        ("beacon.txt", "11----\n11----\n--11--\n--11--\n------\n------\n"),
        ("glider.txt", "-1------\n--1-----\n111-----\n--------\n--------\n--------\n--------\n--------\n"),
    ];

    for (name, content) in patterns {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}
