//! Random initial states

use super::{Cell, ConfigurationError, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fill a grid so each cell is alive with probability `density`
pub fn random_grid<R: Rng + ?Sized>(
    rows: usize,
    columns: usize,
    density: f64,
    rng: &mut R,
) -> Result<Grid, ConfigurationError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(ConfigurationError::InvalidDensity(density));
    }

    let mut grid = Grid::new(rows, columns)?;
    for cell in grid.cells_mut() {
        *cell = Cell::from(rng.gen_bool(density));
    }
    Ok(grid)
}

/// Random grid from a fixed seed, or from entropy when no seed is given
pub fn seeded_grid(
    rows: usize,
    columns: usize,
    density: f64,
    seed: Option<u64>,
) -> Result<Grid, ConfigurationError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    random_grid(rows, columns, density, &mut rng)
}
