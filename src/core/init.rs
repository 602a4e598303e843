use rand::Rng;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::{BoardConfig, BoundedGrid, Grid, Result};

/// Deals a fresh grid: each light is lit independently with
/// `config.chance_light_starts_on`. Cells are drawn row by row, so a seeded
/// `rng` always yields the same board.
pub fn initialize<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Result<Grid> {
    config.validate()?;

    let bounds = BoundsOriginRoot::new(config.rows, config.cols);
    let cells = (0..bounds.area())
        .map(|_| rng.random_bool(config.chance_light_starts_on))
        .collect();

    Ok(BoundedGrid::from_cells(bounds, cells))
}
