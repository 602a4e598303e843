use crate::core::Grid;

/// Solved when every light is off.
pub fn is_won(grid: &Grid) -> bool {
    !grid.cells().iter().any(|&lit| lit)
}

pub fn lit_count(grid: &Grid) -> usize {
    grid.cells().iter().filter(|&&lit| lit).count()
}
