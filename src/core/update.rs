use crate::core::model_helpers::is_won;
use crate::core::{Coord, Direction, Grid, ToggleRule};

/// Applies one toggle to a copy of `grid`, returning it with the new win state.
pub fn toggle(grid: &Grid, coord: Coord, rule: ToggleRule) -> (Grid, bool) {
    let mut next = grid.clone();
    toggle_in_place(&mut next, coord, rule);
    let won = is_won(&next);
    (next, won)
}

/// Flips the cells `rule` selects around `coord` and returns how many flipped.
/// A target outside the grid is ignored entirely, neighbours included.
pub fn toggle_in_place(grid: &mut Grid, coord: Coord, rule: ToggleRule) -> usize {
    if !grid.contains(&coord) {
        return 0;
    }

    let mut flipped = 0;
    for pos in affected_cells(coord, rule) {
        if grid.flip(&pos) {
            flipped += 1;
        }
    }
    flipped
}

fn affected_cells(coord: Coord, rule: ToggleRule) -> Vec<Coord> {
    match rule {
        ToggleRule::SingleCell => vec![coord],
        ToggleRule::Cross => {
            let mut cells = vec![coord];
            cells.extend(Direction::all().into_iter().map(|dir| coord.offset(dir)));
            cells
        }
    }
}
