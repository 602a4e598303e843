use crate::core::{Board, BoundsOriginRoot, Coord, Direction, GameUpdate};

pub struct GameRenderState<'a> {
    pub board: &'a Board,
    pub cursor: Coord,
    pub last_update: Option<GameUpdate>,
    pub error: Option<String>,
}

/// Moves the cursor one step, staying on the board.
pub fn move_cursor(cursor: Coord, dir: Direction, bounds: BoundsOriginRoot) -> Coord {
    bounds.clamp(cursor.offset(dir))
}
