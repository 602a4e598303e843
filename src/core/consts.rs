pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;
pub const DEFAULT_CHANCE_LIGHT_STARTS_ON: f64 = 0.25;

/// Largest row or column count a `Coord` can still address.
pub const MAX_DIMENSION: usize = i32::MAX as usize;
