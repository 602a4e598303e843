use serde::{Deserialize, Serialize};
use crate::core::{
    BoardError, Result, ToggleRule, DEFAULT_CHANCE_LIGHT_STARTS_ON, DEFAULT_COLS, DEFAULT_ROWS,
    MAX_DIMENSION,
};

/// Everything needed to deal a fresh board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub chance_light_starts_on: f64,
    pub rule: ToggleRule,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            chance_light_starts_on: DEFAULT_CHANCE_LIGHT_STARTS_ON,
            rule: ToggleRule::default(),
        }
    }
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize, chance_light_starts_on: f64) -> Self {
        BoardConfig {
            rows,
            cols,
            chance_light_starts_on,
            ..BoardConfig::default()
        }
    }

    pub fn with_rule(mut self, rule: ToggleRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.rows, self.cols)?;
        // also rejects NaN
        if !(0.0..=1.0).contains(&self.chance_light_starts_on) {
            return Err(BoardError::InvalidConfiguration(format!(
                "chance a light starts on must be within [0, 1], got {}",
                self.chance_light_starts_on
            )));
        }
        Ok(())
    }
}

/// Rows and columns must be positive, addressable by a `Coord`, and their
/// product must fit in a `usize`.
pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(BoardError::InvalidConfiguration(format!(
            "board dimensions must be positive, got {}x{}",
            rows, cols
        )));
    }
    if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
        return Err(BoardError::InvalidConfiguration(format!(
            "board dimensions must be at most {}, got {}x{}",
            MAX_DIMENSION, rows, cols
        )));
    }
    if rows.checked_mul(cols).is_none() {
        return Err(BoardError::InvalidConfiguration(format!(
            "a {}x{} board has too many cells",
            rows, cols
        )));
    }
    Ok(())
}
