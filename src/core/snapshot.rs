use serde::{Deserialize, Serialize};
use crate::core::{
    Board, BoardConfig, BoardError, BoundedGrid, GameOutcome, Result, ToggleRule,
    DEFAULT_CHANCE_LIGHT_STARTS_ON,
};

fn default_chance() -> f64 {
    DEFAULT_CHANCE_LIGHT_STARTS_ON
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub rule: ToggleRule,
    #[serde(default = "default_chance")]
    pub chance_light_starts_on: f64,
    pub outcome: GameOutcome,
    pub moves: usize,
    pub cells: Vec<Vec<bool>>,
}

impl BoardSnapshot {
    pub fn of(board: &Board) -> Self {
        BoardSnapshot {
            rows: board.rows(),
            cols: board.cols(),
            rule: board.rule(),
            chance_light_starts_on: board.config().chance_light_starts_on,
            outcome: board.outcome(),
            moves: board.moves(),
            cells: board.grid().to_rows(),
        }
    }

    /// Rebuilds a board from the snapshot's cells and deal settings, so a new
    /// game on it deals the same way. The move counter starts over.
    pub fn into_board(self) -> Result<Board> {
        let grid = BoundedGrid::from_rows(self.cells)?;
        if grid.rows() != self.rows || grid.cols() != self.cols {
            return Err(BoardError::InvalidConfiguration(format!(
                "snapshot claims {}x{} but holds {}x{} cells",
                self.rows,
                self.cols,
                grid.rows(),
                grid.cols()
            )));
        }
        let config = BoardConfig::new(self.rows, self.cols, self.chance_light_starts_on).with_rule(self.rule);
        config.validate()?;
        Ok(Board::from_parts(grid, config))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
