use rand::Rng;
use tracing::{debug, info};
use crate::core::init::initialize;
use crate::core::model_helpers::{is_won, lit_count};
use crate::core::update::toggle_in_place;
use crate::core::{
    BoardConfig, Coord, GameOutcome, GameUpdate, Grid, Result, ToggleRule,
    DEFAULT_CHANCE_LIGHT_STARTS_ON,
};

/// One game session: the lights plus the rule used to flip them.
///
/// The grid only changes through [`Board::toggle`], or wholesale through
/// [`Board::new_game`]. A won board keeps accepting toggles.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    grid: Grid,
    config: BoardConfig,
    outcome: GameOutcome,
    moves: usize,
}

impl Board {
    pub fn new<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Result<Self> {
        let grid = initialize(&config, rng)?;
        info!(
            rows = config.rows,
            cols = config.cols,
            chance = config.chance_light_starts_on,
            rule = ?config.rule,
            lit = lit_count(&grid),
            "dealt new board"
        );
        Ok(Board::with_config(grid, config))
    }

    /// Wraps an existing grid, e.g. one parsed from text.
    pub fn from_grid(grid: Grid, rule: ToggleRule) -> Self {
        let config =
            BoardConfig::new(grid.rows(), grid.cols(), DEFAULT_CHANCE_LIGHT_STARTS_ON).with_rule(rule);
        Board::with_config(grid, config)
    }

    /// Caller guarantees `config` is valid and matches the grid's dimensions.
    pub(crate) fn from_parts(grid: Grid, config: BoardConfig) -> Self {
        debug_assert_eq!((grid.rows(), grid.cols()), (config.rows, config.cols));
        Board::with_config(grid, config)
    }

    fn with_config(grid: Grid, config: BoardConfig) -> Self {
        let outcome = GameOutcome::from_won(is_won(&grid));
        Board {
            grid,
            config,
            outcome,
            moves: 0,
        }
    }

    pub fn toggle(&mut self, coord: Coord) -> GameUpdate {
        let flipped = toggle_in_place(&mut self.grid, coord, self.config.rule);
        if flipped == 0 {
            debug!(row = coord.row, col = coord.col, "toggle outside board ignored");
            return GameUpdate::NoChange { outcome: self.outcome };
        }

        self.moves += 1;
        let previous = self.outcome;
        self.outcome = GameOutcome::from_won(is_won(&self.grid));
        debug!(row = coord.row, col = coord.col, flipped, lit = self.lit_count(), "toggled");
        if self.outcome.is_won() && !previous.is_won() {
            info!(moves = self.moves, "board solved");
        }

        GameUpdate::Flipped {
            cells: flipped,
            outcome: self.outcome,
        }
    }

    /// Replaces the grid with a freshly dealt one of the same configuration.
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GameOutcome> {
        let grid = initialize(&self.config, rng)?;
        info!(lit = lit_count(&grid), "started new game");
        *self = Board::with_config(grid, self.config);
        Ok(self.outcome)
    }

    pub fn is_won(&self) -> bool {
        self.outcome.is_won()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn rule(&self) -> ToggleRule {
        self.config.rule
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn lit_count(&self) -> usize {
        lit_count(&self.grid)
    }

    /// In-range toggles applied this session.
    pub fn moves(&self) -> usize {
        self.moves
    }
}
