use serde::{Deserialize, Serialize};

/// A cell position, zero-based. Signed so callers can hand us anything a
/// click or cursor produces; out-of-range positions are simply inert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    pub fn offset(self, dir: Direction) -> Coord {
        let delta = vec_from_dir(dir);
        Coord {
            row: self.row.saturating_add(delta.row),
            col: self.col.saturating_add(delta.col),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left]
    }
}

fn vec_from_dir(dir: Direction) -> Coord {
    match dir {
        Direction::Up => Coord { row: -1, col: 0 },
        Direction::Down => Coord { row: 1, col: 0 },
        Direction::Left => Coord { row: 0, col: -1 },
        Direction::Right => Coord { row: 0, col: 1 },
    }
}

/// Which cells a single toggle flips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleRule {
    /// Only the targeted cell flips.
    #[default]
    SingleCell,
    /// The targeted cell and its four orthogonal neighbours flip.
    Cross,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Toggle,
    NewGame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    InProgress,
    Won,
}

impl GameOutcome {
    pub fn from_won(won: bool) -> Self {
        if won { GameOutcome::Won } else { GameOutcome::InProgress }
    }

    pub fn is_won(self) -> bool {
        self == GameOutcome::Won
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameUpdate {
    Flipped { cells: usize, outcome: GameOutcome },
    NoChange { outcome: GameOutcome },
}

impl GameUpdate {
    pub fn outcome(&self) -> GameOutcome {
        match *self {
            GameUpdate::Flipped { outcome, .. } | GameUpdate::NoChange { outcome } => outcome,
        }
    }

    pub fn is_won(&self) -> bool {
        self.outcome().is_won()
    }
}
