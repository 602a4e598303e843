mod board;
mod bounded_grid;
mod bounds;
mod config;
mod consts;
mod error;
mod init;
mod model_helpers;
mod models;
mod snapshot;
mod update;

pub use board::Board;
pub use bounded_grid::{BoundedGrid, Grid};
pub use bounds::BoundsOriginRoot;
pub use config::BoardConfig;
pub use consts::*;
pub use error::{BoardError, Result};
pub use init::initialize;
pub use model_helpers::{is_won, lit_count};
pub use models::{Coord, Direction, GameOutcome, GameUpdate, ToggleRule, UserAction};
pub use snapshot::BoardSnapshot;
pub use update::{toggle, toggle_in_place};
