// Lights Out in the terminal.
// Controls: arrows / WASD move the cursor, Space or Enter toggles, N deals a new board, Q quits.
// Cells: 'O' lit, '.' unlit. Clear every light to win.

use clap::{Parser, ValueEnum};
use lights_out::console_interface::{
    cleanup_terminal, handle_input, render_game, setup_terminal, ConsoleInput,
};
use lights_out::core::{
    Board, BoardConfig, BoardSnapshot, Coord, ToggleRule, UserAction, DEFAULT_CHANCE_LIGHT_STARTS_ON,
    DEFAULT_COLS, DEFAULT_ROWS,
};
use lights_out::models::{move_cursor, GameRenderState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RuleArg {
    /// Flip only the chosen light
    Single,
    /// Flip the chosen light and its four neighbours
    Cross,
}

impl From<RuleArg> for ToggleRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Single => ToggleRule::SingleCell,
            RuleArg::Cross => ToggleRule::Cross,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Number of rows on the board.
    #[arg(long, default_value_t = DEFAULT_ROWS, value_parser = parse_dimension)]
    rows: usize,
    /// Number of columns on the board.
    #[arg(long, default_value_t = DEFAULT_COLS, value_parser = parse_dimension)]
    cols: usize,
    /// Chance that any light starts lit, between 0 and 1.
    #[arg(long, value_name = "P", default_value_t = DEFAULT_CHANCE_LIGHT_STARTS_ON)]
    chance: f64,
    /// Seed for dealing boards. A random seed is picked and logged when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Which lights a toggle flips.
    #[arg(long, value_enum, default_value_t = RuleArg::Single)]
    rule: RuleArg,
    /// Write the final board as JSON here on exit.
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,
    /// Log file; the terminal itself is taken over by the game.
    #[arg(long, value_name = "PATH", default_value = "lights_out.log")]
    log_file: PathBuf,
    /// Log every toggle, not just session events.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_dimension(s: &str) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|e| format!("{}", e))?;
    if value == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(value)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    init_logging(&args)?;

    let config = BoardConfig::new(args.rows, args.cols, args.chance).with_rule(args.rule.into());

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, ?config, "starting session");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(config, &mut rng)?;

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut board, &mut rng, &mut terminal);
    cleanup_terminal()?;
    result?;

    if let Some(path) = &args.export {
        let json = BoardSnapshot::of(&board).to_json()?;
        std::fs::write(path, json)?;
        println!("Board exported to {}", path.display());
    }

    Ok(())
}

fn init_logging(args: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&args.log_file)?;

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_out))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

fn run_interactive(
    board: &mut Board,
    rng: &mut StdRng,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cursor = Coord::new(0, 0);
    let mut last_update = None;
    let mut error = None;

    loop {
        render_game(terminal, &GameRenderState {
            board: &*board,
            cursor,
            last_update,
            error: error.take(),
        })?;

        let input = match next_input() {
            Ok(input) => input,
            Err(err) => {
                warn!(%err, "error reading input");
                return Err(err);
            }
        };

        match input {
            ConsoleInput::Quit => break,
            ConsoleInput::UserAction(UserAction::Move(dir)) => {
                cursor = move_cursor(cursor, dir, board.grid().size());
            }
            ConsoleInput::UserAction(UserAction::Toggle) => {
                // a solved board waits for a new game or quit
                if !board.is_won() {
                    last_update = Some(board.toggle(cursor));
                }
            }
            ConsoleInput::UserAction(UserAction::NewGame) => {
                board.new_game(rng)?;
                cursor = Coord::new(0, 0);
                last_update = None;
            }
            ConsoleInput::Unknown => {
                error = Some("unknown key".to_string());
            }
            ConsoleInput::Timeout => {}
        }
    }

    info!(moves = board.moves(), won = board.is_won(), "session ended");
    Ok(())
}

/// Blocks until a key press arrives.
fn next_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    loop {
        match handle_input()? {
            ConsoleInput::Timeout => {}
            input => return Ok(input),
        }
    }
}
