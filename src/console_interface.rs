use crate::core::{BoardError, BoundedGrid, Coord, Direction, GameUpdate, Grid, Result, UserAction};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub const LIT: char = 'O';
pub const UNLIT: char = '.';

/// Reads a board drawn with `O` for lit and `.` for unlit cells, one row per
/// line. Blank lines and surrounding whitespace are ignored.
pub fn parse_board(s: &str) -> Result<Grid> {
    let mut rows: Vec<Vec<bool>> = Vec::new();

    for (line_no, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(line.len());
        for ch in line.chars() {
            let lit = match ch {
                LIT | 'o' | '1' => true,
                UNLIT | '0' => false,
                other => {
                    return Err(BoardError::Parse {
                        line: line_no + 1,
                        message: format!("unexpected symbol {:?}", other),
                    });
                }
            };
            row.push(lit);
        }

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(BoardError::Parse {
                    line: line_no + 1,
                    message: format!("row has {} cells, expected {}", row.len(), first.len()),
                });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(BoardError::Parse {
            line: 0,
            message: "no rows found".to_string(),
        });
    }

    BoundedGrid::from_rows(rows)
}

pub fn render_board_to_string(grid: &Grid) -> String {
    let mut result = String::new();
    for row in grid.iter_rows() {
        for &lit in row {
            result.push(if lit { LIT } else { UNLIT });
        }
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> std::result::Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> std::result::Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let board_paragraph = Paragraph::new(board_lines(state))
            .block(Block::default().borders(Borders::ALL).title("Lights Out"))
            .alignment(Alignment::Center);
        f.render_widget(board_paragraph, chunks[0]);

        let status_paragraph = Paragraph::new(status_line(state))
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub(crate) fn board_lines(state: &GameRenderState) -> Vec<Line<'static>> {
    let grid = state.board.grid();
    grid.iter_rows()
        .enumerate()
        .map(|(i, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(j, &lit)| {
                    let mut style = if lit {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    if is_cursor(state.cursor, i, j) && !state.board.is_won() {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!(" {} ", if lit { LIT } else { UNLIT }), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn is_cursor(cursor: Coord, row: usize, col: usize) -> bool {
    usize::try_from(cursor.row) == Ok(row) && usize::try_from(cursor.col) == Ok(col)
}

pub fn status_line(state: &GameRenderState) -> String {
    let status = if state.board.is_won() {
        format!("You Win in {} moves! N for a new game, Q to quit.", state.board.moves())
    } else {
        format!(
            "Arrows/WASD move, Space toggles, N new game, Q quit | Lit: {} | Moves: {}",
            state.board.lit_count(),
            state.board.moves()
        )
    };

    let status = match state.last_update {
        Some(GameUpdate::Flipped { cells, .. }) => format!("{} | Last: flipped {}", status, cells),
        Some(GameUpdate::NoChange { .. }) => format!("{} | Last: nothing to flip", status),
        None => status,
    };

    match &state.error {
        Some(err) => format!("{} | Error: {}", status, err),
        None => status,
    }
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> std::result::Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(input_from_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}

pub fn input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        KeyCode::Char(' ') | KeyCode::Enter => ConsoleInput::UserAction(UserAction::Toggle),
        KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::UserAction(UserAction::NewGame),
        _ => ConsoleInput::Unknown,
    }
}
