use crate::core::{Board, Direction};
use crate::level_text::{render_board, Notation};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use tracing::debug;

pub type ConsoleTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub fn setup_terminal() -> io::Result<ConsoleTerminal> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

pub fn cleanup_terminal() -> io::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut ConsoleTerminal,
    notation: Notation,
    state: &GameRenderState,
) -> io::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let game_text = render_board(&state.board, notation);
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status = status_line(state);
        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);
    })?;
    Ok(())
}

fn status_line(state: &GameRenderState) -> String {
    let mut line = if state.solved {
        "Solved! Press any key to quit.".to_string()
    } else {
        "Controls: WASD or Arrow keys to move, Q to quit".to_string()
    };
    line.push_str(&format!(
        " | Moves: {} | On storage: {}/{}",
        state.moves,
        state.board.markers_on_storage(),
        state.board.storage_count()
    ));
    if let Some(err) = &state.error {
        line.push_str(&format!(" | Blocked: {}", err));
    }
    if let Some(change) = &state.last_change {
        line.push_str(&format!(" | Last: {:?}", change));
    }
    line
}

pub enum ConsoleInput {
    Move(Direction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> io::Result<ConsoleInput> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => ConsoleInput::Move(Direction::Up),
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => ConsoleInput::Move(Direction::Down),
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => ConsoleInput::Move(Direction::Left),
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => ConsoleInput::Move(Direction::Right),
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

/// Interactive loop. A refused move is shown in the status line and the
/// board stays as it was.
pub fn run_interactive(
    terminal: &mut ConsoleTerminal,
    board: Board,
    notation: Notation,
) -> io::Result<Board> {
    let mut state = GameRenderState {
        solved: board.is_solved(),
        board,
        error: None,
        last_change: None,
        moves: 0,
    };
    render_game(terminal, notation, &state)?;

    loop {
        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::Move(direction) => {
                match crate::core::step(&state.board, direction) {
                    Ok(next) => {
                        state.board = next.board;
                        state.last_change = Some(next.change);
                        state.error = None;
                        state.moves += 1;
                    }
                    Err(err) => {
                        debug!(%direction, %err, "move refused");
                        state.error = Some(err);
                    }
                }
                state.solved = state.board.is_solved();
                render_game(terminal, notation, &state)?;

                if state.solved {
                    // Keep showing the solved screen until a key is pressed
                    loop {
                        match handle_input()? {
                            ConsoleInput::Timeout => {}
                            _ => break,
                        }
                    }
                    break;
                }
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }
    }

    Ok(state.board)
}
