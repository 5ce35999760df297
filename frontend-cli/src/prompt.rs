//! Inline multi-select prompt rendered with crossterm.

use backend::{ProcError, SelectPrompt};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};

/// Leaves raw mode again no matter how the prompt ends.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self, ProcError> {
        terminal::enable_raw_mode().map_err(|e| ProcError::Prompt(e.to_string()))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Raw-mode checkbox list: arrows or j/k to move, space to toggle, enter
/// to confirm, esc/q/ctrl-c to abort.
#[derive(Debug, Default)]
pub struct TerminalMultiSelect;

impl SelectPrompt for TerminalMultiSelect {
    fn multi_select(
        &self,
        message: &str,
        options: &[String],
        default_selected: bool,
        page_size: usize,
    ) -> Result<Vec<usize>, ProcError> {
        if options.is_empty() {
            return Ok(Vec::new());
        }

        let _guard = RawModeGuard::enter()?;
        let mut stdout = io::stdout();
        let page = page_size.max(1).min(options.len());
        let mut selected = vec![default_selected; options.len()];
        let mut cursor_idx = 0usize;
        let mut offset = 0usize;
        let mut first = true;

        let confirmed = loop {
            draw(&mut stdout, message, options, &selected, cursor_idx, offset, page, first)
                .map_err(|e| ProcError::Prompt(e.to_string()))?;
            first = false;

            let key = match event::read().map_err(|e| ProcError::Prompt(e.to_string()))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key,
                _ => continue,
            };
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    cursor_idx = cursor_idx.checked_sub(1).unwrap_or(options.len() - 1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    cursor_idx = (cursor_idx + 1) % options.len();
                }
                KeyCode::Char(' ') => selected[cursor_idx] = !selected[cursor_idx],
                KeyCode::Enter => break true,
                KeyCode::Esc | KeyCode::Char('q') => break false,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    break false
                }
                _ => {}
            }
            // Keep the cursor inside the visible window.
            if cursor_idx < offset {
                offset = cursor_idx;
            } else if cursor_idx >= offset + page {
                offset = cursor_idx - page + 1;
            }
        };

        clear_frame(&mut stdout, page).map_err(|e| ProcError::Prompt(e.to_string()))?;
        if !confirmed {
            return Err(ProcError::Prompt("selection aborted".to_string()));
        }
        Ok(selected
            .iter()
            .enumerate()
            .filter_map(|(idx, &keep)| keep.then_some(idx))
            .collect())
    }
}

#[allow(clippy::too_many_arguments)]
fn draw(
    stdout: &mut io::Stdout,
    message: &str,
    options: &[String],
    selected: &[bool],
    cursor_idx: usize,
    offset: usize,
    page: usize,
    first: bool,
) -> io::Result<()> {
    if !first {
        rewind_frame(stdout, page)?;
    }
    queue!(
        stdout,
        cursor::MoveToColumn(0),
        Print(format!(
            "{message} [space toggles, enter confirms, esc aborts]\r\n"
        ))
    )?;
    for (idx, option) in options.iter().enumerate().skip(offset).take(page) {
        let pointer = if idx == cursor_idx { '>' } else { ' ' };
        let mark = if selected[idx] { 'x' } else { ' ' };
        queue!(stdout, Print(format!("{pointer} [{mark}] {option}\r\n")))?;
    }
    stdout.flush()
}

fn rewind_frame(stdout: &mut io::Stdout, page: usize) -> io::Result<()> {
    queue!(
        stdout,
        cursor::MoveUp((1 + page) as u16),
        cursor::MoveToColumn(0),
        Clear(ClearType::FromCursorDown),
    )
}

fn clear_frame(stdout: &mut io::Stdout, page: usize) -> io::Result<()> {
    rewind_frame(stdout, page)?;
    stdout.flush()
}
