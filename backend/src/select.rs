//! Selection resolution: decide which candidates get signalled, and how.

use crate::types::{DisplayRow, ProcError};

/// Terminal dimensions assumed when the real ones cannot be determined.
pub const FALLBACK_TERM_SIZE: (u16, u16) = (80, 24);

/// Prompt message shown above the candidate list.
pub const SELECT_MESSAGE: &str = "Select processes to kill:";

/// Interactive multi-select capability, injected by the frontend.
///
/// Renders `options`, with every entry pre-selected when
/// `default_selected` is set, and returns the indices the user kept.
pub trait SelectPrompt {
    fn multi_select(
        &self,
        message: &str,
        options: &[String],
        default_selected: bool,
        page_size: usize,
    ) -> Result<Vec<usize>, ProcError>;
}

/// How a candidate set turns into a kill list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Kill every candidate without prompting: auto-confirm was given, or
    /// there is only one candidate and prompting would be pointless.
    KillAll,
    /// More than one candidate and no auto-confirm: the user decides.
    PromptUser,
}

pub fn selection_mode(candidates: usize, auto_confirm: bool) -> SelectionMode {
    if auto_confirm || candidates <= 1 {
        SelectionMode::KillAll
    } else {
        SelectionMode::PromptUser
    }
}

/// Prompt page size for a terminal `height` rows tall: use the full height
/// minus prompt and padding, never less than one row.
pub fn page_size_for(height: u16) -> usize {
    (height as i32 - 4).max(1) as usize
}

/// Run the interactive prompt over the rows and map the chosen entries
/// back to pids through the ordered pairing.
///
/// All rows start pre-selected, so a no-op confirmation kills everything.
/// A prompt failure is fatal to the run.
pub fn select_interactively(
    rows: &[DisplayRow],
    term_size: Option<(u16, u16)>,
    prompt: &dyn SelectPrompt,
) -> Result<Vec<i32>, ProcError> {
    let (_, height) = term_size.unwrap_or(FALLBACK_TERM_SIZE);
    let options: Vec<String> = rows.iter().map(|row| row.text.clone()).collect();
    let chosen = prompt.multi_select(SELECT_MESSAGE, &options, true, page_size_for(height))?;
    Ok(chosen
        .into_iter()
        .filter_map(|idx| rows.get(idx))
        .map(|row| row.pid)
        .collect())
}
