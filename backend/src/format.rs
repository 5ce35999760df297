//! Fixed-width, highlighted display rows for candidate processes.

use crate::types::{DisplayRow, ProcessCandidate};

/// Column widths and emphasis markers for row composition, passed
/// explicitly rather than kept as module state.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    pub pid_width: usize,
    pub name_width: usize,
    pub min_cmd_width: usize,
    /// Fixed overhead of the column separators in the composed row.
    pub separator_overhead: usize,
    pub highlight_start: &'static str,
    pub highlight_end: &'static str,
    pub truncation_marker: &'static str,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            pid_width: 8,
            name_width: 25,
            min_cmd_width: 10,
            separator_overhead: 11,
            highlight_start: "\x1b[1;42;37m",
            highlight_end: "\x1b[0m",
            truncation_marker: "..",
        }
    }
}

/// Replace newline and carriage-return characters with spaces. They would
/// corrupt the line-oriented prompt display.
pub fn sanitize(s: &str) -> String {
    s.replace(['\n', '\r'], " ")
}

/// Truncate to `max_width` runes, ending in the marker when something was
/// cut. Widths of 3 or less are hard-truncated with no marker.
pub fn truncate(s: &str, max_width: usize, marker: &str) -> String {
    let runes: Vec<char> = s.chars().collect();
    if runes.len() <= max_width {
        return s.to_string();
    }
    if max_width > 3 {
        let kept = max_width - marker.chars().count();
        let mut out: String = runes[..kept].iter().collect();
        out.push_str(marker);
        out
    } else {
        runes[..max_width].iter().collect()
    }
}

/// Wrap every literal occurrence of `search` in the emphasis markers.
/// Plain substring replacement, not regex.
pub fn highlight(text: &str, search: &str, cfg: &FormatConfig) -> String {
    if search.is_empty() {
        return text.to_string();
    }
    text.replace(
        search,
        &format!("{}{}{}", cfg.highlight_start, search, cfg.highlight_end),
    )
}

/// Command column width for a terminal `term_width` columns wide, floored
/// so narrow terminals still get a usable display.
pub fn cmd_column_width(term_width: usize, cfg: &FormatConfig) -> usize {
    let free = term_width as isize
        - cfg.pid_width as isize
        - cfg.name_width as isize
        - cfg.separator_overhead as isize;
    free.max(cfg.min_cmd_width as isize) as usize
}

fn format_row(
    candidate: &ProcessCandidate,
    cmd_width: usize,
    pattern: &str,
    cfg: &FormatConfig,
) -> String {
    let name = sanitize(&candidate.name);
    let cmdline = sanitize(&candidate.cmdline);

    // Truncate first, highlight second: occurrences cut by the truncation
    // boundary are simply not highlighted.
    let name = truncate(&name, cfg.name_width, cfg.truncation_marker);
    let cmdline = truncate(&cmdline, cmd_width, cfg.truncation_marker);

    let name = highlight(&name, pattern, cfg);
    let cmdline = highlight(&cmdline, pattern, cfg);

    let row = format!(
        "{:<pid_w$}  {:<name_w$}  {:<cmd_w$}",
        candidate.pid,
        name,
        cmdline,
        pid_w = cfg.pid_width,
        name_w = cfg.name_width,
        cmd_w = cmd_width,
    );
    sanitize(&row)
}

/// Build one display row per candidate, in candidate order.
///
/// The fixed-width leading pid field keeps row text unique even when names
/// and command lines collide.
pub fn build_rows(
    candidates: &[ProcessCandidate],
    pattern: &str,
    term_width: usize,
    cfg: &FormatConfig,
) -> Vec<DisplayRow> {
    let cmd_width = cmd_column_width(term_width, cfg);
    candidates
        .iter()
        .map(|candidate| DisplayRow {
            pid: candidate.pid,
            text: format_row(candidate, cmd_width, pattern, cfg),
        })
        .collect()
}
