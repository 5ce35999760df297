//! UI-agnostic pattern-based process killing library for Unix.
//!
//! Resolves a name pattern into candidate pids, formats them into
//! fixed-width highlighted rows, turns a selection into a signal plan and
//! dispatches it. Discovery, metadata, signal delivery and the interactive
//! prompt are injected capabilities; uses `nix` for the production signal
//! path.

mod discovery;
mod dispatch;
mod format;
mod metadata;
mod select;
mod types;

pub use discovery::{resolve_candidates, PgrepDiscovery, ProcessDiscovery};
pub use dispatch::{dispatch, KillOutcome, SignalSender, SystemSignalSender};
pub use format::{build_rows, cmd_column_width, highlight, sanitize, truncate, FormatConfig};
pub use metadata::{parse_metadata, ProcessMetadata, PsMetadata};
pub use select::{
    page_size_for, select_interactively, selection_mode, SelectPrompt, SelectionMode,
    FALLBACK_TERM_SIZE, SELECT_MESSAGE,
};
pub use types::{DisplayRow, ProcError, ProcessCandidate, SelectionPlan};
