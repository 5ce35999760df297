//! Data types and error definitions for pattern-based process killing.

use thiserror::Error;

/// One running process matched by the search pattern.
#[derive(Debug, Clone)]
pub struct ProcessCandidate {
    pub pid: i32,
    pub name: String,
    pub cmdline: String,
}

/// One formatted, selectable line paired with the pid it stands for.
///
/// Rows and candidates are in 1:1 correspondence; selection is resolved by
/// index into the ordered row list, never by display text.
#[derive(Debug, Clone)]
pub struct DisplayRow {
    pub pid: i32,
    pub text: String,
}

/// The resolved set of pids to signal. Built once, consumed once.
///
/// The signal is kept as the raw token from the command line so that an
/// unparseable value surfaces per pid at delivery time.
#[derive(Debug, Clone)]
pub struct SelectionPlan {
    pub signal: String,
    pub pids: Vec<i32>,
}

/// Errors that can occur while resolving or signalling processes.
#[derive(Error, Debug)]
pub enum ProcError {
    #[error("Invalid signal: {0}")]
    InvalidSignal(String),
    #[error("discovery failed: {0}")]
    Discovery(String),
    #[error("Failed to get process information: {0}")]
    Metadata(String),
    #[error("Selection prompt failed: {0}")]
    Prompt(String),
    #[error("Failed to kill process {0}: {1}")]
    Signal(i32, String),
}
