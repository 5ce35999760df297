//! Batch process metadata: pid, short name and full command line.

use crate::types::{ProcError, ProcessCandidate};
use std::process::Command;

/// External metadata service. One call describes the whole pid batch,
/// one line per process.
pub trait ProcessMetadata {
    fn describe(&self, pids: &[i32]) -> Result<String, ProcError>;
}

/// `ps -o pid=,comm=,args=` backed metadata.
#[derive(Debug, Default)]
pub struct PsMetadata;

impl ProcessMetadata for PsMetadata {
    fn describe(&self, pids: &[i32]) -> Result<String, ProcError> {
        let pid_list = pids
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let output = Command::new("ps")
            .args(["-o", "pid=,comm=,args=", "-p", pid_list.as_str()])
            .output()
            .map_err(|e| ProcError::Metadata(format!("failed to run ps: {e}")))?;
        if !output.status.success() {
            return Err(ProcError::Metadata(format!(
                "ps exited with {}",
                output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Parse one candidate per line, skipping malformed lines.
///
/// A line needs at least a pid, a name and one command field; the command
/// line is the remaining fields re-joined with single spaces.
pub fn parse_metadata(raw: &str) -> Vec<ProcessCandidate> {
    let mut candidates = Vec::new();
    for line in raw.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            tracing::debug!("skipping malformed metadata line '{line}'");
            continue;
        }
        let Ok(pid) = fields[0].parse::<i32>() else {
            tracing::debug!("skipping metadata line with bad pid '{}'", fields[0]);
            continue;
        };
        candidates.push(ProcessCandidate {
            pid,
            name: fields[1].to_string(),
            cmdline: fields[2..].join(" "),
        });
    }
    candidates
}
