//! Candidate discovery: find pids whose command lines match a pattern.

use crate::types::ProcError;
use std::process::Command;

/// External pid discovery service: pattern in, whitespace-separated pid
/// list out. Zero matches and failure to execute are both `Err`.
pub trait ProcessDiscovery {
    fn discover(&self, pattern: &str) -> Result<String, ProcError>;
}

/// `pgrep -f` backed discovery, matching against full command lines.
#[derive(Debug, Default)]
pub struct PgrepDiscovery;

impl ProcessDiscovery for PgrepDiscovery {
    fn discover(&self, pattern: &str) -> Result<String, ProcError> {
        let output = Command::new("pgrep")
            .arg("-f")
            .arg(pattern)
            .output()
            .map_err(|e| ProcError::Discovery(format!("failed to run pgrep: {e}")))?;
        if !output.status.success() {
            return Err(ProcError::Discovery(format!(
                "pgrep exited with {}",
                output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Resolve a pattern into candidate pids, in the order the service
/// returned them.
///
/// A discovery error is the same outcome as zero matches: an empty set.
/// Tokens that fail integer parse are discarded, and the caller's own pid
/// is excluded so the tool never signals itself.
pub fn resolve_candidates(
    discovery: &dyn ProcessDiscovery,
    pattern: &str,
    own_pid: i32,
) -> Vec<i32> {
    let raw = match discovery.discover(pattern) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::debug!("treating discovery failure as no matches: {err}");
            return Vec::new();
        }
    };
    raw.split_whitespace()
        .filter_map(|tok| match tok.parse::<i32>() {
            Ok(pid) => Some(pid),
            Err(_) => {
                tracing::debug!("discarding unparseable pid token '{tok}'");
                None
            }
        })
        .filter(|pid| *pid != own_pid)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDiscovery(Result<&'static str, &'static str>);

    impl ProcessDiscovery for FixedDiscovery {
        fn discover(&self, _pattern: &str) -> Result<String, ProcError> {
            self.0
                .map(str::to_string)
                .map_err(|e| ProcError::Discovery(e.to_string()))
        }
    }

    #[test]
    fn parses_whitespace_separated_pids_in_order() {
        let discovery = FixedDiscovery(Ok("100\n200\n300\n"));
        assert_eq!(resolve_candidates(&discovery, "myproc", 999), vec![100, 200, 300]);
    }

    #[test]
    fn discovery_failure_is_empty_not_fatal() {
        let discovery = FixedDiscovery(Err("pgrep exited with exit status: 1"));
        assert!(resolve_candidates(&discovery, "nope", 999).is_empty());
    }

    #[test]
    fn excludes_own_pid() {
        let discovery = FixedDiscovery(Ok("100 999 300"));
        assert_eq!(resolve_candidates(&discovery, "ka", 999), vec![100, 300]);
    }

    #[test]
    fn discards_unparseable_tokens() {
        let discovery = FixedDiscovery(Ok("100 garbage 300"));
        assert_eq!(resolve_candidates(&discovery, "myproc", 999), vec![100, 300]);
    }
}
