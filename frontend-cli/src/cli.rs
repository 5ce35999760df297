//! Command-line parsing, including bare `-<N>` signal tokens.

use backend::ProcError;
use clap::{CommandFactory, Parser};

/// SIGTERM, sent when no signal is given.
pub const DEFAULT_SIGNAL: &str = "15";

/// Interactively kill processes matching a name pattern.
#[derive(Parser, Debug)]
#[command(name = "ka")]
#[command(override_usage = "ka [options] process_name")]
#[command(about = "Interactively kill processes matching a name pattern")]
pub struct Cli {
    /// Signal to send (e.g., -s 9 for SIGKILL)
    #[arg(short = 's', value_name = "SIGNAL")]
    pub signal: Option<String>,

    /// Assume yes; kill all matching processes without confirmation
    #[arg(short = 'y')]
    pub yes: bool,

    /// Pattern matched against full process command lines
    #[arg(value_name = "process_name")]
    pub pattern: Option<String>,
}

/// Everything the rest of the run needs from the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillRequest {
    pub pattern: String,
    pub signal: String,
    pub auto_confirm: bool,
}

/// Split bare `-<N>` signal tokens out of argv before clap sees it.
///
/// The last bare token wins and overrides any `-s` value. A dash token
/// that is neither a known flag nor an integer is an invalid signal.
pub fn extract_bare_signal(
    args: Vec<String>,
) -> Result<(Vec<String>, Option<String>), ProcError> {
    let mut rest = Vec::with_capacity(args.len());
    let mut signal = None;
    let mut iter = args.into_iter();
    while let Some(tok) = iter.next() {
        if tok == "-s" {
            rest.push(tok);
            if let Some(value) = iter.next() {
                rest.push(value);
            }
            continue;
        }
        if !tok.starts_with('-')
            || tok == "-y"
            || tok == "-h"
            || tok == "--help"
            || tok.starts_with("-s=")
        {
            rest.push(tok);
            continue;
        }
        match tok[1..].parse::<i32>() {
            Ok(num) => signal = Some(num.to_string()),
            Err(_) => return Err(ProcError::InvalidSignal(tok)),
        }
    }
    Ok((rest, signal))
}

/// Combine the clap result with any bare signal token. `None` means no
/// pattern was given, which is a usage error for the caller to report.
pub fn resolve_request(cli: Cli, bare_signal: Option<String>) -> Option<KillRequest> {
    let pattern = cli.pattern?;
    Some(KillRequest {
        pattern,
        signal: bare_signal
            .or(cli.signal)
            .unwrap_or_else(|| DEFAULT_SIGNAL.to_string()),
        auto_confirm: cli.yes,
    })
}

/// Parse raw argv tokens (program name excluded) into a request.
///
/// clap handles `-h`/`--help` and unknown options itself, exiting the
/// process; an invalid signal token is returned as an error.
pub fn parse_args(tokens: Vec<String>) -> Result<Option<KillRequest>, ProcError> {
    let (rest, bare_signal) = extract_bare_signal(tokens)?;
    let cli = Cli::parse_from(std::iter::once("ka".to_string()).chain(rest));
    Ok(resolve_request(cli, bare_signal))
}

pub fn print_usage() {
    let _ = Cli::command().print_help();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &[&str]) -> Result<Option<KillRequest>, ProcError> {
        let tokens = tokens.iter().map(|t| t.to_string()).collect();
        let (rest, bare_signal) = extract_bare_signal(tokens)?;
        let cli = Cli::try_parse_from(std::iter::once("ka".to_string()).chain(rest))
            .expect("clap parse");
        Ok(resolve_request(cli, bare_signal))
    }

    #[test]
    fn defaults_to_sigterm() {
        let request = parse(&["myproc"]).unwrap().unwrap();
        assert_eq!(request.pattern, "myproc");
        assert_eq!(request.signal, "15");
        assert!(!request.auto_confirm);
    }

    #[test]
    fn explicit_signal_option() {
        let request = parse(&["-s", "9", "myproc"]).unwrap().unwrap();
        assert_eq!(request.signal, "9");
    }

    #[test]
    fn bare_token_sets_signal_anywhere_in_argv() {
        let request = parse(&["-9", "myproc", "-y"]).unwrap().unwrap();
        assert_eq!(request.signal, "9");
        assert_eq!(request.pattern, "myproc");
        assert!(request.auto_confirm);
    }

    #[test]
    fn bare_token_overrides_signal_option() {
        let request = parse(&["-s", "9", "myproc", "-12"]).unwrap().unwrap();
        assert_eq!(request.signal, "12");
    }

    #[test]
    fn last_bare_token_wins() {
        let request = parse(&["-3", "-9", "myproc"]).unwrap().unwrap();
        assert_eq!(request.signal, "9");
    }

    #[test]
    fn malformed_dash_token_is_an_invalid_signal() {
        let err = parse(&["-abc", "myproc"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid signal: -abc");
    }

    #[test]
    fn missing_pattern_is_a_usage_error() {
        assert_eq!(parse(&[]).unwrap(), None);
        assert_eq!(parse(&["-y"]).unwrap(), None);
    }
}
