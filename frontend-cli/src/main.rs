//! ka - interactively kill processes matching a name pattern.

use anyhow::{anyhow, Result};
use backend::{
    build_rows, dispatch, parse_metadata, resolve_candidates, select_interactively,
    selection_mode, FormatConfig, PgrepDiscovery, ProcessMetadata, PsMetadata, SelectionMode,
    SelectionPlan, SystemSignalSender, FALLBACK_TERM_SIZE,
};
use tracing_subscriber::EnvFilter;

mod cli;
mod prompt;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let request = match cli::parse_args(std::env::args().skip(1).collect()) {
        Ok(Some(request)) => request,
        Ok(None) => {
            cli::print_usage();
            std::process::exit(1);
        }
        Err(err) => return Err(anyhow!("{err}")),
    };
    run(&request)
}

fn run(request: &cli::KillRequest) -> Result<()> {
    let own_pid = std::process::id() as i32;
    let pids = resolve_candidates(&PgrepDiscovery, &request.pattern, own_pid);
    tracing::debug!("resolved {} candidate pid(s) for '{}'", pids.len(), request.pattern);
    if pids.is_empty() {
        println!("No processes found matching '{}'", request.pattern);
        return Ok(());
    }

    let selected = match selection_mode(pids.len(), request.auto_confirm) {
        SelectionMode::KillAll => pids.clone(),
        SelectionMode::PromptUser => {
            let term_size = crossterm::terminal::size().ok();
            let (width, _) = term_size.unwrap_or(FALLBACK_TERM_SIZE);

            let raw = PsMetadata.describe(&pids).map_err(|err| anyhow!("{err}"))?;
            let candidates = parse_metadata(&raw);
            if candidates.is_empty() {
                println!("No processes found matching '{}'", request.pattern);
                return Ok(());
            }

            let rows = build_rows(
                &candidates,
                &request.pattern,
                width as usize,
                &FormatConfig::default(),
            );
            select_interactively(&rows, term_size, &prompt::TerminalMultiSelect)
                .map_err(|err| anyhow!("{err}"))?
        }
    };

    let plan = SelectionPlan {
        signal: request.signal.clone(),
        pids: selected,
    };
    for outcome in dispatch(&SystemSignalSender, &plan) {
        match outcome.result {
            Ok(()) => println!("Killed process {}", outcome.pid),
            Err(err) => println!("{err}"),
        }
    }
    Ok(())
}
