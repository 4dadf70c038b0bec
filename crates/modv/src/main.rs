//! Modv CLI - module dependency chains from the command line.
//!
//! Pipe `go mod graph` output in; get the branch map (and optionally a dot
//! graph) out.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use modv::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // The edge list only ever arrives on a pipe; an interactive stdin means
    // the dumper was not wired up.
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("{}: no module graph on stdin", "error".red().bold());
        eprintln!();
        eprintln!("Usage: go mod graph | modv [TARGET] [OUT_DIR] [--full] [--dot PATH]");
        return ExitCode::FAILURE;
    }

    match cli::run(&cli, stdin.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
