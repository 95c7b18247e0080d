use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use sheetsync::cli::{Arguments, ExitStatus};
use tracing::Level;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match sheetsync::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Log to stderr so stdout stays the command report.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}
