use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rosterscan::workflow;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Convert a roster document (PDF or delimited text) into a CSV of
/// surname, given name and birth date.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Roster document to read (.pdf, or delimited text)
    input: PathBuf,

    /// CSV file to write
    output: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // ─── init logging ────────────────────────────────────────────────
    let default_filter = if args.verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt::Subscriber::builder().with_env_filter(env).init();

    match workflow::convert(&args.input, &args.output) {
        Ok(path) => {
            info!(path = %path.display(), "conversion complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let err = anyhow::Error::from(err);
            error!("conversion failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}
