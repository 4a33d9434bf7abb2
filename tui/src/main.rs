use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

/// Terminal deep-dive browser for a benchmark task-instance dataset.
#[derive(Debug, Parser)]
#[command(name = "deepdive", version)]
struct Cli {
    /// Path to the dataset: a JSON array of task instance records.
    dataset: PathBuf,

    /// Append `RUST_LOG`-filtered logs to this file. The terminal is
    /// owned by the UI, so there is no logging without it.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Keep the guard alive for the process lifetime so buffered log
    // lines are flushed on exit.
    let _log_guard = match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => None,
    };

    deepdive_tui::run_main(&cli.dataset)
}
