//! CLI entry point for the GTFS integrity checker.
//!
//! Analyzes one or more GTFS dataset directories for dangling references and
//! coverage gaps, printing a per-dataset report and an overall summary.

use anyhow::Result;
use clap::Parser;
use gtfs_integrity::analyzer::run;
use gtfs_integrity::config::RunConfig;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_subscriber::{
    EnvFilter, Layer, fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gtfs_integrity")]
#[command(about = "Checks referential integrity of GTFS datasets", long_about = None)]
struct Cli {
    /// Dataset directories to analyze; when omitted, GTFS_DATASETS or the
    /// built-in default list is used
    #[arg(value_name = "DATASET_DIR")]
    datasets: Vec<PathBuf>,

    /// Also print each dataset's issue report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file. Reports go to
    // stdout, diagnostics to stderr, so the two streams stay separable.
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gtfs_integrity.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gtfs_integrity.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = RunConfig::resolve(cli.datasets, cli.json);

    run(&config)
}
