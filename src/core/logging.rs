//! Logging
//!
//! `tracing` subscriber setup for the native binary:
//! - daily-rolling JSON log file in the app data directory
//! - pretty stdout output, except in TUI mode where the terminal is taken
//! - `log` records bridged into `tracing`

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const APP_DIR: &str = "timeless-trips";
const LOG_FILE: &str = "timeless-trips.log";

/// Directory holding the rolling log files.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR).join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn file_writer() -> (NonBlocking, WorkerGuard, PathBuf) {
    let log_dir = log_dir();
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    (non_blocking, guard, log_dir)
}

fn bridge_log() {
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }
}

/// Initialize logging to stdout and the log file.
///
/// Returns a `WorkerGuard` which must be kept alive for the duration of the
/// application so buffered records are flushed on shutdown.
pub fn init() -> WorkerGuard {
    let (non_blocking, guard, log_dir) = file_writer();
    let filter = env_filter();

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(filter.clone());

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .pretty()
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .init();

    bridge_log();

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE)
    );

    guard
}

/// Initialize logging for TUI mode.
///
/// Same file output as [`init()`] but nothing on stdout, since ratatui owns
/// the terminal while in raw/alternate-screen mode.
pub fn init_tui() -> WorkerGuard {
    let (non_blocking, guard, _) = file_writer();

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter());

    // No stdout layer
    tracing_subscriber::registry().with(file_layer).init();

    bridge_log();

    guard
}
