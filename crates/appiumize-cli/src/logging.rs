//! Tracing setup.
//!
//! Logs always go to stderr: stdout carries converted code, JSON output and
//! the tool server's protocol stream. The server additionally mirrors its
//! log into a timestamped file.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Level after applying `-v` flags to the configured base level
///
/// Each `-v` moves one step towards `trace`.
pub fn effective_level(base: &str, verbose: u8) -> &'static str {
    let base = base.to_ascii_lowercase();
    let index = LEVELS.iter().position(|l| *l == base).unwrap_or(2);
    LEVELS[index.saturating_sub(verbose as usize)]
}

/// `appiumize-<UTC timestamp>.log`, with `:` replaced so the name is valid
/// on every filesystem
pub fn log_file_name(now: DateTime<Utc>) -> String {
    let stamp = now.to_rfc3339_opts(SecondsFormat::Millis, true).replace(':', "-");
    format!("appiumize-{stamp}.log")
}

/// Create the log directory and open a fresh log file in it
fn open_log_file(dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = dir.join(log_file_name(Utc::now()));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    Ok((path, file))
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `level`. When `log_dir` is given and the
/// file cannot be created, a warning goes to stderr and logging continues
/// without the file. Returns the log file path, if any.
pub fn init(level: &str, verbose: u8, log_dir: Option<&Path>) -> Result<Option<PathBuf>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(effective_level(level, verbose)));

    let log_file = match log_dir.map(open_log_file) {
        Some(Ok(opened)) => Some(opened),
        Some(Err(e)) => {
            eprintln!("Warning: {e:#}; logging to stderr only");
            None
        }
        None => None,
    };
    let log_path = log_file.as_ref().map(|(path, _)| path.clone());

    let file_layer = log_file.map(|(_, file)| {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(log_path)
}
