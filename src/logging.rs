//! Diagnostic logging setup
//!
//! Stdout carries the resolved version, so logs go to stderr unless a log
//! file is given.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Filter used when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Builds the log filter from an explicit level, then `RUST_LOG`, then the default
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    }
}

/// Installs the global subscriber
///
/// The returned guard flushes the file writer on drop and must be held
/// until the program exits.
pub fn init(
    level: Option<&str>,
    format: LogFormat,
    log_file: Option<&Path>,
) -> std::io::Result<Option<WorkerGuard>> {
    let (writer, guard) = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(writer)
        .with_ansi(log_file.is_none());

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    Ok(guard)
}
