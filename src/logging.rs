use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Clone, Debug)]
pub enum LogSink {
    Stderr,
    /// The TUI owns the terminal, so it logs to a file.
    File(PathBuf),
}

pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("session-inspector.log")
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("create parent directories for log path {}", path.display())
            })?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging(sink: &LogSink) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_target(true);
    let res = match sink {
        LogSink::Stderr => builder
            .with_env_filter(env_filter("warn"))
            .with_writer(std::io::stderr)
            .try_init(),
        LogSink::File(path) => {
            let file = open_log_file(path)?;
            builder
                .with_env_filter(env_filter("info"))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    if let Err(err) = res {
        tracing::debug!("logging already initialized: {}", err);
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/logging_tests.rs"]
mod tests;
