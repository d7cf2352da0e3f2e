//! Tracing subscriber setup.
//!
//! Filter priority (highest to lowest):
//! 1. `GROUPLIST_LOG` env var (per-target directives, e.g. `grouplist_store=debug`)
//! 2. `RUST_LOG` env var
//! 3. `--log-level` flag

use crate::types::LogLevel;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Console commands
    Stderr,
    /// Interactive mode with `--log-file`
    File(PathBuf),
    /// Interactive mode without a log file; stderr would draw over the UI
    Silent,
}

impl LogTarget {
    pub fn for_interactive(log_file: Option<PathBuf>) -> Self {
        log_file.map_or(LogTarget::Silent, LogTarget::File)
    }

    pub fn for_console(log_file: Option<PathBuf>) -> Self {
        log_file.map_or(LogTarget::Stderr, LogTarget::File)
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let filter = build_env_filter(level);
    let registry = tracing_subscriber::registry().with(filter);

    match target {
        LogTarget::Stderr => {
            let stderr_is_tty = std::io::stderr().is_terminal();
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(stderr_is_tty)
                .without_time()
                .compact();
            let _ = registry.with(layer).try_init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true);
            let _ = registry.with(layer).try_init();
        }
        LogTarget::Silent => {
            let layer = fmt::layer().with_writer(std::io::sink);
            let _ = registry.with(layer).try_init();
        }
    }

    Ok(())
}

fn build_env_filter(level: LogLevel) -> EnvFilter {
    if let Ok(directives) = std::env::var("GROUPLIST_LOG") {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(level.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_target_is_silent_without_file() {
        assert_eq!(LogTarget::for_interactive(None), LogTarget::Silent);
        assert_eq!(
            LogTarget::for_interactive(Some(PathBuf::from("grouplist.log"))),
            LogTarget::File(PathBuf::from("grouplist.log"))
        );
    }

    #[test]
    fn test_console_target_defaults_to_stderr() {
        assert_eq!(LogTarget::for_console(None), LogTarget::Stderr);
    }
}
