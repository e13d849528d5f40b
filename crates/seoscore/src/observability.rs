//! Logging setup for the CLI.
//!
//! Two sinks: a compact human layer on stderr (stdout carries reports and
//! the MCP protocol) and a JSONL file layer written through a non-blocking
//! `tracing-appender` worker.
//!
//! File location, highest precedence first:
//! 1. `SEOSCORE_LOG_PATH` (exact file, never rotated)
//! 2. `SEOSCORE_LOG_DIR` (daily rotation)
//! 3. `log_dir` from configuration (daily rotation)
//! 4. `<platform data dir>/seoscore/logs` (daily rotation)

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "SEOSCORE_LOG_PATH";
const LOG_DIR_ENV: &str = "SEOSCORE_LOG_DIR";
const LOG_FILE_PREFIX: &str = "seoscore.jsonl";

/// Where the JSONL log goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// A single file, appended to.
    File(PathBuf),
    /// A directory with daily-rotated files.
    Directory(PathBuf),
    /// No file sink (no platform data directory available).
    Disabled,
}

/// Resolved observability settings.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Destination for the JSONL log.
    pub target: LogTarget,
}

impl ObservabilityConfig {
    /// Resolve the log target from the environment, falling back to the
    /// configured directory and then the platform default.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let target = if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
            LogTarget::File(path)
        } else if let Some(dir) = env_dir
            .filter(|d| !d.as_os_str().is_empty())
            .or(config_dir)
            .or_else(default_log_dir)
        {
            LogTarget::Directory(dir)
        } else {
            LogTarget::Disabled
        };
        Self { target }
    }
}

fn default_log_dir() -> Option<PathBuf> {
    seoscore_core::config::user_data_local_dir().map(|dir| dir.join("logs").into_std_path_buf())
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` forces `error`, `-v` raises to
/// `debug`, `-vv` to `trace`, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; hold it for the
/// lifetime of the process. A file sink that cannot be opened is skipped
/// so a read-only data directory never blocks the CLI.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match open_appender(&config.target) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn open_appender(target: &LogTarget) -> Option<tracing_appender::rolling::RollingFileAppender> {
    match target {
        LogTarget::File(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let dir = dir.unwrap_or_else(|| Path::new("."));
            let name = path.file_name()?;
            ensure_dir(dir).then(|| tracing_appender::rolling::never(dir, name))
        }
        LogTarget::Directory(dir) => ensure_dir(dir)
            .then(|| tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)),
        LogTarget::Disabled => None,
    }
}

fn ensure_dir(dir: &Path) -> bool {
    match std::fs::create_dir_all(dir) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("warning: log directory {} unavailable: {err}", dir.display());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::from("/tmp/x.jsonl")),
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/cfg")),
        );
        assert_eq!(cfg.target, LogTarget::File(PathBuf::from("/tmp/x.jsonl")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let cfg = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/cfg")),
        );
        assert_eq!(cfg.target, LogTarget::Directory(PathBuf::from("/tmp/env")));
    }

    #[test]
    fn config_dir_used_when_env_empty() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::new()),
            Some(PathBuf::new()),
            Some(PathBuf::from("/tmp/cfg")),
        );
        assert_eq!(cfg.target, LogTarget::Directory(PathBuf::from("/tmp/cfg")));
    }

    #[test]
    fn appender_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("logs");
        assert!(open_appender(&LogTarget::Directory(dir.clone())).is_some());
        assert!(dir.is_dir());
    }

    #[test]
    fn disabled_target_has_no_appender() {
        assert!(open_appender(&LogTarget::Disabled).is_none());
    }
}
