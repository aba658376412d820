//! Event log setup
//!
//! The teller emits one `tracing` event per submission. This module installs
//! the subscriber that collects them: events always go to stderr and, when a
//! log file is configured, are also appended to that file (no ANSI colours)
//! through a non-blocking writer.

use crate::types::LedgerError;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Default event filter
pub const DEFAULT_FILTER: &str = "info";

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `info` or `warn,atm_ledger=debug`
    pub filter: String,

    /// Log file to append to in addition to stderr
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: DEFAULT_FILTER.to_string(),
            file: None,
        }
    }
}

/// Parse the filter directives of `config`
pub fn build_filter(config: &LogConfig) -> Result<EnvFilter, LedgerError> {
    EnvFilter::try_new(&config.filter).map_err(|e| {
        LedgerError::invalid_config(format!("log filter '{}': {}", config.filter, e))
    })
}

/// Split a log file path into the directory and file name the appender wants
fn split_log_path(path: &Path) -> Result<(&Path, &Path), LedgerError> {
    let name = path.file_name().ok_or_else(|| {
        LedgerError::invalid_config(format!("log file '{}' has no file name", path.display()))
    })?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    Ok((dir, Path::new(name)))
}

/// Build the subscriber described by `config`
///
/// Every event is written to `console`; with a log file configured it is
/// appended there as well. The returned guard flushes the file writer on
/// drop.
pub fn build_subscriber<W>(
    config: &LogConfig,
    console: W,
) -> Result<(impl Subscriber + Send + Sync + 'static, Option<WorkerGuard>), LedgerError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = build_filter(config)?;

    let (file_layer, guard) = match &config.file {
        Some(path) => {
            let (dir, name) = split_log_path(path)?;
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer().with_writer(console);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer);

    Ok((subscriber, guard))
}

/// Install the global subscriber, logging to stderr and the optional file
///
/// Keep the returned guard alive for as long as events should reach the
/// file.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, LedgerError> {
    let (subscriber, guard) = build_subscriber(config, std::io::stderr)?;

    subscriber
        .try_init()
        .map_err(|e| LedgerError::invalid_config(format!("logging already initialised: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[rstest]
    #[case("info")]
    #[case("warn")]
    #[case("info,atm_ledger=debug")]
    fn test_build_filter_accepts_directives(#[case] filter: &str) {
        let config = LogConfig {
            filter: filter.to_string(),
            file: None,
        };
        assert!(build_filter(&config).is_ok());
    }

    #[rstest]
    #[case("atm.log", ".", "atm.log")]
    #[case("logs/atm.log", "logs", "atm.log")]
    #[case("/var/log/atm/atm.log", "/var/log/atm", "atm.log")]
    fn test_split_log_path(#[case] path: &str, #[case] dir: &str, #[case] name: &str) {
        let (d, n) = split_log_path(Path::new(path)).unwrap();
        assert_eq!(d, Path::new(dir));
        assert_eq!(n, Path::new(name));
    }

    /// In-memory console writer shared with the test body
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuf {
        type Writer = SharedBuf;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_console_only_without_log_file() {
        let console = SharedBuf::default();
        let (subscriber, guard) = build_subscriber(&LogConfig::default(), console.clone()).unwrap();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(account = "user1", "Deposit succeeded");
        });

        assert!(guard.is_none());
        assert!(console.contents().contains("Deposit succeeded"));
    }

    #[test]
    fn test_log_file_receives_events_alongside_console() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atm.log");
        let config = LogConfig {
            filter: DEFAULT_FILTER.to_string(),
            file: Some(path.clone()),
        };
        let console = SharedBuf::default();
        let (subscriber, guard) = build_subscriber(&config, console.clone()).unwrap();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(account = "user1", "Deposit succeeded");
            tracing::debug!("filtered out");
        });
        // Flushes the non-blocking file writer
        drop(guard);

        let console = console.contents();
        let file = std::fs::read_to_string(&path).unwrap();
        assert!(console.contains("Deposit succeeded"));
        assert!(file.contains("Deposit succeeded"));
        assert!(file.contains("account=\"user1\""));
        assert!(!file.contains("filtered out"));
        assert!(!file.contains('\u{1b}'));
    }

    #[test]
    fn test_split_log_path_rejects_directory_only() {
        let result = split_log_path(Path::new("/"));
        assert!(matches!(result, Err(LedgerError::InvalidConfig { .. })));
    }
}
