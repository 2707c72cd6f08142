//! Logging setup for the CLI entry point.

use std::fs::File;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::domain::AppError;

/// Console log levels accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    #[value(name = "NOTSET")]
    NotSet,
    #[value(name = "DEBUG")]
    Debug,
    #[default]
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "CRITICAL")]
    Critical,
}

impl LogLevel {
    pub fn filter(&self) -> LevelFilter {
        match self {
            LogLevel::NotSet => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}

/// Where and how verbosely to log, resolved once at start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub console_level: LogLevel,
    /// Second sink recording everything at DEBUG and above.
    pub log_file: Option<PathBuf>,
}

impl LogSettings {
    pub fn new(console_level: LogLevel, log_file: Option<PathBuf>) -> Self {
        Self { console_level, log_file }
    }

    /// Fill in a timestamped file under the temp dir when file logging is
    /// requested by configuration but no path was given.
    pub fn with_default_file(mut self, enabled: bool) -> Self {
        if enabled && self.log_file.is_none() {
            self.log_file = Some(default_log_file(&std::env::temp_dir()));
        }
        self
    }

    /// Install the global subscriber. `RUST_LOG` overrides the console level.
    pub fn install(&self) -> Result<(), AppError> {
        let console_filter = EnvFilter::builder()
            .with_default_directive(self.console_level.filter().into())
            .from_env_lossy();
        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .without_time()
            .with_target(false)
            .with_filter(console_filter);

        let file_layer = match &self.log_file {
            Some(path) => {
                let file = File::create(path).map_err(|e| {
                    AppError::config_error(format!(
                        "Cannot open log file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Some(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_file(true)
                        .with_line_number(true)
                        .with_filter(LevelFilter::DEBUG),
                )
            }
            None => None,
        };

        tracing_subscriber::registry()
            .with(console)
            .with(file_layer)
            .try_init()
            .map_err(|e| AppError::config_error(format!("Failed to initialize logging: {}", e)))?;

        if let Some(path) = &self.log_file {
            tracing::info!("log file: {}", path.display());
        }
        Ok(())
    }
}

fn default_log_file(dir: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S");
    dir.join(format!("stencil-{}.log", stamp))
}
