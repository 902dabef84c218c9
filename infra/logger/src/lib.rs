//! # Logger
//!
//! A centralized logging utility for the project.
//! It provides a unified way to configure console and file logging with
//! rotation, non-blocking I/O, and environment-based filtering.
//!
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"rollcall=debug"`); the `RUST_LOG` environment variable still
//!   overrides everything.
//! * File output is optional. When enabled, lines go through a non-blocking
//!   writer; hold the returned [`LoggerGuard`] for the process lifetime or
//!   the tail of the log is lost.
//!
//! ## Example
//!
//! ```rust,no_run
//! # use rollcall_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Keeps the non-blocking file writer alive.
///
/// Dropping the guard flushes and stops the background writer thread.
pub struct LoggerGuard {
    _worker: Option<WorkerGuard>,
}

impl std::fmt::Debug for LoggerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerGuard").finish_non_exhaustive()
    }
}

/// Entry point; see [`Logger::builder`].
#[derive(Debug)]
pub struct Logger;

impl Logger {
    /// Starts configuring a logger for the named application.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            file: None,
        }
    }
}

#[derive(Debug)]
struct FileOutput {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileOutput>,
}

impl LoggerBuilder {
    /// Enables console logging.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `rollcall=debug,wry=info`).
    ///
    /// `RUST_LOG` still overrides this; it is a programmatic default.
    /// Invalid directives cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables daily-rotated file logging under `dir`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn file(mut self, dir: impl AsRef<Path>) -> Self {
        self.file = Some(FileOutput {
            dir: dir.as_ref().to_path_buf(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// Configures the log file rotation strategy. No effect without [`Self::file`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = &mut self.file {
            file.rotation = rotation;
        }
        self
    }

    /// Configures the maximum number of log files to keep. No effect without [`Self::file`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = &mut self.file {
            file.max_files = max;
        }
        self
    }

    /// Switches file output to JSON lines. No effect without [`Self::file`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        if let Some(file) = &mut self.file {
            file.json = true;
        }
        self
    }

    /// Installs the global tracing subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] if the env filter does not parse
    ///   or neither console nor file output is enabled.
    /// * [`LoggerError::Appender`] / [`LoggerError::Directory`] for file setup failures.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<LoggerGuard, LoggerError> {
        if !self.console && self.file.is_none() {
            return Err(LoggerError::InvalidConfiguration(
                "at least one of console or file output must be enabled".to_owned(),
            ));
        }

        let filter = self.build_filter()?;
        let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = vec![filter.boxed()];

        if self.console {
            layers.push(fmt::layer().with_target(true).boxed());
        }

        let mut worker = None;
        if let Some(file) = &self.file {
            fs::create_dir_all(&file.dir)?;

            let appender = RollingFileAppender::builder()
                .rotation(file.rotation.clone())
                .filename_prefix(self.name.clone())
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(file.max_files)
                .build(&file.dir)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            worker = Some(guard);

            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            layers.push(if file.json { layer.json().boxed() } else { layer.boxed() });
        }

        tracing_subscriber::registry().with(layers).try_init()?;

        Ok(LoggerGuard { _worker: worker })
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggerError> {
        // RUST_LOG wins; the configured directives are the fallback.
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }

        let directives = self
            .env_filter
            .clone()
            .unwrap_or_else(|| self.level.to_string().to_lowercase());

        EnvFilter::builder()
            .parse(&directives)
            .map_err(|e| LoggerError::InvalidConfiguration(format!("{directives:?}: {e}")))
    }
}
