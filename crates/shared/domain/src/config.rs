use crate::constants::{
    DEFAULT_SUBMIT_DELAY_MS, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_TITLE, DEFAULT_WINDOW_WIDTH,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level client configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub submission: SubmissionConfig,
    pub log: LogConfig,
}

/// Desktop window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Simulated submission configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Fixed delay standing in for a real request, in milliseconds.
    pub delay_ms: u64,
}

/// Logging configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level directive, e.g. `"info"` or `"rollcall=debug"`.
    pub filter: Option<String>,
    /// Directory for rolling log files. Console-only when absent.
    pub dir: Option<PathBuf>,
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_owned(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self { delay_ms: DEFAULT_SUBMIT_DELAY_MS }
    }
}
