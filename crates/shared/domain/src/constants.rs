//! Shared constants for the Rollcall client.

/// Delay of the simulated submission in milliseconds.
///
/// The client has no backend; a submission "completes" after this pause.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

/// Default window title.
pub const DEFAULT_WINDOW_TITLE: &str = "Rollcall";

/// Default window size.
pub const DEFAULT_WINDOW_WIDTH: f64 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 720.0;

/// Length of generated registration receipt identifiers.
pub const RECEIPT_ID_LENGTH: usize = 12;
