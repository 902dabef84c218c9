//! # Attendance
//!
//! The attendance view embeds an external camera-based QR decoder. This crate
//! owns the collaborator contract: the decoder calls [`ScanFeed::on_scan`]
//! with decoded text (or nothing) and [`ScanFeed::on_error`] when it fails.
//! How decoding happens is none of our business.
//!
//! Decoded payloads are surfaced to the user verbatim, exactly once per
//! non-empty decode. Nothing is stored, nothing is sent anywhere, and no
//! further processing happens. Scan failures produce a fixed message that the
//! application routes into the same status slot used by form validation.

pub use tokio::sync::broadcast::error::RecvError;

use std::borrow::Cow;
use std::error::Error;
use tokio::sync::broadcast;
use tracing::{error, trace};

/// Alert stream handed out by [`ScanFeed::subscribe`].
pub type ScanReceiver = broadcast::Receiver<ScanAlert>;

/// Message shown when the scanner reports a failure.
pub const SCAN_ERROR_MESSAGE: &str = "Error scanning QR code.";

/// Buffer for pending alerts; scans arrive at human speed.
const DEFAULT_CAPACITY: usize = 16;

/// One user-visible scanning event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanAlert {
    /// A decoded payload, surfaced verbatim.
    Decoded(String),
    /// The scanner failed; the message belongs in the shared status slot.
    Failed(Cow<'static, str>),
}

/// Fan-out of scan alerts from the external decoder to the UI.
///
/// The feed is the callback surface handed to the scanning widget. Any
/// number of views may [`subscribe`](Self::subscribe); publishing with no
/// subscribers is fine, the alert is simply dropped.
#[derive(Debug, Clone)]
pub struct ScanFeed {
    tx: broadcast::Sender<ScanAlert>,
}

impl Default for ScanFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Opens a fresh alert stream for a view.
    #[must_use]
    pub fn subscribe(&self) -> ScanReceiver {
        self.tx.subscribe()
    }

    /// Decoder callback: surfaces `data` exactly once when it is non-empty.
    ///
    /// `None` and the empty string surface nothing; the widget fires this on
    /// every frame and most frames contain no code.
    pub fn on_scan(&self, data: Option<&str>) {
        match data {
            Some(text) if !text.is_empty() => {
                self.publish(ScanAlert::Decoded(text.to_owned()));
            },
            _ => {},
        }
    }

    /// Decoder callback: logs the failure and surfaces the fixed scan-error
    /// message. The error itself stays opaque.
    pub fn on_error(&self, err: &dyn Error) {
        error!(%err, "QR scanner reported a failure");
        self.publish(ScanAlert::Failed(SCAN_ERROR_MESSAGE.into()));
    }

    fn publish(&self, alert: ScanAlert) {
        if self.tx.send(alert).is_err() {
            trace!("Scan alert dropped: no active subscribers");
        }
    }
}
