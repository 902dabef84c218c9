//! # Submission Pipeline
//!
//! An explicit asynchronous submission interface. The controller validates,
//! a [`Submitter`] carries the draft, and the controller records the outcome.
//!
//! There is no backend in this client: [`SimulatedSubmitter`] waits a fixed
//! delay, logs the draft, and fabricates a [`Receipt`]. Because submitters
//! are plain futures, cancellation falls out of ownership: dropping the
//! future (e.g. when the owning UI scope unmounts) stops the submission and
//! no state update can fire afterwards.

use crate::FormModel;
use chrono::{DateTime, Utc};
use rollcall_domain::config::SubmissionConfig;
use rollcall_domain::constants::DEFAULT_SUBMIT_DELAY_MS;
use std::borrow::Cow;
use std::time::Duration;

/// Proof that a submission was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Unambiguous identifier, safe to read aloud.
    pub id: String,
    /// When the submission was accepted.
    pub received_at: DateTime<Utc>,
}

/// A submission that was carried out but not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The backend looked at the draft and said no.
    #[error("Submission rejected: {reason}")]
    Rejected { reason: Cow<'static, str> },
    /// The backend could not be reached at all.
    #[error("Submission backend unavailable: {reason}")]
    Unavailable { reason: Cow<'static, str> },
}

/// Carries a validated draft to whatever accepts registrations.
///
/// Implementations must not mutate application state; the controller applies
/// the outcome via `finish_submit`.
pub trait Submitter<M: FormModel>: Send + Sync {
    fn submit(&self, draft: &M) -> impl Future<Output = Result<Receipt, SubmitError>> + Send;
}

/// A stand-in backend: a fixed pause followed by an unconditional accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub const fn from_config(config: &SubmissionConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms))
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS))
    }
}

impl<M: FormModel> Submitter<M> for SimulatedSubmitter {
    async fn submit(&self, draft: &M) -> Result<Receipt, SubmitError> {
        tokio::time::sleep(self.delay).await;

        // The draft's Debug impl is the redaction boundary; passwords never
        // reach this line in clear text.
        let receipt = Receipt { id: rollcall_kernel::receipt_id(), received_at: Utc::now() };
        tracing::info!(?draft, receipt = %receipt.id, "simulated submission accepted");

        Ok(receipt)
    }
}
