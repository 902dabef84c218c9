//! # Form Controller
//!
//! The state machine behind both forms. It owns the draft, the active view,
//! the in-flight flag, and the single status-message slot shared by
//! validation failures, submission failures, and scan errors.
//!
//! Submission is split into two phases so the in-flight state is observable:
//! [`FormController::begin_submit`] validates and hands back a draft
//! snapshot, [`FormController::finish_submit`] applies the outcome. The
//! async [`FormController::submit`] drives both around a [`Submitter`].

use crate::submit::{Receipt, SubmitError, Submitter};
use crate::validation::ValidationError;
use crate::FormModel;
use std::borrow::Cow;

/// Which section of the component is rendered.
///
/// A single enum instead of two booleans: the registration form and the
/// attendance scanner can never be visible at the same time.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// The idle menu ("Register" / "Take Attendance").
    #[default]
    Idle,
    /// The registration form.
    Registering,
    /// The attendance scanner.
    ScanningAttendance,
}

/// Whether a submission is currently pending.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    InFlight,
}

/// The single inline message slot.
///
/// Overwritten on each new event, cleared at the start of every submit
/// attempt. Scan errors land here too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Error(Cow<'static, str>),
    Success(Cow<'static, str>),
}

impl StatusLine {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Error(msg) | Self::Success(msg) => msg,
        }
    }
}

/// Why a submit attempt did not produce a receipt.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Submission(#[from] SubmitError),
    /// A second submit attempt while one is pending.
    #[error("A submission is already in flight.")]
    SubmissionInFlight,
}

/// Orchestrates a single form: draft edits, view toggles, submission.
#[derive(Default, Debug, Clone)]
pub struct FormController<M: FormModel> {
    draft: M,
    view: ViewState,
    submit: SubmitState,
    status: Option<StatusLine>,
}

impl<M: FormModel> FormController<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn draft(&self) -> &M {
        &self.draft
    }

    #[must_use]
    pub const fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub const fn submit_state(&self) -> SubmitState {
        self.submit
    }

    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self.submit, SubmitState::InFlight)
    }

    #[must_use]
    pub const fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    /// The current error message, if the slot holds one.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            Some(StatusLine::Error(msg)) => Some(msg),
            _ => None,
        }
    }

    /// The current success message, if the slot holds one.
    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        match &self.status {
            Some(StatusLine::Success(msg)) => Some(msg),
            _ => None,
        }
    }

    /// Replaces a single draft field. No validation runs here.
    pub fn set(&mut self, field: M::Field, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    /// Gives the attachment pickers (and tests) direct draft access.
    pub const fn draft_mut(&mut self) -> &mut M {
        &mut self.draft
    }

    /// Shows the registration form, hiding the attendance scanner.
    pub const fn show_registration(&mut self) {
        self.view = ViewState::Registering;
    }

    /// Shows the attendance scanner, hiding the registration form.
    pub const fn show_attendance(&mut self) {
        self.view = ViewState::ScanningAttendance;
    }

    /// Returns to the idle menu from either view.
    pub const fn go_back(&mut self) {
        self.view = ViewState::Idle;
    }

    /// Surfaces an externally produced error (e.g. a scan failure) in the
    /// shared status slot, replacing whatever was there.
    pub fn report_error(&mut self, message: impl Into<Cow<'static, str>>) {
        self.status = Some(StatusLine::Error(message.into()));
    }

    /// Starts a submit attempt: clears the status slot, validates the draft
    /// in its fixed rule order, and flips to [`SubmitState::InFlight`].
    ///
    /// On the first failing rule the rule's message lands in the status slot
    /// and the attempt aborts; the submitter is never reached and the fields
    /// stay intact.
    ///
    /// # Errors
    /// [`FormError::SubmissionInFlight`] if a submission is already pending,
    /// [`FormError::Validation`] if a rule rejects the draft.
    pub fn begin_submit(&mut self) -> Result<M, FormError> {
        if self.is_in_flight() {
            return Err(FormError::SubmissionInFlight);
        }

        self.status = None;

        if let Err(rule) = self.draft.validate() {
            self.status = Some(StatusLine::Error(rule.to_string().into()));
            return Err(rule.into());
        }

        self.submit = SubmitState::InFlight;
        Ok(self.draft.clone())
    }

    /// Applies a submission outcome: flips back to [`SubmitState::Idle`],
    /// then either runs the form's completion behavior or records the error.
    pub fn finish_submit(&mut self, outcome: Result<Receipt, SubmitError>) {
        self.submit = SubmitState::Idle;

        match outcome {
            Ok(receipt) => {
                tracing::debug!(receipt = %receipt.id, "submission outcome applied");
                let completion = self.draft.finish();
                if let Some(banner) = completion.banner {
                    self.status = Some(StatusLine::Success(banner));
                }
                if completion.dismiss_form && self.view == ViewState::Registering {
                    self.view = ViewState::Idle;
                }
            },
            Err(err) => {
                self.status = Some(StatusLine::Error(err.to_string().into()));
            },
        }
    }

    /// Convenience driver for both submit phases.
    ///
    /// UI code that needs the in-flight state rendered between the phases
    /// should call [`Self::begin_submit`] / [`Self::finish_submit`] itself.
    ///
    /// # Errors
    /// See [`Self::begin_submit`]; additionally [`FormError::Submission`]
    /// when the submitter reports a failure.
    pub async fn submit<S: Submitter<M>>(&mut self, submitter: &S) -> Result<Receipt, FormError> {
        let draft = self.begin_submit()?;
        let outcome = submitter.submit(&draft).await;
        self.finish_submit(outcome.clone());
        outcome.map_err(FormError::from)
    }
}
