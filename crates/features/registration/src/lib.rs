//! # Registration
//!
//! This crate owns the whole lifecycle of a registration form: draft editing,
//! validation at submission time, and the (simulated) asynchronous submission.
//!
//! ## Architecture
//!
//! The crate is divided into three parts:
//!
//! 1. **Controller ([`controller`]):** a small state machine holding the draft,
//!    the active view, the in-flight flag, and the single status-message slot.
//! 2. **Validation ([`validation`]):** the regex rules, evaluated in a fixed
//!    order with first-failing-rule-wins semantics.
//! 3. **Submission ([`submit`]):** the [`Submitter`] contract plus the
//!    [`SimulatedSubmitter`], which stands in for a real backend with a fixed
//!    delay. No data leaves the client.
//!
//! Two forms implement [`FormModel`]: the short [`EventRegistration`] and the
//! longer [`MembershipApplication`]. They share the controller and differ only
//! in fields, rules, and what happens after a successful submission.

pub mod controller;
pub mod submit;
pub mod validation;

pub use crate::controller::{FormController, FormError, StatusLine, SubmitState, ViewState};
pub use crate::submit::{Receipt, SimulatedSubmitter, SubmitError, Submitter};
pub use crate::validation::ValidationError;

use rollcall_domain::registration::{
    EventField, EventRegistration, MemberField, MembershipApplication,
};
use std::borrow::Cow;
use std::fmt;

/// What a form does once its submission has been accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Success banner for the status slot, if the form shows one.
    pub banner: Option<Cow<'static, str>>,
    /// Whether the form view is dismissed back to the idle menu.
    pub dismiss_form: bool,
}

/// Per-form behavior behind the shared [`FormController`].
pub trait FormModel: Default + Clone + fmt::Debug + Send + Sync + 'static {
    /// Field keys accepted by [`FormModel::set`].
    type Field: Copy + Eq + fmt::Debug;

    /// Replaces the named field. Never validates, never fails.
    fn set(&mut self, field: Self::Field, value: String);

    /// Checks the draft against the form's rules in their fixed order.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Runs the form's post-success behavior (reset, banner, dismissal).
    fn finish(&mut self) -> Completion;
}

impl FormModel for EventRegistration {
    type Field = EventField;

    fn set(&mut self, field: EventField, value: String) {
        Self::set(self, field, value);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_event(self)
    }

    fn finish(&mut self) -> Completion {
        self.reset();
        Completion { banner: Some("Registration successful!".into()), dismiss_form: true }
    }
}

impl FormModel for MembershipApplication {
    type Field = MemberField;

    fn set(&mut self, field: MemberField, value: String) {
        Self::set(self, field, value);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_membership(self)
    }

    // The membership form keeps its draft and shows no banner.
    fn finish(&mut self) -> Completion {
        Completion { banner: None, dismiss_form: false }
    }
}
