//! # Validation Rules
//!
//! Regex rules evaluated only at submission time, never per keystroke.
//! The patterns are load-bearing: they define the acceptance behavior of the
//! forms and must not be "improved" without an explicit product decision.
//!
//! Evaluation order is fixed (phone, email, then the optional profile URLs)
//! and the first failing rule wins; errors are never aggregated.

use regex::Regex;
use rollcall_domain::registration::{EventRegistration, MembershipApplication};
use std::sync::LazyLock;

/// Exactly 10 digits, starting with "09" or "07".
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(09|07)\d{8}$").expect("phone pattern"));

/// One "@", at least one "." in the domain part, no whitespace.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Prefix match: scheme and "www." are optional, the profile slug is not.
static LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(linkedin\.com/in/[A-Za-z0-9_-]+/?)")
        .expect("linkedin pattern")
});

/// Prefix match, same shape as the LinkedIn rule.
static GITHUB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(github\.com/[A-Za-z0-9_-]+/?)").expect("github pattern")
});

/// A validation failure, naming the rule that rejected the draft.
///
/// The `Display` text is the exact user-facing message for that rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Phone number must start with 09 or 07 and be 10 digits long.")]
    PhoneFormat,
    #[error("Please enter a valid email address.")]
    EmailFormat,
    #[error("Please enter a valid LinkedIn profile URL.")]
    LinkedinFormat,
    #[error("Please enter a valid GitHub profile URL.")]
    GithubFormat,
}

#[must_use]
pub fn phone_number_is_valid(value: &str) -> bool {
    PHONE.is_match(value)
}

#[must_use]
pub fn email_is_valid(value: &str) -> bool {
    EMAIL.is_match(value)
}

#[must_use]
pub fn linkedin_url_is_valid(value: &str) -> bool {
    LINKEDIN.is_match(value)
}

#[must_use]
pub fn github_url_is_valid(value: &str) -> bool {
    GITHUB.is_match(value)
}

/// Validates the event registration draft: phone, then email.
pub fn validate_event(draft: &EventRegistration) -> Result<(), ValidationError> {
    if !phone_number_is_valid(&draft.phone_number) {
        return Err(ValidationError::PhoneFormat);
    }
    if !email_is_valid(&draft.email) {
        return Err(ValidationError::EmailFormat);
    }
    Ok(())
}

/// Validates the membership application draft: phone, email, then the
/// profile URLs. Empty URL fields are skipped; the fields are optional.
pub fn validate_membership(draft: &MembershipApplication) -> Result<(), ValidationError> {
    if !phone_number_is_valid(&draft.phone_number) {
        return Err(ValidationError::PhoneFormat);
    }
    if !email_is_valid(&draft.email) {
        return Err(ValidationError::EmailFormat);
    }
    if !draft.linkedin_url.is_empty() && !linkedin_url_is_valid(&draft.linkedin_url) {
        return Err(ValidationError::LinkedinFormat);
    }
    if !draft.github_url.is_empty() && !github_url_is_valid(&draft.github_url) {
        return Err(ValidationError::GithubFormat);
    }
    Ok(())
}
