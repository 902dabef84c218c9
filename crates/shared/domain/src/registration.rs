//! Registration drafts.
//!
//! The drafts are in-memory, unsaved records of form field values. Each field
//! edit replaces exactly one field; validation never runs here. Two distinct
//! forms exist and are specified independently: the short event registration
//! and the longer membership application.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumIter};
use zeroize::Zeroize;

/// Campus year options offered by the registration select widget.
///
/// The draft stores the selected label as a plain string; this enum only
/// enumerates the choices for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
pub enum CampusYear {
    #[strum(serialize = "1st Year")]
    First,
    #[strum(serialize = "2nd Year")]
    Second,
    #[strum(serialize = "3rd Year")]
    Third,
    #[strum(serialize = "4th Year")]
    Fourth,
}

/// Interest areas offered by the membership application select widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
pub enum InterestArea {
    #[strum(serialize = "Web Development")]
    WebDevelopment,
    #[strum(serialize = "Mobile Development")]
    MobileDevelopment,
    #[strum(serialize = "Data Science")]
    DataScience,
    #[strum(serialize = "Cybersecurity")]
    Cybersecurity,
    #[strum(serialize = "UI/UX Design")]
    Design,
}

/// Field keys of the event registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    FullName,
    Email,
    TelegramUsername,
    PhoneNumber,
    YearOfCampus,
}

/// Draft of the short event registration form.
///
/// All fields default to the empty string; the draft is never persisted.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventRegistration {
    pub full_name: String,
    pub email: String,
    pub telegram_username: String,
    pub phone_number: String,
    pub year_of_campus: String,
}

impl EventRegistration {
    /// Replaces the named field; all other fields keep their prior values.
    pub fn set(&mut self, field: EventField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EventField::FullName => self.full_name = value,
            EventField::Email => self.email = value,
            EventField::TelegramUsername => self.telegram_username = value,
            EventField::PhoneNumber => self.phone_number = value,
            EventField::YearOfCampus => self.year_of_campus = value,
        }
    }

    /// Returns the current value of the named field.
    #[must_use]
    pub fn get(&self, field: EventField) -> &str {
        match field {
            EventField::FullName => &self.full_name,
            EventField::Email => &self.email,
            EventField::TelegramUsername => &self.telegram_username,
            EventField::PhoneNumber => &self.phone_number,
            EventField::YearOfCampus => &self.year_of_campus,
        }
    }

    /// Resets every field to its empty default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Field keys of the membership application text fields.
///
/// The two file attachments are not keyed; see
/// [`MembershipApplication::attach_resume`] and
/// [`MembershipApplication::attach_profile_photo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberField {
    FullName,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
    InterestArea,
    CampusName,
    LinkedinUrl,
    GithubUrl,
}

/// Draft of the membership application form.
///
/// Passwords are sensitive: they are redacted from `Debug` output (the
/// submission pipeline logs drafts) and wiped by [`Self::secure_clear`].
/// The file fields only hold selected paths in memory; nothing is read
/// or uploaded.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MembershipApplication {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip)]
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
    pub interest_area: String,
    pub campus_name: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub resume: Option<PathBuf>,
    pub profile_photo: Option<PathBuf>,
}

impl MembershipApplication {
    /// Replaces the named text field; all other fields keep their prior values.
    pub fn set(&mut self, field: MemberField, value: impl Into<String>) {
        let value = value.into();
        match field {
            MemberField::FullName => self.full_name = value,
            MemberField::Email => self.email = value,
            MemberField::PhoneNumber => self.phone_number = value,
            MemberField::Password => self.password = value,
            MemberField::ConfirmPassword => self.confirm_password = value,
            MemberField::InterestArea => self.interest_area = value,
            MemberField::CampusName => self.campus_name = value,
            MemberField::LinkedinUrl => self.linkedin_url = value,
            MemberField::GithubUrl => self.github_url = value,
        }
    }

    /// Remembers the selected resume file. The file itself is never opened.
    pub fn attach_resume(&mut self, path: impl AsRef<Path>) {
        self.resume = Some(path.as_ref().to_path_buf());
    }

    /// Remembers the selected profile photo. The file itself is never opened.
    pub fn attach_profile_photo(&mut self, path: impl AsRef<Path>) {
        self.profile_photo = Some(path.as_ref().to_path_buf());
    }

    /// Securely wipes the password fields and consumes the draft.
    ///
    /// Call this when discarding an application so credentials do not
    /// persist in RAM longer than necessary.
    pub fn secure_clear(mut self) {
        self.password.zeroize();
        self.confirm_password.zeroize();
    }
}

impl fmt::Debug for MembershipApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MembershipApplication")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("interest_area", &self.interest_area)
            .field("campus_name", &self.campus_name)
            .field("linkedin_url", &self.linkedin_url)
            .field("github_url", &self.github_url)
            .field("resume", &self.resume)
            .field("profile_photo", &self.profile_photo)
            .finish()
    }
}
