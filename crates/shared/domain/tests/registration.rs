use rollcall_domain::registration::{
    CampusYear, EventField, EventRegistration, MemberField, MembershipApplication,
};
use strum::IntoEnumIterator;

#[test]
fn event_draft_starts_empty() {
    let draft = EventRegistration::default();
    assert_eq!(draft.full_name, "");
    assert_eq!(draft.email, "");
    assert_eq!(draft.telegram_username, "");
    assert_eq!(draft.phone_number, "");
    assert_eq!(draft.year_of_campus, "");
}

#[test]
fn set_touches_only_the_named_field() {
    let mut draft = EventRegistration::default();
    draft.set(EventField::FullName, "Abebe Bikila");
    draft.set(EventField::PhoneNumber, "0912345678");

    draft.set(EventField::Email, "abebe@example.com");

    assert_eq!(draft.full_name, "Abebe Bikila");
    assert_eq!(draft.phone_number, "0912345678");
    assert_eq!(draft.email, "abebe@example.com");
    assert_eq!(draft.telegram_username, "");
    assert_eq!(draft.year_of_campus, "");
}

#[test]
fn set_replaces_prior_value() {
    let mut draft = EventRegistration::default();
    draft.set(EventField::Email, "first@example.com");
    draft.set(EventField::Email, "second@example.com");
    assert_eq!(draft.get(EventField::Email), "second@example.com");
}

#[test]
fn reset_restores_defaults() {
    let mut draft = EventRegistration::default();
    draft.set(EventField::FullName, "Sara");
    draft.set(EventField::YearOfCampus, "3rd Year");

    draft.reset();

    assert_eq!(draft, EventRegistration::default());
}

#[test]
fn campus_year_labels_match_select_options() {
    let labels: Vec<String> = CampusYear::iter().map(|y| y.to_string()).collect();
    assert_eq!(labels, ["1st Year", "2nd Year", "3rd Year", "4th Year"]);
}

#[test]
fn membership_debug_redacts_passwords() {
    let mut draft = MembershipApplication::default();
    draft.set(MemberField::FullName, "Sara Kebede");
    draft.set(MemberField::Password, "hunter2");
    draft.set(MemberField::ConfirmPassword, "hunter2");

    let printed = format!("{draft:?}");
    assert!(printed.contains("Sara Kebede"));
    assert!(!printed.contains("hunter2"));
    assert!(printed.contains("<redacted>"));
}

#[test]
fn membership_serialization_skips_passwords() {
    let mut draft = MembershipApplication::default();
    draft.set(MemberField::Email, "sara@example.com");
    draft.set(MemberField::Password, "hunter2");

    let json = serde_json::to_string(&draft).expect("draft serialize");
    assert!(json.contains("sara@example.com"));
    assert!(!json.contains("hunter2"));
}

#[test]
fn membership_attachments_hold_paths_only() {
    let mut draft = MembershipApplication::default();
    assert!(draft.resume.is_none());
    assert!(draft.profile_photo.is_none());

    draft.attach_resume("/tmp/resume.pdf");
    draft.attach_profile_photo("/tmp/photo.png");

    assert_eq!(draft.resume.as_deref(), Some(std::path::Path::new("/tmp/resume.pdf")));
    assert_eq!(draft.profile_photo.as_deref(), Some(std::path::Path::new("/tmp/photo.png")));
}
