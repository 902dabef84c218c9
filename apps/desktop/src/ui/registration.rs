use dioxus::prelude::*;
use rollcall::domain::registration::{CampusYear, EventField, EventRegistration};
use rollcall::registration::{FormController, Submitter};
use rollcall::Client;
use strum::IntoEnumIterator;

/// The event registration form.
///
/// Fields route straight into the controller's draft; validation only runs
/// when the form is submitted. The submission future lives in this
/// component's scope, so closing the form cancels a pending submission.
#[component]
pub fn RegistrationForm(mut controller: Signal<FormController<EventRegistration>>) -> Element {
    let client = use_context::<Client>();
    let in_flight = controller.read().is_in_flight();
    let draft = controller.read().draft().clone();
    let submit_label = if in_flight { "Submitting..." } else { "Register" };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submitter = client.submitter.clone();
        spawn(async move {
            let draft = match controller.write().begin_submit() {
                Ok(draft) => draft,
                // The failing rule's message already sits in the status slot.
                Err(_) => return,
            };
            let outcome = submitter.submit(&draft).await;
            controller.write().finish_submit(outcome);
        });
    };

    rsx! {
        form { class: "registration", onsubmit: submit,
            div { class: "field",
                label { r#for: "fullName", "Full Name (required)" }
                input {
                    id: "fullName",
                    name: "fullName",
                    r#type: "text",
                    required: true,
                    placeholder: "Enter your full name",
                    value: "{draft.full_name}",
                    oninput: move |evt| controller.write().set(EventField::FullName, evt.value()),
                }
            }
            div { class: "field",
                label { r#for: "email", "Email (required)" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    placeholder: "Enter your email",
                    value: "{draft.email}",
                    oninput: move |evt| controller.write().set(EventField::Email, evt.value()),
                }
            }
            div { class: "field",
                label { r#for: "telegramUsername", "Telegram Username (required)" }
                input {
                    id: "telegramUsername",
                    name: "telegramUsername",
                    r#type: "text",
                    required: true,
                    placeholder: "Enter your Telegram username",
                    value: "{draft.telegram_username}",
                    oninput: move |evt| {
                        controller.write().set(EventField::TelegramUsername, evt.value());
                    },
                }
            }
            div { class: "field",
                label { r#for: "phoneNumber", "Phone Number (required)" }
                input {
                    id: "phoneNumber",
                    name: "phoneNumber",
                    r#type: "tel",
                    required: true,
                    placeholder: "Enter your phone number",
                    value: "{draft.phone_number}",
                    oninput: move |evt| controller.write().set(EventField::PhoneNumber, evt.value()),
                }
            }
            div { class: "field",
                label { r#for: "yearOfCampus", "Year of Campus (required)" }
                select {
                    id: "yearOfCampus",
                    name: "yearOfCampus",
                    required: true,
                    value: "{draft.year_of_campus}",
                    onchange: move |evt| controller.write().set(EventField::YearOfCampus, evt.value()),
                    option { value: "", disabled: true, selected: draft.year_of_campus.is_empty(),
                        "Select your year"
                    }
                    for year in CampusYear::iter() {
                        option { value: "{year}", "{year}" }
                    }
                }
            }
            div { class: "actions",
                button { class: "primary", r#type: "submit", disabled: in_flight, "{submit_label}" }
            }
        }
        div { class: "actions",
            button {
                class: "link",
                r#type: "button",
                onclick: move |_| controller.write().go_back(),
                "Back"
            }
        }
    }
}
