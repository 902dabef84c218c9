use dioxus::prelude::*;
use rollcall::domain::registration::EventRegistration;
use rollcall::registration::FormController;

/// The idle menu: pick between registering and taking attendance.
#[component]
pub fn Menu(mut controller: Signal<FormController<EventRegistration>>) -> Element {
    rsx! {
        div { class: "menu",
            button {
                class: "primary",
                r#type: "button",
                onclick: move |_| controller.write().show_registration(),
                "Register"
            }
            button {
                class: "primary",
                r#type: "button",
                onclick: move |_| controller.write().show_attendance(),
                "Take Attendance"
            }
        }
    }
}
