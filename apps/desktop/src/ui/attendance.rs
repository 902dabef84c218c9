use dioxus::prelude::*;
use rollcall::domain::registration::EventRegistration;
use rollcall::registration::FormController;

/// The attendance scanner view.
///
/// The camera preview and QR decoding belong to the external scanner widget;
/// this view only renders its frame and surfaces decoded payloads. Each
/// non-empty decode shows up exactly once as a modal that the user dismisses,
/// the desktop stand-in for a blocking alert.
#[component]
pub fn AttendanceView(
    mut controller: Signal<FormController<EventRegistration>>,
    mut pending_scan: Signal<Option<String>>,
) -> Element {
    let alert = pending_scan.read().clone();

    rsx! {
        div { class: "scanner",
            h2 { "Scan QR Code for Attendance" }
            div { class: "scanner-frame",
                p { "Point the camera at an attendance code. The embedded scanner decodes it and reports back here." }
            }
            button {
                class: "link",
                r#type: "button",
                onclick: move |_| controller.write().go_back(),
                "Back"
            }
        }
        {alert.map(|text| rsx! {
            div { class: "modal-backdrop",
                div { class: "modal",
                    p { "Scanned data: {text}" }
                    button {
                        class: "primary",
                        r#type: "button",
                        onclick: move |_| pending_scan.set(None),
                        "OK"
                    }
                }
            }
        })}
    }
}
