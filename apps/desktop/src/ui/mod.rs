//! UI components of the Rollcall client.
//!
//! One root component renders by [`ViewState`]: the idle menu, the event
//! registration form, or the attendance scanner. Scan alerts arrive over the
//! [`ScanFeed`](rollcall::attendance::ScanFeed) and are routed into either
//! the surfacing modal or the shared status slot.

pub mod attendance;
pub mod menu;
pub mod registration;

use crate::ui::attendance::AttendanceView;
use crate::ui::menu::Menu;
use crate::ui::registration::RegistrationForm;
use dioxus::prelude::*;
use rollcall::attendance::{RecvError, ScanAlert};
use rollcall::domain::registration::EventRegistration;
use rollcall::registration::{FormController, StatusLine, ViewState};
use rollcall::Client;

/// Root component handed to the desktop launcher.
pub fn app() -> Element {
    let client = use_context::<Client>();
    let mut controller = use_signal(FormController::<EventRegistration>::new);
    let mut pending_scan = use_signal(|| None::<String>);

    // Route decoder callbacks into the UI: decoded payloads become the
    // surfacing modal, failures land in the shared status slot.
    let feed = client.scan_feed.clone();
    use_future(move || {
        let mut alerts = feed.subscribe();
        async move {
            loop {
                match alerts.recv().await {
                    Ok(ScanAlert::Decoded(text)) => pending_scan.set(Some(text)),
                    Ok(ScanAlert::Failed(message)) => controller.write().report_error(message),
                    Err(RecvError::Lagged(_)) => {},
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });

    let view = controller.read().view();

    rsx! {
        div { class: "shell",
            h2 { class: "title", "Rollcall Registration and Attendance" }
            StatusBanner { controller }
            {match view {
                ViewState::Idle => rsx! { Menu { controller } },
                ViewState::Registering => rsx! { RegistrationForm { controller } },
                ViewState::ScanningAttendance => rsx! { AttendanceView { controller, pending_scan } },
            }}
        }
    }
}

/// The single inline message slot, rendered above every view.
#[component]
fn StatusBanner(controller: Signal<FormController<EventRegistration>>) -> Element {
    let status = controller.read().status().cloned();

    rsx! {
        {status.map(|line| {
            let (class, message) = match line {
                StatusLine::Success(msg) => ("status success", msg),
                StatusLine::Error(msg) => ("status error", msg),
            };
            rsx! { p { class: "{class}", "{message}" } }
        })}
    }
}
