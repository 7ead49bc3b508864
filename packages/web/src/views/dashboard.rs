//! QR scanning page.

use dioxus::prelude::*;
use session::{is_openable_url, ScanCycle, ScanPhase, ScanSession};
use ui::{copy_to_clipboard, open_in_new_tab, use_session_gate, CameraScanner, LogoutButton};

/// Protected landing screen: one scan attempt at a time.
///
/// The page owns the [`ScanSession`] and the token of the running cycle;
/// the scanner component only reports events, and the session decides what
/// counts. Stale events from a torn-down scanner carry a dead token and are
/// dropped.
#[component]
pub fn Dashboard() -> Element {
    let gate = use_session_gate();
    let mut scan = use_signal(ScanSession::new);
    let mut cycle = use_signal(|| None::<ScanCycle>);

    let user_name = gate.current_user().map(|u| u.name).unwrap_or_default();
    let current = scan();

    let start = move |_: MouseEvent| {
        let token = scan.write().start();
        cycle.set(Some(token));
    };
    let stop = move |_: MouseEvent| scan.write().stop();
    let reset = move |_: MouseEvent| scan.write().reset();

    let on_decode = move |raw: String| {
        if let Some(token) = cycle() {
            scan.write().deliver(token, &raw);
        }
    };
    let on_scan_error = move |detail: String| {
        if let Some(token) = cycle() {
            scan.write().fail(token, &detail);
        }
    };

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                div {
                    h1 { "QR Scanner" }
                    p { class: "dashboard-subtitle", "Scan QR codes quickly and easily" }
                }
                div { class: "dashboard-user",
                    span { class: "dashboard-user-name", "{user_name}" }
                    LogoutButton { gate: gate.clone(), class: "btn btn-logout" }
                }
            }

            div { class: "scan-card",
                {match current.phase() {
                    ScanPhase::Idle => rsx! {
                        div { class: "scan-idle",
                            h3 { "Ready to scan" }
                            p { "Press the button to start the camera" }
                            button { class: "btn btn-primary", onclick: start, "Start scanner" }
                        }
                    },
                    ScanPhase::Scanning => rsx! {
                        div { class: "scan-live",
                            div { class: "scanner-frame",
                                CameraScanner { on_decode, on_error: on_scan_error }
                                div { class: "scanner-overlay" }
                            }
                            p { class: "scan-hint", "Point the camera at a QR code" }
                            button { class: "btn btn-stop", onclick: stop, "Stop scanning" }
                        }
                    },
                    ScanPhase::Result => {
                        let value = current.result().unwrap_or_default().to_string();
                        let copy_value = value.clone();
                        let open_value = value.clone();
                        rsx! {
                            div { class: "scan-result",
                                h3 { "QR code scanned" }
                                div { class: "scan-result-data",
                                    p { class: "scan-result-label", "Data:" }
                                    p { class: "scan-result-value", "{value}" }
                                }
                                div { class: "scan-actions",
                                    button {
                                        class: "btn btn-primary",
                                        onclick: move |_| copy_to_clipboard(&copy_value),
                                        "Copy"
                                    }
                                    if is_openable_url(&value) {
                                        button {
                                            class: "btn btn-open",
                                            onclick: move |_| open_in_new_tab(&open_value),
                                            "Open"
                                        }
                                    }
                                }
                                button { class: "btn btn-reset", onclick: reset, "Scan again" }
                            }
                        }
                    }
                    ScanPhase::Error => {
                        let message = current.error().unwrap_or_default().to_string();
                        rsx! {
                            div { class: "scan-error",
                                h3 { "Error" }
                                p { "{message}" }
                                button { class: "btn btn-reset", onclick: reset, "Try again" }
                            }
                        }
                    }
                }}
            }

            div { class: "info-card",
                h4 { "How to use" }
                ol {
                    li { "Press \"Start scanner\"" }
                    li { "Allow camera access" }
                    li { "Point at the QR code and hold still" }
                    li { "Copy the data or open the link" }
                }
            }
        }
    }
}
