//! Entry screen with the phone/password form.

use api::AuthClient;
use dioxus::prelude::*;
use ui::{use_session_gate, LoginForm};

/// Public entry screen.
#[component]
pub fn Login() -> Element {
    let gate = use_session_gate();
    let client = use_context::<AuthClient>();

    rsx! {
        div { class: "login-page",
            h1 { class: "login-title", "ScanGate" }
            p { class: "login-subtitle", "Sign in with your phone number" }

            LoginForm { gate, client }

            div { class: "login-links",
                a { href: "#", "Forgot your password?" }
            }
        }
    }
}
