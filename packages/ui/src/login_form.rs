//! Phone/password login form.

use api::AuthClient;
use dioxus::prelude::*;
use session::LoginFlow;

use crate::SessionGate;

/// Login form driving [`LoginFlow`] against the authentication endpoint.
///
/// On success the user record is handed to the gate; the route guard takes
/// it from there. Any endpoint failure shows one generic message in the
/// network-error banner, with the fields left editable.
#[component]
pub fn LoginForm(gate: SessionGate, client: AuthClient) -> Element {
    let mut flow = use_signal(LoginFlow::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let gate = gate.clone();
        let client = client.clone();
        spawn(async move {
            // The in-flight flag flips before the request leaves, so a rapid
            // second submit is rejected here
            if !flow.write().begin_submit() {
                return;
            }
            let (phone, password) = {
                let current = flow.read();
                (current.phone().to_string(), current.password().to_string())
            };
            match client.login_admin(&phone, &password).await {
                Ok(user) => {
                    flow.write().succeed();
                    gate.login(user).await;
                }
                Err(err) => {
                    tracing::warn!("login failed: {err}");
                    flow.write().fail();
                }
            }
        });
    };

    let current = flow();
    let submitting = current.is_submitting();

    rsx! {
        form {
            class: "login-form",
            onsubmit: handle_submit,

            if let Some(err) = current.network_error() {
                div { class: "form-banner form-banner-error", "{err}" }
            }

            div { class: "form-field",
                label { r#for: "phone", "Phone number" }
                input {
                    id: "phone",
                    name: "phone",
                    r#type: "tel",
                    value: "{current.phone()}",
                    placeholder: "+7 (___) ___-__-__",
                    maxlength: "18",
                    disabled: submitting,
                    class: if current.phone_error().is_some() { "input input-invalid" } else { "input" },
                    oninput: move |evt: FormEvent| flow.write().edit_phone(evt.value()),
                }
                if let Some(err) = current.phone_error() {
                    p { class: "field-error", "{err}" }
                }
            }

            div { class: "form-field",
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    name: "password",
                    r#type: "password",
                    value: "{current.password()}",
                    placeholder: "Enter your password",
                    disabled: submitting,
                    class: if current.password_error().is_some() { "input input-invalid" } else { "input" },
                    oninput: move |evt: FormEvent| flow.write().edit_password(evt.value()),
                }
                if let Some(err) = current.password_error() {
                    p { class: "field-error", "{err}" }
                }
            }

            button {
                r#type: "submit",
                class: "btn btn-primary btn-submit",
                disabled: submitting,
                if submitting { "Signing in..." } else { "Sign in" }
            }
        }
    }
}
