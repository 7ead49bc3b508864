//! Route guard applying the session redirect policy.

use dioxus::prelude::*;
use session::{redirect_target, AuthPhase, LANDING_PATH};
use ui::use_session_gate;

use crate::Route;

/// Layout wrapping every route: shows a spinner until the persisted session
/// is restored, then keeps the path in agreement with the authentication
/// state on every (state, path) change.
///
/// The policy itself lives in [`session::guard`]; this component only
/// translates its answer into a typed navigation. Evaluation happens on
/// every render, in the same turn that produced the state or path change,
/// and is a no-op once the path agrees with the state.
#[component]
pub fn Guarded() -> Element {
    let gate = use_session_gate();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let state = gate.state();
    let path = route.to_string();

    if let Some(target) = redirect_target(&state, &path) {
        let to = match target {
            LANDING_PATH => Route::Dashboard {},
            _ => Route::Login {},
        };
        nav.replace(to);
    }

    if state.phase() == AuthPhase::Initializing {
        return rsx! {
            div { class: "boot-screen",
                div { class: "boot-spinner" }
            }
        };
    }

    rsx! {
        Outlet::<Route> {}
    }
}
