use api::{ApiConfig, AuthClient};
use dioxus::prelude::*;

use views::{Dashboard, Guarded, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guarded)]
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Launched with the `web` feature via `dx serve`
    #[cfg(feature = "web")]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The one application-scoped HTTP client; screens receive it from here
    use_context_provider(|| AuthClient::new(ApiConfig::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}

/// `/` renders nothing itself; the route guard forwards it to the right
/// screen for the current authentication state.
#[component]
fn Root() -> Element {
    rsx! {}
}
