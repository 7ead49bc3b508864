//! Session gate handle and provider shared by every screen.

use dioxus::prelude::*;
use session::{AuthState, UserRecord};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
type PlatformStore = session::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
type PlatformStore = session::MemoryStore;

/// Handle to the session gate: the reactive authentication state plus the
/// store backing it. Cheap to clone; every clone observes the same state.
///
/// Transitions here never navigate. The route guard watches the state and
/// owns the redirects.
#[derive(Clone)]
pub struct SessionGate {
    state: Signal<AuthState>,
    store: PlatformStore,
}

impl PartialEq for SessionGate {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl SessionGate {
    pub fn state(&self) -> AuthState {
        (self.state)()
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        (self.state)().user
    }

    /// Adopt a fresh identity and persist it.
    pub async fn login(&self, user: UserRecord) {
        let next = AuthState::login(&self.store, user).await;
        let mut state = self.state;
        state.set(next);
    }

    /// Drop the current identity and clear the persisted record.
    pub async fn logout(&self) {
        let next = AuthState::logout(&self.store).await;
        let mut state = self.state;
        state.set(next);
    }

    async fn restore(&self) {
        let next = AuthState::restore(&self.store).await;
        let mut state = self.state;
        state.set(next);
    }
}

/// Get the session gate owned by [`SessionProvider`].
pub fn use_session_gate() -> SessionGate {
    use_context::<SessionGate>()
}

/// Provider component that owns the session gate for the whole app.
///
/// Constructed once at startup; the persisted record is restored on mount
/// and `loading` flips to false exactly once, when that read completes.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(AuthState::default);
    let gate = use_context_provider(|| SessionGate {
        state,
        store: PlatformStore::new(),
    });

    // One-shot read of the persisted record
    let _ = use_resource(move || {
        let gate = gate.clone();
        async move { gate.restore().await }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    gate: SessionGate,
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let onclick = move |_| {
        let gate = gate.clone();
        async move {
            gate.logout().await;
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
