//! Redirect policy enforcing the authentication state.
//!
//! The policy is a pure function of (state, path) so the router layer stays
//! a thin subscriber: state transitions happen in [`crate::gate`], and this
//! module decides where the router must go afterwards.

use crate::gate::{AuthPhase, AuthState};

/// Public entry screen.
pub const ENTRY_PATH: &str = "/login";
/// Application root.
pub const ROOT_PATH: &str = "/";
/// Protected landing screen.
pub const LANDING_PATH: &str = "/dashboard";

/// Where the router must go for this (state, path) pair, if anywhere.
///
/// Level-triggered: safe to re-evaluate on every state or path change, and a
/// no-op once the path already agrees with the state. Never redirects while
/// the startup read is still pending.
pub fn redirect_target(state: &AuthState, path: &str) -> Option<&'static str> {
    match state.phase() {
        AuthPhase::Initializing => None,
        AuthPhase::Unauthenticated if path != ENTRY_PATH => Some(ENTRY_PATH),
        AuthPhase::Authenticated if path == ENTRY_PATH || path == ROOT_PATH => {
            Some(LANDING_PATH)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserRecord;

    fn initializing() -> AuthState {
        AuthState::default()
    }

    fn unauthenticated() -> AuthState {
        AuthState {
            user: None,
            loading: false,
        }
    }

    fn authenticated() -> AuthState {
        AuthState {
            user: Some(UserRecord {
                phone_number: "+7".to_string(),
                name: "Ann".to_string(),
            }),
            loading: false,
        }
    }

    const PATHS: [&str; 4] = [ROOT_PATH, ENTRY_PATH, LANDING_PATH, "/elsewhere"];

    #[test]
    fn test_never_redirects_while_initializing() {
        for path in PATHS {
            assert_eq!(redirect_target(&initializing(), path), None);
        }
    }

    #[test]
    fn test_unauthenticated_is_forced_to_entry() {
        assert_eq!(redirect_target(&unauthenticated(), ENTRY_PATH), None);
        for path in [ROOT_PATH, LANDING_PATH, "/elsewhere"] {
            assert_eq!(
                redirect_target(&unauthenticated(), path),
                Some(ENTRY_PATH)
            );
        }
    }

    #[test]
    fn test_authenticated_leaves_entry_and_root() {
        assert_eq!(
            redirect_target(&authenticated(), ENTRY_PATH),
            Some(LANDING_PATH)
        );
        assert_eq!(
            redirect_target(&authenticated(), ROOT_PATH),
            Some(LANDING_PATH)
        );
        assert_eq!(redirect_target(&authenticated(), LANDING_PATH), None);
        assert_eq!(redirect_target(&authenticated(), "/elsewhere"), None);
    }

    /// After at most one redirect the path agrees with the state and stays
    /// put: authenticated never ends on the entry/root screen,
    /// unauthenticated never ends on a protected path.
    #[test]
    fn test_guard_reaches_fixed_point_for_all_pairs() {
        for state in [initializing(), unauthenticated(), authenticated()] {
            for path in PATHS {
                let settled = redirect_target(&state, path).unwrap_or(path);
                assert_eq!(
                    redirect_target(&state, settled),
                    None,
                    "guard must be idempotent for ({:?}, {path})",
                    state.phase()
                );

                match state.phase() {
                    AuthPhase::Authenticated => {
                        assert_ne!(settled, ENTRY_PATH);
                        assert_ne!(settled, ROOT_PATH);
                    }
                    AuthPhase::Unauthenticated => {
                        assert_eq!(settled, ENTRY_PATH);
                    }
                    AuthPhase::Initializing => {}
                }
            }
        }
    }
}
