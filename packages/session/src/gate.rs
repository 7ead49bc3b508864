//! # Session gate — the single source of truth for "is this client authenticated"
//!
//! [`AuthState`] holds the current user and the startup `loading` flag; the
//! three transitions ([`restore`](AuthState::restore), [`login`](AuthState::login),
//! [`logout`](AuthState::logout)) each take a [`SessionStore`] explicitly and
//! return the next state, so the same logic runs against localStorage in the
//! browser and [`crate::MemoryStore`] in tests.
//!
//! Authentication is derived, not stored: a client is authenticated exactly
//! when a well-formed [`UserRecord`] is present. `loading` is true only until
//! the one-time startup read completes and never reverts to true.
//!
//! Transitions never navigate. The redirect policy lives in [`crate::guard`]
//! and reacts to the state change.

use crate::store::SessionStore;
use crate::user::UserRecord;

/// Authentication lifecycle phase, derived from [`AuthState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// The startup read of the persisted record has not completed yet.
    Initializing,
    Unauthenticated,
    Authenticated,
}

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserRecord>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn phase(&self) -> AuthPhase {
        if self.loading {
            AuthPhase::Initializing
        } else if self.user.is_some() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }

    /// Resolve the startup state from the persisted record.
    ///
    /// A missing slot or any backend failure yields `Unauthenticated`. An
    /// unparseable value also purges the slot so corrupted state is not
    /// retried on the next launch. Never fails from the caller's view.
    pub async fn restore<S: SessionStore>(store: &S) -> Self {
        let user = match store.load().await {
            None => None,
            Some(raw) => match serde_json::from_str::<UserRecord>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::warn!("purging unreadable session record: {err}");
                    store.clear().await;
                    None
                }
            },
        };
        Self {
            user,
            loading: false,
        }
    }

    /// Adopt `user` as the current identity and persist it.
    ///
    /// Calling this while already authenticated overwrites the previous
    /// record, last write wins.
    pub async fn login<S: SessionStore>(store: &S, user: UserRecord) -> Self {
        match serde_json::to_string(&user) {
            Ok(raw) => store.save(&raw).await,
            Err(err) => tracing::error!("failed to serialize session record: {err}"),
        }
        Self {
            user: Some(user),
            loading: false,
        }
    }

    /// Drop the current identity and clear the persisted record.
    pub async fn logout<S: SessionStore>(store: &S) -> Self {
        store.clear().await;
        Self {
            user: None,
            loading: false,
        }
    }
}
