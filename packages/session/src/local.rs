//! # localStorage session store — browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. The serialized user record lives under the `"user"` key in
//! `window.localStorage`; its presence and parseability is the sole
//! authentication signal across page loads.
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A browser that denies storage access degrades
//! to "not authenticated" rather than crashing the app.

use crate::store::{SessionStore, USER_KEY};

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    async fn load(&self) -> Option<String> {
        let storage = Self::storage()?;
        storage.get_item(USER_KEY).ok().flatten()
    }

    async fn save(&self, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.set_item(USER_KEY, value).is_err() {
            tracing::error!("failed to persist session record");
        }
    }

    async fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(USER_KEY);
    }
}
