//! # localStorage token slot — browser-side persistence
//!
//! [`LocalTokenStore`] is the [`TokenStore`] implementation used on the
//! **web platform**. It keeps the bearer token in `window.localStorage`
//! under [`TOKEN_KEY`](crate::TOKEN_KEY), which survives page reloads within
//! the same browser profile and is the only durable state this client keeps.
//!
//! ## Error handling
//!
//! Every operation silently swallows failures: a missing `window`, disabled
//! storage, or a quota error reads as "no token" and writes become no-ops.
//! The UI treats absence and error identically (signed out), so there is
//! nothing useful to propagate.
//!
//! Storage mutations performed in another tab are not broadcast; each tab
//! re-reads the slot on its own navigation events.

use crate::token::{TokenStore, TOKEN_KEY};

/// `localStorage`-backed TokenStore for the web platform.
///
/// Zero-size and `Clone`-friendly: the storage handle is re-acquired from
/// `window` on every operation, which is how the browser API is meant to be
/// used.
#[derive(Clone, Debug, Default)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
