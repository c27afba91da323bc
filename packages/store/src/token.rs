//! # Token slot — the single piece of durable client state
//!
//! Blogify keeps exactly one value in persistent browser storage: the bearer
//! token returned by a successful login. [`TokenStore`] is the abstract slot;
//! implementations live in sibling modules ([`crate::memory`], [`crate::local`]).
//!
//! Holding a token is what makes the client consider itself signed in — claims
//! are decoded from it for display, but no validity check happens locally. The
//! token is only discovered to be stale when the server rejects a request
//! carrying it, at which point the caller clears the slot.
//!
//! Storing a new token overwrites the previous one; there is never more than
//! one. A backend that cannot reach its storage must report the token as
//! absent and accept writes as no-ops, so the UI degrades to "signed out"
//! instead of crashing.

/// Storage key for the bearer token, shared by every backend.
pub const TOKEN_KEY: &str = "token";

/// A persistent slot holding at most one bearer token.
pub trait TokenStore {
    /// Read the stored token, or `None` when absent or storage is unavailable.
    fn get(&self) -> Option<String>;
    /// Store a token, replacing any previous one.
    fn set(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}
