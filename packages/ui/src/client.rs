//! Platform wiring for the backend client.
//!
//! Picks the [`store::TokenStore`] backend the way each platform needs it:
//! `localStorage` on the web build, a process-wide in-memory slot
//! everywhere else (native development runs and tests).

use api::ApiClient;
use store::TokenStore;

/// Token slot for the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_token_store() -> impl TokenStore + Clone {
    store::LocalTokenStore::new()
}

/// Token slot for the current platform.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn make_token_store() -> impl TokenStore + Clone {
    use std::sync::OnceLock;

    // One shared slot per process so a login in one view is visible to the
    // next, mirroring what localStorage gives the web build.
    static SLOT: OnceLock<store::MemoryTokenStore> = OnceLock::new();
    SLOT.get_or_init(store::MemoryTokenStore::new).clone()
}

/// Backend client over the platform token slot.
pub fn make_client() -> ApiClient<impl TokenStore + Clone> {
    ApiClient::new(make_token_store())
}
