//! Session context for the UI.
//!
//! The session is never cached anywhere on its own: it is always derived
//! from the token slot. [`SessionProvider`] owns the derived value for the
//! component tree, and every page view calls [`use_route_session`] on
//! mount — since views mount on navigation, that is exactly "re-check the
//! slot at every navigation boundary", which is how a logout performed in
//! one view shows up when another view appears.

use api::{derive_session, Session};
use dioxus::prelude::*;
use store::TokenStore;

use crate::client::make_token_store;

/// The session signal provided by [`SessionProvider`].
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Re-derive the session from the token slot and publish it if it changed.
pub fn refresh_session(mut session: Signal<Session>) {
    let store = make_token_store();
    let fresh = derive_session(store.get().as_deref());
    if *session.peek() != fresh {
        session.set(fresh);
    }
}

/// Session hook for page views: re-derives from storage when the view
/// mounts, then behaves like [`use_session`].
pub fn use_route_session() -> Signal<Session> {
    let session = use_session();
    use_hook(move || refresh_session(session));
    session
}

/// Provides the session context. Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let store = make_token_store();
    let session = use_signal(move || derive_session(store.get().as_deref()));
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
