use dioxus::prelude::*;

use crate::client::make_client;
use crate::nav;
use crate::session::{refresh_session, use_session};

/// Site header: brand, navigation links, and the auth affordances the
/// current session allows.
#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let current = session();
    let authenticated = current.authenticated();
    let identity = current.identity.as_ref().map(|claims| {
        let name = if claims.name.is_empty() {
            claims.email.clone()
        } else {
            claims.name.clone()
        };
        (claims.initial(), name)
    });

    let onclick_logout = move |_| {
        make_client().logout();
        refresh_session(session);
        nav::redirect("/login");
    };

    rsx! {
        header { class: "navbar",
            a { class: "navbar-brand", href: "/", "Blogify" }

            nav { class: "navbar-links",
                a { href: "/", "Home" }
                a { href: "/blogs", "Blogs" }
                if authenticated {
                    a { href: "/create/post", "Write" }
                    a { href: "/user/dashboard", "Dashboard" }
                }
            }

            div { class: "navbar-auth",
                if let Some((initial, name)) = identity {
                    span { class: "navbar-avatar", "{initial}" }
                    span { class: "navbar-user", "{name}" }
                    button { class: "navbar-btn", onclick: onclick_logout, "Logout" }
                } else {
                    a { class: "navbar-btn", href: "/login", "Login" }
                    a { class: "navbar-btn navbar-btn-primary", href: "/signup", "Sign up" }
                }
            }
        }
    }
}
