use api::PostStatus;
use dioxus::prelude::*;
use ui::{make_client, use_route_session, Navbar};

use super::PostCard;

/// Landing page: hero plus the latest published posts.
#[component]
pub fn Home() -> Element {
    use_route_session();

    let posts = use_resource(move || async move { make_client().list_posts().await });

    let body = match &*posts.read() {
        Some(Ok(list)) => {
            let recent: Vec<_> = list
                .iter()
                .filter(|post| post.status == PostStatus::Published)
                .take(6)
                .cloned()
                .collect();
            rsx! {
                div { class: "post-grid",
                    for post in recent {
                        PostCard { key: "{post.id}", post }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            p { class: "page-error", "Failed to load posts: {err}" }
        },
        None => rsx! {
            p { class: "page-loading", "Loading..." }
        },
    };

    rsx! {
        Navbar {}

        section { class: "hero",
            h1 { "Welcome to Blogify" }
            p { "Stories, ideas and guides from writers on every topic." }
            a { class: "hero-cta", href: "/blogs", "Browse all posts" }
        }

        section { class: "page-section",
            h2 { "Latest posts" }
            {body}
        }
    }
}
