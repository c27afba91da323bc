use api::PostStatus;
use dioxus::prelude::*;
use ui::{make_client, use_route_session, Navbar};

use super::PostCard;

/// All published posts.
#[component]
pub fn Blogs() -> Element {
    use_route_session();

    let posts = use_resource(move || async move { make_client().list_posts().await });

    let body = match &*posts.read() {
        Some(Ok(list)) => {
            let published: Vec<_> = list
                .iter()
                .filter(|post| post.status == PostStatus::Published)
                .cloned()
                .collect();
            if published.is_empty() {
                rsx! {
                    p { class: "page-empty", "Nothing has been published yet." }
                }
            } else {
                rsx! {
                    div { class: "post-grid",
                        for post in published {
                            PostCard { key: "{post.id}", post }
                        }
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

        section { class: "page-section",
            h2 { "All posts" }
            {body}
        }
    }
}
