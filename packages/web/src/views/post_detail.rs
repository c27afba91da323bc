use api::{ApiError, Post, PostStatus};
use dioxus::prelude::*;
use ui::{make_client, use_route_session, CommentSection, FavoriteButton, LikeButton, Navbar};

const PLACEHOLDER_IMG: &str = "https://via.placeholder.com/800x400?text=No+Image";

/// A single post: content, like/favorite affordances, comments.
#[component]
pub fn PostDetail(id: String) -> Element {
    use_route_session();

    let fetched = use_resource(move || {
        let id = id.clone();
        async move { make_client().get_post(&id).await }
    });

    let body = match &*fetched.read() {
        Some(Ok(post)) => rsx! {
            PostView { post: post.clone() }
        },
        Some(Err(ApiError::NotFound)) => rsx! {
            div { class: "page-empty", "Post not found" }
        },
        Some(Err(err)) => rsx! {
            p { class: "page-error", "Failed to fetch blog post: {err}" }
        },
        None => rsx! {
            p { class: "page-loading", "Loading..." }
        },
    };

    rsx! {
        Navbar {}

        section { class: "post-page",
            {body}
        }
    }
}

/// The loaded post. Holds the page's own mutable copy, which the
/// like/favorite buttons and the comment section update optimistically.
#[component]
fn PostView(post: Post) -> Element {
    let post = use_signal(move || post);

    let current = post();
    let image = current
        .featured_img
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMG.to_string());
    let author = current
        .author
        .as_ref()
        .map(|a| a.display_name().to_string())
        .unwrap_or_else(|| "Unknown Author".to_string());
    let date = current.created_at.format("%b %d, %Y").to_string();
    let reading = current
        .reading_time
        .map(|mins| format!("{mins} min read"))
        .unwrap_or_else(|| "N/A".to_string());
    let status_class = match current.status {
        PostStatus::Published => "post-status post-status-published",
        PostStatus::Draft => "post-status post-status-draft",
    };

    rsx! {
        article { class: "post-detail",
            img { class: "post-detail-image", src: "{image}", alt: "{current.title}" }
            h1 { "{current.title}" }

            div { class: "post-detail-meta",
                p { "By "
                    span { class: "post-detail-author", "{author}" }
                }
                div { class: "post-detail-badges",
                    span { "{date}" }
                    span { "{reading}" }
                    span { "{current.views} views" }
                    span { "{current.likes.len()} likes" }
                }
            }

            div { class: "post-detail-actions",
                LikeButton { post }
                FavoriteButton { post }
            }

            div { class: "post-detail-content", dangerous_inner_html: "{current.content}" }

            CommentSection { post }

            div { class: "post-detail-footer",
                p { "Status: "
                    span { class: status_class, "{current.status.label()}" }
                }
                a { class: "back-link", href: "/blogs", "Back" }
            }
        }
    }
}
