use api::Post;
use dioxus::prelude::*;

use crate::Route;

const PLACEHOLDER_IMG: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// Card used by every post listing: image, title, excerpt, author, counts.
#[component]
pub fn PostCard(post: Post) -> Element {
    let nav = use_navigator();
    let id = post.id.clone();
    let onclick = move |_| {
        nav.push(Route::PostDetail { id: id.clone() });
    };

    let image = post
        .featured_img
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMG.to_string());
    let date = post.created_at.format("%b %d, %Y").to_string();
    let author = post
        .author
        .as_ref()
        .map(|a| a.display_name().to_string())
        .unwrap_or_else(|| "Unknown Author".to_string());
    let summary = excerpt(&post.content, 160);

    rsx! {
        article { class: "post-card", onclick: onclick,
            div { class: "post-card-media",
                img { src: "{image}", alt: "{post.title}" }
                span { class: "post-card-date", "{date}" }
            }
            div { class: "post-card-body",
                h3 { "{post.title}" }
                p { class: "post-card-excerpt", "{summary}" }
                div { class: "post-card-meta",
                    span { class: "post-card-author", "{author}" }
                    span { class: "post-card-counts",
                        "\u{2665} {post.likes.len()}  \u{1f441} {post.views}"
                    }
                }
            }
        }
    }
}

/// Plain-text preview of the post's HTML content.
fn excerpt(html: &str, limit: usize) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
        if text.chars().count() >= limit {
            text.push_str("...");
            break;
        }
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::excerpt;

    #[test]
    fn test_excerpt_strips_markup() {
        assert_eq!(excerpt("<p>Hello <b>world</b></p>", 160), "Hello world");
    }

    #[test]
    fn test_excerpt_truncates_long_content() {
        let long = format!("<p>{}</p>", "a".repeat(500));
        let summary = excerpt(&long, 160);
        assert!(summary.ends_with("..."));
        assert!(summary.chars().count() <= 164);
    }
}
