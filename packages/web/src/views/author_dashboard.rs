use api::Post;
use dioxus::prelude::*;
use ui::{make_client, nav, push_error, push_success, use_notice, use_route_session, Navbar};

use crate::Route;

/// Author workspace: the signed-in author's posts with edit and delete.
#[component]
pub fn AuthorDashboard() -> Element {
    let session = use_route_session();
    let notices = use_notice();
    let nav_hook = use_navigator();
    let mut posts = use_signal(Vec::<Post>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let user_id = session().user_id().map(str::to_string);
    let _loader = use_resource(move || {
        let user_id = user_id.clone();
        async move {
            let Some(user_id) = user_id else {
                loading.set(false);
                return;
            };
            match make_client().posts_by_author(&user_id).await {
                Ok(mine) => posts.set(mine),
                Err(err) => {
                    if err.needs_login() {
                        nav::redirect(&nav::login_path("/author/dashboard"));
                    } else {
                        error.set(Some(format!("Failed to load your posts: {err}")));
                    }
                }
            }
            loading.set(false);
        }
    });

    if !session().authenticated() {
        nav::redirect(&nav::login_path("/author/dashboard"));
        return rsx! {
            p { class: "page-loading", "Redirecting to login..." }
        };
    }

    let handle_delete = move |post_id: String| {
        spawn(async move {
            match make_client().delete_post(&post_id).await {
                Ok(()) => {
                    posts.write().retain(|post| post.id != post_id);
                    push_success(notices, "Post deleted successfully!");
                }
                Err(err) => {
                    if err.needs_login() {
                        nav::redirect(&nav::login_path("/author/dashboard"));
                    } else {
                        push_error(notices, format!("Failed to delete post: {err}"));
                    }
                }
            }
        });
    };

    let body = if loading() {
        rsx! {
            p { class: "page-loading", "Loading..." }
        }
    } else if let Some(err) = error() {
        rsx! {
            p { class: "page-error", "{err}" }
        }
    } else if posts().is_empty() {
        rsx! {
            p { class: "page-empty", "You haven't written anything yet." }
        }
    } else {
        rsx! {
            div { class: "author-posts",
                for post in posts() {
                    AuthorPostRow { key: "{post.id}", post, on_delete: handle_delete }
                }
            }
        }
    };

    rsx! {
        Navbar {}

        section { class: "page-section",
            div { class: "page-heading",
                h1 { "Your posts" }
                button {
                    class: "navbar-btn navbar-btn-primary",
                    onclick: move |_| {
                        nav_hook.push(Route::CreatePost {});
                    },
                    "New post"
                }
            }
            {body}
        }
    }
}

#[component]
fn AuthorPostRow(post: Post, on_delete: EventHandler<String>) -> Element {
    let nav_hook = use_navigator();
    let edit_id = post.id.clone();
    let delete_id = post.id.clone();
    let date = post.created_at.format("%b %d, %Y").to_string();

    rsx! {
        div { class: "author-post-row",
            div { class: "author-post-info",
                h3 { "{post.title}" }
                div { class: "author-post-meta",
                    span { "{post.status.label()}" }
                    span { "{date}" }
                    span { "{post.views} views" }
                    span { "{post.likes.len()} likes" }
                    span { "{post.comments.len()} comments" }
                }
            }
            div { class: "author-post-actions",
                button {
                    class: "navbar-btn",
                    onclick: move |_| {
                        nav_hook.push(Route::EditPost { id: edit_id.clone() });
                    },
                    "Edit"
                }
                button {
                    class: "navbar-btn navbar-btn-danger",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
