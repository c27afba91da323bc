use api::{ApiError, Post};
use dioxus::prelude::*;
use ui::{make_client, nav, use_route_session, Navbar};

use super::PostCard;

/// Reader dashboard: the signed-in user's likes, favorites, comment
/// activity and own posts, filtered client-side from fresh fetches.
#[component]
pub fn UserDashboard() -> Element {
    let session = use_route_session();
    let user_id = session().user_id().map(str::to_string);

    let data = use_resource(move || {
        let user_id = user_id.clone();
        async move {
            let Some(user_id) = user_id else {
                return Err(ApiError::Unauthenticated);
            };
            let client = make_client();
            let all = client.list_posts().await?;
            let mine = client.posts_by_author(&user_id).await?;
            Ok((user_id, all, mine))
        }
    });

    if !session().authenticated() {
        nav::redirect(&nav::login_path("/user/dashboard"));
        return rsx! {
            p { class: "page-loading", "Redirecting to login..." }
        };
    }

    let greeting = session()
        .identity
        .map(|claims| {
            if claims.name.is_empty() {
                claims.email
            } else {
                claims.name
            }
        })
        .unwrap_or_default();

    let body = match &*data.read() {
        Some(Ok((uid, all, mine))) => {
            let liked: Vec<Post> = all.iter().filter(|p| p.liked_by(uid)).cloned().collect();
            let favorited: Vec<Post> =
                all.iter().filter(|p| p.favorited_by(uid)).cloned().collect();
            let commented: Vec<Post> = all
                .iter()
                .filter(|p| {
                    p.comments.iter().any(|c| {
                        c.user_id.as_deref() == Some(uid.as_str())
                            || c.user
                                .as_ref()
                                .and_then(|u| u.id.as_deref())
                                == Some(uid.as_str())
                    })
                })
                .cloned()
                .collect();

            rsx! {
                DashboardSection { title: "Posts you liked", posts: liked }
                DashboardSection { title: "Your favorites", posts: favorited }
                DashboardSection { title: "Posts you commented on", posts: commented }
                DashboardSection { title: "Your posts", posts: mine.clone() }
            }
        }
        Some(Err(err)) if err.needs_login() => {
            nav::redirect(&nav::login_path("/user/dashboard"));
            rsx! {
                p { class: "page-loading", "Redirecting to login..." }
            }
        }
        Some(Err(err)) => rsx! {
            p { class: "page-error", "Failed to load dashboard: {err}" }
        },
        None => rsx! {
            p { class: "page-loading", "Loading..." }
        },
    };

    rsx! {
        Navbar {}

        section { class: "page-section",
            h1 { "Hi, {greeting}" }
            {body}
        }
    }
}

#[component]
fn DashboardSection(title: String, posts: Vec<Post>) -> Element {
    rsx! {
        section { class: "dashboard-section",
            h2 { "{title}" }
            if posts.is_empty() {
                p { class: "page-empty", "Nothing here yet." }
            } else {
                div { class: "post-grid",
                    for post in posts {
                        PostCard { key: "{post.id}", post }
                    }
                }
            }
        }
    }
}
