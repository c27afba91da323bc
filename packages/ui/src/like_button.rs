//! Like and favorite buttons with optimistic flips.
//!
//! Both buttons follow the same script: a signed-out press bounces to the
//! login page with the current location recorded (no local mutation — an
//! action that cannot possibly succeed gets no optimistic state), a
//! signed-in press flips the collection through [`crate::toggle`] before
//! the request goes out, and the response confirms or rolls back. While a
//! press is in flight further presses on the same control are ignored, so
//! one control never has two requests racing each other.

use api::Post;
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::{fa_regular_icons, fa_solid_icons};
use dioxus_free_icons::Icon;

use crate::client::make_client;
use crate::nav;
use crate::notice::{push_error, push_success, use_notice};
use crate::session::use_session;
use crate::toggle;

#[component]
pub fn LikeButton(post: Signal<Post>) -> Element {
    let session = use_session();
    let notices = use_notice();
    let mut in_flight = use_signal(|| false);

    let onclick = move |_| {
        if !session.peek().authenticated() {
            push_error(notices, "Please log in to like this post!");
            nav::redirect(&nav::login_path(&nav::current_path()));
            return;
        }
        if in_flight() {
            return;
        }
        let Some(claims) = session.peek().identity.clone() else {
            return;
        };

        let post_id = post.peek().id.clone();
        let user_id = claims.id;
        let turning_on = !post.peek().liked_by(&user_id);
        let flight = {
            let mut current = post.write();
            toggle::press(&mut current.likes, &user_id, &post_id, Utc::now())
        };

        in_flight.set(true);
        spawn(async move {
            let client = make_client();
            match client.toggle_like(&post_id).await {
                Ok(ack) => {
                    let mut current = post.write();
                    toggle::confirm(&mut current.likes, flight, ack.likes);
                    drop(current);
                    push_success(notices, if turning_on { "Liked!" } else { "Like removed!" });
                }
                Err(err) => {
                    let mut current = post.write();
                    toggle::rollback(&mut current.likes, flight);
                    drop(current);
                    if err.needs_login() {
                        nav::redirect(&nav::login_path(&nav::current_path()));
                    } else {
                        push_error(notices, format!("Failed to toggle like: {err}"));
                    }
                }
            }
            in_flight.set(false);
        });
    };

    let current = post();
    let liked = session()
        .user_id()
        .map(|uid| current.liked_by(uid))
        .unwrap_or(false);

    rsx! {
        button {
            class: if liked { "toggle-btn toggle-btn-liked" } else { "toggle-btn" },
            onclick: onclick,
            if liked {
                Icon { width: 20, height: 20, icon: fa_solid_icons::FaHeart }
            } else {
                Icon { width: 20, height: 20, icon: fa_regular_icons::FaHeart }
            }
        }
    }
}

#[component]
pub fn FavoriteButton(post: Signal<Post>) -> Element {
    let session = use_session();
    let notices = use_notice();
    let mut in_flight = use_signal(|| false);

    let onclick = move |_| {
        if !session.peek().authenticated() {
            push_error(notices, "Please log in to favorite this post!");
            nav::redirect(&nav::login_path(&nav::current_path()));
            return;
        }
        if in_flight() {
            return;
        }
        let Some(claims) = session.peek().identity.clone() else {
            return;
        };

        let post_id = post.peek().id.clone();
        let user_id = claims.id;
        let turning_on = !post.peek().favorited_by(&user_id);
        let flight = {
            let mut current = post.write();
            toggle::press(&mut current.favorites, &user_id, &post_id, Utc::now())
        };

        in_flight.set(true);
        spawn(async move {
            let client = make_client();
            match client.toggle_favorite(&post_id).await {
                Ok(ack) => {
                    let mut current = post.write();
                    toggle::confirm(&mut current.favorites, flight, ack.favorites);
                    drop(current);
                    push_success(
                        notices,
                        if turning_on {
                            "Added to favorites!"
                        } else {
                            "Removed from favorites!"
                        },
                    );
                }
                Err(err) => {
                    let mut current = post.write();
                    toggle::rollback(&mut current.favorites, flight);
                    drop(current);
                    if err.needs_login() {
                        nav::redirect(&nav::login_path(&nav::current_path()));
                    } else {
                        push_error(notices, format!("Failed to toggle favorite: {err}"));
                    }
                }
            }
            in_flight.set(false);
        });
    };

    let current = post();
    let favorited = session()
        .user_id()
        .map(|uid| current.favorited_by(uid))
        .unwrap_or(false);

    rsx! {
        button {
            class: if favorited { "toggle-btn toggle-btn-favorited" } else { "toggle-btn" },
            onclick: onclick,
            if favorited {
                Icon { width: 20, height: 20, icon: fa_solid_icons::FaStar }
            } else {
                Icon { width: 20, height: 20, icon: fa_regular_icons::FaStar }
            }
        }
    }
}
