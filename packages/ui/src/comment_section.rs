//! Comment composer and list for a post page.

use api::{Comment, Post};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::client::make_client;
use crate::comments::{self, relative_time, EmptyDraft};
use crate::nav;
use crate::notice::{push_error, push_success, use_notice};
use crate::session::use_session;

#[component]
pub fn CommentSection(post: Signal<Post>) -> Element {
    let session = use_session();
    let notices = use_notice();
    let mut draft = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut form_error = use_signal(|| Option::<String>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        if !session.peek().authenticated() {
            push_error(notices, "Please log in to comment!");
            nav::redirect(&nav::login_path(&nav::current_path()));
            return;
        }
        if submitting() {
            return;
        }
        let Some(claims) = session.peek().identity.clone() else {
            return;
        };

        // Prepend the provisional comment and clear the composer before
        // the request is even built.
        let text = draft.peek().clone();
        let flight = {
            let mut current = post.write();
            match comments::submit(&mut current.comments, &text, &claims, Utc::now()) {
                Ok(flight) => flight,
                Err(EmptyDraft) => {
                    form_error.set(Some("Comment cannot be empty!".to_string()));
                    return;
                }
            }
        };
        draft.set(String::new());
        form_error.set(None);

        let post_id = post.peek().id.clone();
        let content = flight.content.clone();
        submitting.set(true);
        spawn(async move {
            let client = make_client();
            match client.create_comment(&post_id, &content).await {
                Ok(ack) => {
                    let mut current = post.write();
                    comments::confirm(&mut current.comments, flight, ack.id);
                    drop(current);
                    push_success(notices, "Comment posted!");
                }
                Err(err) => {
                    // Take the phantom comment back out and let the user
                    // retry without retyping.
                    let mut current = post.write();
                    let restored = comments::rollback(&mut current.comments, flight);
                    drop(current);
                    draft.set(restored);
                    if err.needs_login() {
                        nav::redirect(&nav::login_path(&nav::current_path()));
                    } else {
                        push_error(notices, format!("Failed to post comment: {err}"));
                    }
                }
            }
            submitting.set(false);
        });
    };

    let ordered = post().comments_newest_first();
    let count = ordered.len();
    let now = Utc::now();

    rsx! {
        section { class: "comments",
            h2 { "Comments ({count})" }

            form { class: "comment-form", onsubmit: onsubmit,
                if let Some(err) = form_error() {
                    div { class: "form-error", "{err}" }
                }
                textarea {
                    placeholder: "Share your thoughts...",
                    rows: 4,
                    value: draft(),
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Posting..." } else { "Post Comment" }
                }
            }

            if count == 0 {
                p { class: "comments-empty",
                    "No comments yet. Be the first to share your thoughts!"
                }
            } else {
                for comment in ordered {
                    CommentRow { key: "{comment.id}", comment, now }
                }
            }
        }
    }
}

#[component]
fn CommentRow(comment: Comment, now: DateTime<Utc>) -> Element {
    let name = comment
        .user
        .as_ref()
        .map(|user| user.display_name().to_string())
        .unwrap_or_else(|| "Anonymous".to_string());
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?');
    let age = relative_time(comment.created_at, now);

    rsx! {
        div { class: "comment",
            div { class: "comment-avatar", "{initial}" }
            div { class: "comment-body",
                div { class: "comment-meta",
                    span { class: "comment-author", "{name}" }
                    span { class: "comment-time", "{age}" }
                }
                p { class: "comment-text", "{comment.content}" }
            }
        }
    }
}
