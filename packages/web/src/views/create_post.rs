use api::{PostDraft, PostStatus};
use dioxus::prelude::*;
use ui::{make_client, nav, push_success, use_notice, use_route_session, Navbar};

/// Authoring form for a new post. Drafts stay private until published.
#[component]
pub fn CreatePost() -> Element {
    let session = use_route_session();
    let notices = use_notice();
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut featured = use_signal(String::new);
    let mut status = use_signal(|| PostStatus::Draft);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    if !session().authenticated() {
        nav::redirect(&nav::login_path("/create/post"));
        return rsx! {
            p { class: "page-loading", "Redirecting to login..." }
        };
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            saving.set(true);

            let featured_img = {
                let url = featured().trim().to_string();
                (!url.is_empty()).then_some(url)
            };
            let draft = PostDraft {
                title: title(),
                content: content(),
                featured_img,
                status: status(),
            };

            match make_client().create_post(&draft).await {
                Ok(()) => {
                    push_success(notices, "Blog post created successfully!");
                    nav::redirect("/author/dashboard");
                }
                Err(err) => {
                    if err.needs_login() {
                        nav::redirect(&nav::login_path("/create/post"));
                    } else {
                        error.set(Some(err.to_string()));
                    }
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        Navbar {}

        section { class: "page-section editor-page",
            h1 { "Create a New Blog Post" }

            form { class: "editor-form", onsubmit: handle_submit,
                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                label { "Title" }
                input {
                    r#type: "text",
                    placeholder: "Enter your blog title",
                    value: title(),
                    oninput: move |evt| title.set(evt.value()),
                }

                label { "Content" }
                textarea {
                    class: "editor-content",
                    placeholder: "Write your post (HTML supported)",
                    rows: 14,
                    value: content(),
                    oninput: move |evt| content.set(evt.value()),
                }

                label { "Featured image URL" }
                input {
                    r#type: "url",
                    placeholder: "https://...",
                    value: featured(),
                    oninput: move |evt| featured.set(evt.value()),
                }

                label { "Status" }
                select {
                    value: status().label().to_lowercase(),
                    onchange: move |evt| {
                        status.set(if evt.value() == "published" {
                            PostStatus::Published
                        } else {
                            PostStatus::Draft
                        });
                    },
                    option { value: "draft", "Draft" }
                    option { value: "published", "Published" }
                }

                button {
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Publishing..." } else { "Create post" }
                }
            }
        }
    }
}
