use api::{Category, PostStatus, PostUpdate};
use dioxus::prelude::*;
use ui::{make_client, nav, push_error, push_success, use_notice, use_route_session, Navbar};

/// Editing form for an existing post, including category association.
#[component]
pub fn EditPost(id: String) -> Element {
    let session = use_route_session();
    let notices = use_notice();
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut featured = use_signal(String::new);
    let mut status = use_signal(|| PostStatus::Draft);
    let mut selected_category = use_signal(String::new);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut new_category = use_signal(String::new);
    let mut loaded = use_signal(|| false);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let id_for_loader = id.clone();
    let _loader = use_resource(move || {
        let id = id_for_loader.clone();
        async move {
            let client = make_client();
            match client.get_post(&id).await {
                Ok(post) => {
                    title.set(post.title);
                    content.set(post.content);
                    featured.set(post.featured_img.unwrap_or_default());
                    status.set(post.status);
                    selected_category.set(
                        post.categories
                            .first()
                            .map(|c| c.category_id.clone())
                            .unwrap_or_default(),
                    );
                    loaded.set(true);
                }
                Err(err) => {
                    load_error.set(Some(format!("Failed to load post: {err}")));
                }
            }
            if let Ok(list) = client.list_categories().await {
                categories.set(list);
            }
        }
    });

    if !session().authenticated() {
        nav::redirect(&nav::login_path(&format!("/update/post/{id}")));
        return rsx! {
            p { class: "page-loading", "Redirecting to login..." }
        };
    }

    let id_for_category = id.clone();
    let handle_create_category = move |_| {
        let name = new_category().trim().to_string();
        if name.is_empty() {
            return;
        }
        let post_id = id_for_category.clone();
        spawn(async move {
            let client = make_client();
            match client.create_category(&name).await {
                Ok(category) => {
                    // Attach the fresh category to this post right away;
                    // the eventual PUT carries it as the selection too.
                    match client.add_category_to_post(&post_id, &category.id).await {
                        Ok(()) => push_success(notices, "Category created and added!"),
                        Err(err) => {
                            push_error(notices, format!("Failed to add category to post: {err}"))
                        }
                    }
                    selected_category.set(category.id.clone());
                    categories.write().push(category);
                    new_category.set(String::new());
                }
                Err(err) => {
                    push_error(notices, format!("Failed to create category: {err}"));
                }
            }
        });
    };

    let id_for_submit = id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let id = id_for_submit.clone();
        spawn(async move {
            error.set(None);
            saving.set(true);

            let featured_img = {
                let url = featured().trim().to_string();
                (!url.is_empty()).then_some(url)
            };
            let category_id = {
                let selected = selected_category();
                (!selected.is_empty()).then_some(selected)
            };
            let update = PostUpdate {
                title: title(),
                content: content(),
                featured_img,
                status: status(),
                category_id,
            };

            match make_client().update_post(&id, &update).await {
                Ok(()) => {
                    push_success(notices, "Blog post updated successfully!");
                    nav::redirect(&format!("/blog/{id}"));
                }
                Err(err) => {
                    if err.needs_login() {
                        nav::redirect(&nav::login_path(&format!("/update/post/{id}")));
                    } else {
                        error.set(Some(err.to_string()));
                    }
                }
            }
            saving.set(false);
        });
    };

    let body = if let Some(err) = load_error() {
        rsx! {
            p { class: "page-error", "{err}" }
        }
    } else if !loaded() {
        rsx! {
            p { class: "page-loading", "Loading..." }
        }
    } else {
        rsx! {
            form { class: "editor-form", onsubmit: handle_submit,
                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                label { "Title" }
                input {
                    r#type: "text",
                    value: title(),
                    oninput: move |evt| title.set(evt.value()),
                }

                label { "Content" }
                textarea {
                    class: "editor-content",
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

                label { "Category" }
                select {
                    value: selected_category(),
                    onchange: move |evt| selected_category.set(evt.value()),
                    option { value: "", "Select a category" }
                    for category in categories() {
                        option { key: "{category.id}", value: "{category.id}", "{category.name}" }
                    }
                }
                div { class: "category-create",
                    input {
                        r#type: "text",
                        placeholder: "New category name",
                        value: new_category(),
                        oninput: move |evt| new_category.set(evt.value()),
                    }
                    button {
                        r#type: "button",
                        onclick: handle_create_category,
                        "Add category"
                    }
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
                    if saving() { "Saving..." } else { "Update post" }
                }
            }
        }
    };

    rsx! {
        Navbar {}

        section { class: "page-section editor-page",
            h1 { "Edit Blog Post" }
            {body}
        }
    }
}
