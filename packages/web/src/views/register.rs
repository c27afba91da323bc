use dioxus::prelude::*;
use ui::{make_client, use_route_session, Navbar};

/// Registration form. The backend answers with a confirmation, not a
/// token, so a fresh account still signs in through the login page.
#[component]
pub fn Register() -> Element {
    use_route_session();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }
            if p != confirm() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match make_client().register(&n, &e, &p).await {
                Ok(()) => {
                    success.set(true);
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    confirm.set(String::new());
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        Navbar {}

        section { class: "auth-page",
            div { class: "auth-card",
                h1 { "Join the Journey" }
                p { class: "auth-subtitle", "Create an account to start writing." }

                if success() {
                    div { class: "form-success",
                        "User registered successfully! "
                        a { href: "/login", "Sign in" }
                    }
                }

                form { onsubmit: handle_submit,
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    input {
                        r#type: "text",
                        placeholder: "Full name",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: confirm(),
                        oninput: move |evt| confirm.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign up" }
                    }
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    a { href: "/login", "Sign in" }
                }
            }
        }
    }
}
