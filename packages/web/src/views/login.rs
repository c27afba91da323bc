use dioxus::prelude::*;
use ui::{make_client, nav, refresh_session, use_route_session, Navbar};

/// Login form. Honors a `returnUrl` query parameter so an action that
/// bounced the user here can land them back where they were headed.
#[component]
pub fn Login() -> Element {
    let session = use_route_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: go straight to the recorded destination.
    if session().authenticated() {
        let target =
            nav::return_target(&nav::current_query_param("returnUrl").unwrap_or_default());
        nav::redirect(&target);
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            if email().trim().is_empty() || password().is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match make_client().login(&email(), &password()).await {
                Ok(_) => {
                    refresh_session(session);
                    let target = nav::return_target(
                        &nav::current_query_param("returnUrl").unwrap_or_default(),
                    );
                    nav::redirect(&target);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                    password.set(String::new());
                }
            }
        });
    };

    rsx! {
        Navbar {}

        section { class: "auth-page",
            div { class: "auth-card",
                h1 { "Welcome back" }
                p { class: "auth-subtitle", "Sign in to like, comment and write." }

                form { onsubmit: handle_submit,
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
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
                    button {
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                }

                p { class: "auth-switch",
                    "New here? "
                    a { href: "/signup", "Create an account" }
                }
            }
        }
    }
}
