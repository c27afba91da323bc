//! Dismissable notices for action outcomes.
//!
//! Every error a page action produces is converted to one of these at the
//! point of the action; nothing is left to bubble to a global handler. One
//! notice is shown at a time — a new one replaces the old.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

/// The notice signal provided by [`NoticeProvider`].
pub fn use_notice() -> Signal<Option<Notice>> {
    use_context::<Signal<Option<Notice>>>()
}

pub fn push_success(mut notices: Signal<Option<Notice>>, text: impl Into<String>) {
    notices.set(Some(Notice {
        text: text.into(),
        kind: NoticeKind::Success,
    }));
}

pub fn push_error(mut notices: Signal<Option<Notice>>, text: impl Into<String>) {
    notices.set(Some(Notice {
        text: text.into(),
        kind: NoticeKind::Error,
    }));
}

/// Provides the notice context and renders the current notice, if any,
/// above the children.
#[component]
pub fn NoticeProvider(children: Element) -> Element {
    let notice = use_signal(|| Option::<Notice>::None);
    use_context_provider(|| notice);

    rsx! {
        NoticeHost {}
        {children}
    }
}

#[component]
fn NoticeHost() -> Element {
    let mut notice = use_notice();

    rsx! {
        if let Some(current) = notice() {
            div {
                class: match current.kind {
                    NoticeKind::Success => "notice notice-success",
                    NoticeKind::Error => "notice notice-error",
                },
                span { "{current.text}" }
                button {
                    class: "notice-dismiss",
                    onclick: move |_| notice.set(None),
                    "\u{d7}"
                }
            }
        }
    }
}
