//! Single-slot advisory message.
//!
//! A new message of either kind replaces the one on screen. Each message
//! dismisses itself after the configured delay or on click.

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::error::CalcError;
use crate::util::generate_id;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| replace_slot(entries, message));
}

pub fn push_error(toasts: Signal<Vec<ToastMessage>>, err: &CalcError) {
    tracing::debug!("Advisory error: {err:?}");
    push_toast(toasts, ToastKind::Error, err.to_string());
}

fn replace_slot(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    entries.clear();
    entries.push(message);
}

fn dismiss(entries: &mut Vec<ToastMessage>, id: &str) {
    entries.retain(|toast| toast.id != id);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let views = toasts()
        .into_iter()
        .map(ToastView::from)
        .collect::<Vec<_>>();

    if views.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 top-4 flex justify-center",
            ul {
                class: "space-y-3",
                for view in views {
                    ToastCard { key: "{view.id}", view: view.clone(), toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let config = use_context::<AppConfig>();
    let toast_id = view.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = toast_id.clone();
        let delay = config.toast_dismiss;
        async move {
            tokio::time::sleep(delay).await;
            toasts.with_mut(|items| dismiss(items, &id));
        }
    });

    let class = format!(
        "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur toast-slide-in {}",
        view.theme
    );
    let mut toasts = toasts;
    rsx! {
        li {
            class: class,
            span { class: "text-lg", "{view.icon}" }
            p { class: "text-sm font-medium", "{view.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| {
                    let target = view.id.clone();
                    toasts.with_mut(|items| dismiss(items, &target));
                },
                "Dismiss"
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastView {
    id: String,
    text: String,
    theme: &'static str,
    icon: &'static str,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let (theme, icon) = match message.kind {
            ToastKind::Info => ("border-sky-500/40 bg-sky-500/10 text-sky-100", "ℹ️"),
            ToastKind::Error => ("border-rose-500/40 bg-rose-500/10 text-rose-100", "⛔"),
        };

        ToastView {
            id: message.id,
            text: message.text,
            theme,
            icon,
        }
    }
}
