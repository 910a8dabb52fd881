use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-sky-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-3xl items-center gap-3",
                    span { class: "text-2xl", "🎮" }
                    div {
                        h1 { class: "text-xl font-semibold tracking-tight text-sky-200", "{APP_NAME}" }
                        p { class: "text-xs text-slate-500 italic", "Reviews × 40 × price, minus the cuts." }
                    }
                }
            }
            main { class: "mx-auto max-w-3xl px-6 py-10",
                {children}
            }
            footer { class: "mx-auto max-w-3xl px-6 pb-8 text-xs text-slate-600",
                "{APP_NAME} {version_label()} · Figures are rough estimates, not financial advice."
            }
        }
    }
}
