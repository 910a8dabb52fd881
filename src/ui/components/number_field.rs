use dioxus::prelude::*;

use crate::domain::field_state;
use crate::ui::theme;

/// Numeric input that colours itself by validation state and reports Enter.
#[component]
pub fn NumberField(
    label: &'static str,
    value: Signal<String>,
    placeholder: &'static str,
    #[props(default = "any")] step: &'static str,
    on_enter: EventHandler<()>,
) -> Element {
    let mut value = value;
    let class = theme::input_class(field_state(&value()));

    rsx! {
        div { class: "flex-1 min-w-[180px]",
            label { class: "{theme::LABEL}", "{label}" }
            input {
                class: class,
                r#type: "number",
                min: "0",
                step: step,
                inputmode: "decimal",
                placeholder: placeholder,
                value: value(),
                oninput: move |evt: FormEvent| value.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        on_enter.call(());
                    }
                },
            }
        }
    }
}
