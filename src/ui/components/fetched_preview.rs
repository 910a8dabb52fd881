use dioxus::prelude::*;

use crate::domain::FetchedRecord;
use crate::ui::{components::number_field::NumberField, theme};
use crate::util::format::{format_count, format_price};

/// Summary of the last fetched game. Shows a review-count field when the
/// storefront had no usable total.
#[component]
pub fn FetchedPreview(
    record: FetchedRecord,
    review_override: Signal<String>,
    on_enter: EventHandler<()>,
) -> Element {
    let reviews_label = match record.review_count {
        Some(count) => format_count(count as f64),
        None => "Manual input required".to_string(),
    };

    rsx! {
        div { class: "{theme::PANEL} space-y-3 p-4",
            h3 { class: "text-sm font-semibold text-slate-200", "{record.name}" }
            div { class: "grid grid-cols-2 gap-4 text-sm",
                div {
                    p { class: "{theme::LABEL}", "Reviews" }
                    p { class: "{theme::TEXT_SECONDARY}", "{reviews_label}" }
                }
                div {
                    p { class: "{theme::LABEL}", "Price" }
                    p { class: "{theme::TEXT_SECONDARY}", "{format_price(record.price)}" }
                }
            }
            if record.needs_review_override() {
                NumberField {
                    label: "Review count (from the Steam page)",
                    value: review_override,
                    placeholder: "e.g. 1250",
                    step: "1",
                    on_enter,
                }
            }
        }
    }
}
