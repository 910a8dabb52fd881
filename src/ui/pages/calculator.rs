use dioxus::prelude::*;

use crate::{
    app::fetch_game_data,
    domain::{InputMode, RawInputs, RevenueBreakdown, Session},
    infra::steam::StoreClient,
    ui::{
        components::{
            fetched_preview::FetchedPreview,
            kpi_card::KpiCard,
            number_field::NumberField,
            toast::{push_error, ToastMessage},
        },
        theme,
    },
    util::format::{format_count, format_currency, format_revenue},
};

#[component]
pub fn CalculatorPage() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let client = use_context::<Option<StoreClient>>();

    let review_count = use_signal(String::new);
    let price = use_signal(String::new);
    let mut steam_url = use_signal(String::new);
    let review_override = use_signal(String::new);
    let developer_count = use_signal(String::new);
    let development_years = use_signal(String::new);

    let mut breakdown = use_signal(|| None::<RevenueBreakdown>);

    let mode = session.with(|st| st.mode);
    let fetching = session.with(|st| st.is_fetching());
    let fetched = session.with(|st| st.fetched().cloned());
    let per_developer = session.with(|st| st.per_developer());
    let show_per_dev = breakdown().is_some();

    let mut calculate_total = move || {
        let raw = RawInputs {
            review_count: review_count(),
            price: price(),
            review_override: review_override(),
        };
        match session.with_mut(|st| st.calculate_total_revenue(&raw)) {
            Ok(result) => breakdown.set(Some(result)),
            Err(err) => push_error(toasts, &err),
        }
    };

    let mut calculate_per_dev = move || {
        let outcome = session
            .with_mut(|st| st.calculate_per_developer(&developer_count(), &development_years()));
        if let Err(err) = outcome {
            push_error(toasts, &err);
        }
    };

    let on_fetch = move |_| {
        let client = client.clone();
        let page_url = steam_url();
        spawn(fetch_game_data(session, toasts, client, page_url));
    };

    let fetch_label = if fetching {
        "🔄 Fetching..."
    } else {
        "🔍 Fetch Game Data"
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::PANEL} space-y-6 p-6",
                h2 { class: "text-lg font-semibold text-slate-100", "Total Revenue" }

                div { class: "flex gap-2",
                    for option in [InputMode::Manual, InputMode::Fetched] {
                        button {
                            class: theme::btn_toggle(mode == option),
                            onclick: move |_| session.with_mut(|st| st.set_mode(option)),
                            "{option.label()}"
                        }
                    }
                }

                match mode {
                    InputMode::Manual => rsx! {
                        div { class: "flex flex-wrap gap-4",
                            NumberField {
                                label: "Number of reviews",
                                value: review_count,
                                placeholder: "e.g. 1000",
                                step: "1",
                                on_enter: move |_| calculate_total(),
                            }
                            NumberField {
                                label: "Steam price (USD)",
                                value: price,
                                placeholder: "e.g. 9.99",
                                step: "0.01",
                                on_enter: move |_| calculate_total(),
                            }
                        }
                    },
                    InputMode::Fetched => rsx! {
                        div { class: "space-y-4",
                            div { class: "flex flex-wrap items-end gap-4",
                                div { class: "flex-1 min-w-[260px]",
                                    label { class: "{theme::LABEL}", "Steam store URL" }
                                    input {
                                        class: theme::INPUT_TEXT,
                                        r#type: "url",
                                        placeholder: "https://store.steampowered.com/app/620/Portal_2/",
                                        value: steam_url(),
                                        oninput: move |evt: FormEvent| steam_url.set(evt.value()),
                                    }
                                }
                                button {
                                    class: theme::BTN_PRIMARY,
                                    disabled: fetching,
                                    onclick: on_fetch,
                                    "{fetch_label}"
                                }
                            }
                            if let Some(record) = fetched {
                                FetchedPreview {
                                    record,
                                    review_override,
                                    on_enter: move |_| calculate_total(),
                                }
                            }
                        }
                    },
                }

                button {
                    class: theme::BTN_PRIMARY,
                    onclick: move |_| calculate_total(),
                    "Calculate Total Revenue"
                }

                if let Some(result) = breakdown() {
                    RevenueResult { breakdown: result }
                }
            }

            if show_per_dev {
                section { class: "{theme::PANEL} space-y-6 p-6 result-reveal",
                    h2 { class: "text-lg font-semibold text-slate-100", "Revenue per Developer" }
                    div { class: "flex flex-wrap gap-4",
                        NumberField {
                            label: "Number of developers",
                            value: developer_count,
                            placeholder: "e.g. 2",
                            step: "1",
                            on_enter: move |_| calculate_per_dev(),
                        }
                        NumberField {
                            label: "Development time (years)",
                            value: development_years,
                            placeholder: "e.g. 1.5",
                            step: "0.5",
                            on_enter: move |_| calculate_per_dev(),
                        }
                    }
                    button {
                        class: theme::BTN_SECONDARY,
                        onclick: move |_| calculate_per_dev(),
                        "Calculate per Developer"
                    }
                    if let Some(result) = per_developer {
                        div { class: "grid gap-4 sm:grid-cols-2",
                            KpiCard {
                                title: "Revenue per developer".to_string(),
                                value: format!("${}", format_currency(result.revenue_per_developer)),
                                description: Some("Total revenue ÷ developers".to_string()),
                            }
                            KpiCard {
                                title: "Yearly per developer".to_string(),
                                value: format!("${}", format_currency(result.yearly_per_developer)),
                                description: Some("Per developer ÷ years of development".to_string()),
                                highlight: true,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RevenueResult(breakdown: RevenueBreakdown) -> Element {
    rsx! {
        div { class: "grid gap-4 sm:grid-cols-2",
            KpiCard {
                title: "Estimated users".to_string(),
                value: format_count(breakdown.estimated_users),
                description: Some("Reviews × 40".to_string()),
            }
            KpiCard {
                title: "Gross revenue".to_string(),
                value: format!("${}", format_revenue(breakdown.gross_revenue)),
                description: Some("Users × price".to_string()),
            }
            KpiCard {
                title: "After Steam cut".to_string(),
                value: format!("${}", format_revenue(breakdown.after_platform_cut)),
                description: Some("Steam keeps 30%".to_string()),
            }
            KpiCard {
                title: "After discounts & regional pricing".to_string(),
                value: format!("${}", format_revenue(breakdown.after_market_adjustment)),
                description: Some("A further 30% off".to_string()),
            }
            KpiCard {
                title: "Estimated net revenue".to_string(),
                value: format!("${}", format_revenue(breakdown.final_revenue)),
                description: Some("After a 10% uncertainty buffer".to_string()),
                highlight: true,
            }
        }
    }
}
