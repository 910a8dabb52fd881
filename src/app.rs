use dioxus::{prelude::*, signals::Signal};

use crate::{
    config::AppConfig,
    domain::{fetched_message, Session},
    error::CalcError,
    infra::steam::StoreClient,
    ui::{
        components::toast::{push_error, push_toast, Toast, ToastKind, ToastMessage},
        pages::CalculatorPage,
        shell::Shell,
    },
    util::assets,
};

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::from_env);
    use_hook(|| {
        if !assets::tailwind_available() {
            tracing::warn!("assets/tailwind.css was not built; styling will be minimal");
        }
    });
    use_context_provider(|| config.clone());

    let session = use_signal(Session::default);
    use_context_provider(|| session);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let client = use_hook(|| match StoreClient::from_config(&config) {
        Ok(client) => Some(client),
        Err(err) => {
            tracing::error!("Failed to initialise Steam client: {err}");
            None
        }
    });
    use_context_provider(|| client.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Shell { CalculatorPage {} }
        Toast {}
    }
}

/// Runs one acquisition for `page_url` under the session's fetch lock and
/// reports the outcome in the advisory slot.
pub async fn fetch_game_data(
    mut session: Signal<Session>,
    toasts: Signal<Vec<ToastMessage>>,
    client: Option<StoreClient>,
    page_url: String,
) {
    if let Err(err) = session.with_mut(|st| st.begin_fetch()) {
        push_error(toasts, &err);
        return;
    }

    let outcome = match client {
        Some(client) => client.acquire(&page_url).await,
        None => Err(CalcError::fetch(crate::error::FETCH_FAILED_MESSAGE)),
    };

    match session.with_mut(|st| st.complete_fetch(outcome)) {
        Ok(record) => push_toast(toasts, ToastKind::Info, fetched_message(&record)),
        Err(err) => push_error(toasts, &err),
    }
}
