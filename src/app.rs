use dioxus::{prelude::*, signals::Signal};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{info, warn};

use crate::{
    domain::AppState,
    infra::clipboard::ClipboardHandle,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{ProposalPage, QuotePage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
        version::APP_VERSION,
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Quote {},
    #[route("/proposal")]
    Proposal {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                info!(
                    line_items = saved.line_items.len(),
                    version = %saved.app_version,
                    "restored saved quote"
                );
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());
    use_context_provider(ClipboardHandle::open);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Writes the current form to disk. Failures are logged and otherwise
/// ignored.
pub fn persist_user_state(state: &mut Signal<AppState>) {
    let saved_at = OffsetDateTime::now_utc().format(&Rfc3339).ok();
    let snapshot = state.with(|st| st.to_persisted(APP_VERSION, saved_at.clone()));
    match save_persisted_state(&snapshot) {
        Ok(_) => state.with_mut(|st| st.last_saved = saved_at),
        Err(err) => warn!(%err, "failed to persist quote state"),
    }
}

#[component]
pub fn Quote() -> Element {
    rsx! { Shell { QuotePage {} } }
}

#[component]
pub fn Proposal() -> Element {
    rsx! { Shell { ProposalPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
