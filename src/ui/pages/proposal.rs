use dioxus::prelude::*;
use tracing::warn;

use crate::{
    app::Route,
    domain::{AppState, Proposal},
    infra::{
        clipboard::{ClipboardHandle, TextClipboard},
        export::export_proposal,
    },
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

const COPIED_MESSAGE: &str = "Email (plain text) copied. Your mail app will use your signature.";
const CLIPBOARD_FALLBACK_MESSAGE: &str = "Clipboard not available. Use the preview to copy.";

/// Copies the plain-text proposal, pointing the user at the preview when
/// the clipboard is unavailable.
pub fn copy_plain_text(
    state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    clipboard: &impl TextClipboard,
) {
    let rendered = state.with(|st| {
        let summary = st.quote();
        Proposal::new(&st.meta, &summary).plain_text()
    });
    match rendered {
        Ok(text) => {
            let (kind, message) = copy_feedback(clipboard, &text);
            push_toast(toasts, kind, message);
        }
        Err(err) => {
            warn!(%err, "could not render plain-text proposal");
            push_toast(toasts, ToastKind::Error, format!("Failed to build email: {err}"));
        }
    }
}

fn copy_feedback(clipboard: &impl TextClipboard, text: &str) -> (ToastKind, &'static str) {
    match clipboard.set_text(text) {
        Ok(()) => (ToastKind::Success, COPIED_MESSAGE),
        Err(_) => (ToastKind::Error, CLIPBOARD_FALLBACK_MESSAGE),
    }
}

#[component]
pub fn ProposalPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let clipboard = use_context::<ClipboardHandle>();
    let nav = use_navigator();

    let (subject, preview, mailto) = state.with(|st| {
        let summary = st.quote();
        let proposal = Proposal::new(&st.meta, &summary);
        let mailto = match proposal.mailto_link() {
            Ok(url) => Some(url.to_string()),
            Err(err) => {
                warn!(%err, "could not build mailto link");
                None
            }
        };
        let preview = proposal.html_fragment().unwrap_or_else(|err| {
            warn!(%err, "could not render proposal preview");
            "<p>Preview unavailable.</p>".to_string()
        });
        (proposal.subject(), preview, mailto)
    });

    let on_copy = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| copy_plain_text(state.clone(), toasts.clone(), &clipboard)
    };

    let on_export = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let (project_name, rendered) = state.with(|st| {
                let summary = st.quote();
                (
                    st.meta.project_name.clone(),
                    Proposal::new(&st.meta, &summary).html_document(),
                )
            });
            let html = match rendered {
                Ok(html) => html,
                Err(err) => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        format!("Failed to build proposal: {err}"),
                    );
                    return;
                }
            };
            match export_proposal(&project_name, &html) {
                Ok(path) => push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    format!("Saved proposal to {}", path.display()),
                ),
                Err(err) => push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Failed to save proposal: {err}"),
                ),
            }
        }
    };

    rsx! {
        div { class: "panel proposal",
            div { class: "section-head",
                div {
                    h2 { class: "section-title", "Email Preview" }
                    p { class: "muted small", "Subject: {subject}" }
                }
                div { class: "actions",
                    button { class: theme::BTN_PRIMARY, onclick: on_copy, "Copy Plain Text" }
                    if let Some(href) = mailto {
                        a { class: theme::BTN_SECONDARY, href, target: "_blank", "Open in Mail" }
                    }
                    button { class: theme::BTN_SECONDARY, onclick: on_export, "Save HTML" }
                    button {
                        class: theme::BTN_SECONDARY,
                        onclick: move |_| { nav.push(Route::Quote {}); },
                        "Close"
                    }
                }
            }
            article { class: "email-preview", dangerous_inner_html: "{preview}" }
        }
    }
}
