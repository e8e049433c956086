use dioxus::prelude::*;
use tracing::debug;

use crate::{
    app::{persist_user_state, Route},
    domain::{AppState, MetaField, ProductLine},
    infra::clipboard::ClipboardHandle,
    ui::{
        components::{
            line_items::{LineItemEdit, LineItemTable},
            price_card::PriceCard,
            toast::{push_toast, ToastKind, ToastMessage},
            totals_card::TotalsCard,
        },
        pages::proposal::copy_plain_text,
        theme,
    },
};

#[component]
pub fn QuotePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let clipboard = use_context::<ClipboardHandle>();
    let nav = use_navigator();

    let (meta, items, travel_miles, threshold_sqft) = state.with(|st| {
        (
            st.meta.clone(),
            st.line_items.clone(),
            st.travel_miles,
            st.shop_minimum.threshold_sqft,
        )
    });
    let summary = state.with(|st| st.quote());

    let on_meta = {
        let mut state = state.clone();
        move |(field, value): (MetaField, String)| {
            state.with_mut(|st| st.set_meta(field, value));
            persist_user_state(&mut state);
        }
    };

    let on_miles = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            state.with_mut(|st| st.set_travel_miles(&evt.value()));
            persist_user_state(&mut state);
        }
    };

    let on_add_row = {
        let mut state = state.clone();
        move |_| {
            let id = state.with_mut(|st| st.add_line_item());
            debug!(%id, "added line item");
            persist_user_state(&mut state);
        }
    };

    let on_edit = {
        let mut state = state.clone();
        move |edit: LineItemEdit| {
            state.with_mut(|st| st.edit_line_item(&edit.id, edit.field, &edit.value));
            persist_user_state(&mut state);
        }
    };

    let on_duplicate = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |id: String| {
            if state.with_mut(|st| st.duplicate_line_item(&id)).is_some() {
                persist_user_state(&mut state);
            } else {
                push_toast(toasts.clone(), ToastKind::Warning, "That row no longer exists.");
            }
        }
    };

    let on_remove = {
        let mut state = state.clone();
        move |id: String| {
            if state.with_mut(|st| st.remove_line_item(&id)) {
                persist_user_state(&mut state);
            }
        }
    };

    let on_copy = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| copy_plain_text(state.clone(), toasts.clone(), &clipboard)
    };

    rsx! {
        div { class: "stack",
            section { class: "grid grid-3",
                MetaInput { label: "Client First Name", value: meta.client_first_name, field: MetaField::ClientFirstName, placeholder: "First name", on_input: on_meta.clone() }
                MetaInput { label: "Client Email", value: meta.client_email, field: MetaField::ClientEmail, placeholder: "email@domain.com", on_input: on_meta.clone() }
                MetaInput { label: "Client Phone", value: meta.client_phone, field: MetaField::ClientPhone, placeholder: "(###) ###-####", on_input: on_meta.clone() }
                MetaInput { label: "Service Address", value: meta.service_address, field: MetaField::ServiceAddress, placeholder: "Street, City, ST", on_input: on_meta.clone() }
                MetaInput { label: "Project / Property Name", value: meta.project_name, field: MetaField::ProjectName, placeholder: "e.g., Corporate HQ", on_input: on_meta }
                label {
                    span { class: theme::LABEL, "Miles from 75409" }
                    input {
                        class: theme::INPUT,
                        inputmode: "decimal",
                        initial_value: "{travel_miles}",
                        placeholder: "e.g., 42",
                        oninput: on_miles,
                    }
                }
            }

            section { class: "stack-sm",
                div { class: "section-head",
                    h2 { class: "section-title", "Measurements / Line Items" }
                    button { class: theme::BTN_SECONDARY, onclick: on_add_row, "+ Add Row" }
                }
                LineItemTable { items, on_edit, on_duplicate, on_remove }
            }

            section { class: "grid grid-3",
                TotalsCard { total_sqft: summary.total_sqft, travel_miles, threshold_sqft }
                PriceCard { product: ProductLine::PremiumCeramic, result: summary.ceramic }
                PriceCard { product: ProductLine::SolarControl, result: summary.solar }
            }

            section { class: "actions",
                button {
                    class: theme::BTN_PRIMARY,
                    onclick: move |_| { nav.push(Route::Proposal {}); },
                    "Generate Email"
                }
                button { class: theme::BTN_SECONDARY, onclick: on_copy, "Copy Email (Plain Text)" }
            }
        }
    }
}

#[component]
fn MetaInput(
    label: &'static str,
    value: String,
    field: MetaField,
    placeholder: &'static str,
    on_input: EventHandler<(MetaField, String)>,
) -> Element {
    rsx! {
        label {
            span { class: theme::LABEL, "{label}" }
            input {
                class: theme::INPUT,
                value: "{value}",
                placeholder,
                oninput: move |evt| on_input.call((field, evt.value())),
            }
        }
    }
}
