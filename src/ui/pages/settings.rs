use dioxus::prelude::*;
use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};
use tracing::info;

use crate::{
    app::persist_user_state,
    domain::{AppState, ProductLine, ShopMinimum},
    ui::{
        components::{
            tier_editor::{TierEdit, TierEditor},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::version::version_label,
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut revision = use_signal(|| 0_usize);

    let initial_rules = state.with(|st| st.shop_minimum.clone());
    let mut threshold_input = use_signal(|| initial_rules.threshold_sqft.to_string());
    let mut local_input = use_signal(|| initial_rules.local_price.to_string());
    let mut remote_input = use_signal(|| initial_rules.remote_price.to_string());
    let mut radius_input = use_signal(|| initial_rules.local_radius_miles.to_string());

    let (ceramic, solar, last_saved) = state.with(|st| {
        (
            st.tiers(ProductLine::PremiumCeramic).tiers().to_vec(),
            st.tiers(ProductLine::SolarControl).tiers().to_vec(),
            st.last_saved.as_deref().map(humanize_saved_at),
        )
    });

    let on_edit = {
        let mut state = state.clone();
        move |edit: TierEdit| {
            state.with_mut(|st| st.edit_tier(edit.product, edit.index, edit.field, &edit.value));
            persist_user_state(&mut state);
        }
    };

    let on_add = {
        let mut state = state.clone();
        move |product: ProductLine| {
            state.with_mut(|st| st.tiers_mut(product).add_tier());
            revision += 1;
            persist_user_state(&mut state);
        }
    };

    let on_remove = {
        let mut state = state.clone();
        move |(product, index): (ProductLine, usize)| {
            if state.with_mut(|st| st.tiers_mut(product).remove_tier(index)) {
                revision += 1;
                persist_user_state(&mut state);
            }
        }
    };

    let on_reset_tiers = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| {
                for product in ProductLine::ALL {
                    st.reset_tiers(product);
                }
            });
            revision += 1;
            persist_user_state(&mut state);
            info!("restored default tier tables");
            push_toast(toasts.clone(), ToastKind::Info, "Restored default pricing matrices.");
        }
    };

    let on_apply_rules = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| match parse_rules(
            &threshold_input(),
            &local_input(),
            &remote_input(),
            &radius_input(),
        ) {
            Ok(rules) => {
                info!(?rules, "updated shop minimum rules");
                state.with_mut(|st| st.shop_minimum = rules);
                persist_user_state(&mut state);
                push_toast(toasts.clone(), ToastKind::Success, "Updated shop minimum rules.");
            }
            Err(message) => push_toast(toasts.clone(), ToastKind::Error, message),
        }
    };

    let on_reset_rules = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let defaults = ShopMinimum::default();
            threshold_input.set(defaults.threshold_sqft.to_string());
            local_input.set(defaults.local_price.to_string());
            remote_input.set(defaults.remote_price.to_string());
            radius_input.set(defaults.local_radius_miles.to_string());
            state.with_mut(|st| st.shop_minimum = defaults);
            persist_user_state(&mut state);
            push_toast(toasts.clone(), ToastKind::Info, "Restored default shop minimum rules.");
        }
    };

    rsx! {
        div { class: "stack",
            p { class: "muted", "Update pricing matrices without code changes." }

            TierEditor {
                product: ProductLine::PremiumCeramic,
                tiers: ceramic,
                revision: revision(),
                on_edit: on_edit.clone(),
                on_add: on_add.clone(),
                on_remove: on_remove.clone(),
            }
            TierEditor {
                product: ProductLine::SolarControl,
                tiers: solar,
                revision: revision(),
                on_edit,
                on_add,
                on_remove,
            }
            div { class: "actions",
                button { class: theme::BTN_SECONDARY, onclick: on_reset_tiers, "Reset Matrices" }
            }

            section { class: theme::PANEL,
                h2 { class: "section-title", "Shop Minimum" }
                div { class: "grid grid-4",
                    RuleInput { label: "Applies up to (sq ft)", value: threshold_input }
                    RuleInput { label: "Local price ($)", value: local_input }
                    RuleInput { label: "Remote price ($)", value: remote_input }
                    RuleInput { label: "Local radius (mi)", value: radius_input }
                }
                div { class: "actions",
                    button { class: theme::BTN_PRIMARY, onclick: on_apply_rules, "Apply" }
                    button { class: theme::BTN_SECONDARY, onclick: on_reset_rules, "Reset Defaults" }
                }
            }

            section { class: theme::PANEL,
                h2 { class: "section-title", "About" }
                p { class: theme::MUTED, "Version {version_label()}" }
                if let Some(saved) = last_saved {
                    p { class: theme::MUTED, "Last saved {saved}" }
                } else {
                    p { class: theme::MUTED, "Not saved yet." }
                }
            }
        }
    }
}

#[component]
fn RuleInput(label: &'static str, value: Signal<String>) -> Element {
    let mut value = value;
    rsx! {
        label {
            span { class: theme::LABEL, "{label}" }
            input {
                class: theme::INPUT,
                inputmode: "decimal",
                value: value(),
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}

fn parse_rules(
    threshold: &str,
    local: &str,
    remote: &str,
    radius: &str,
) -> Result<ShopMinimum, String> {
    let field = |raw: &str, name: &str| -> Result<f64, String> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| format!("{name} must be a number"))?;
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(format!("{name} must be zero or more"))
        }
    };

    Ok(ShopMinimum {
        threshold_sqft: field(threshold, "Shop minimum area")?,
        local_price: field(local, "Local price")?,
        remote_price: field(remote, "Remote price")?,
        local_radius_miles: field(radius, "Local radius")?,
    })
}

fn humanize_saved_at(raw: &str) -> String {
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|at| {
            at.format(format_description!("[year]-[month]-[day] [hour]:[minute] UTC"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_string())
}
