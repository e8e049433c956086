use dioxus::prelude::*;

use crate::domain::{PriceTier, ProductLine, TierField};
use crate::ui::theme;

#[derive(Clone, Debug, PartialEq)]
pub struct TierEdit {
    pub product: ProductLine,
    pub index: usize,
    pub field: TierField,
    pub value: String,
}

fn max_display(tier: &PriceTier) -> String {
    tier.max_sqft
        .map(|max| max.to_string())
        .unwrap_or_else(|| "Infinity".to_string())
}

/// Grid editor for one product's tier table. Leave "Max sq ft" as
/// `Infinity` for the open-ended last tier.
#[component]
pub fn TierEditor(
    product: ProductLine,
    tiers: Vec<PriceTier>,
    // Bumped whenever rows are added, removed or reset so the uncontrolled
    // inputs remount with fresh values.
    revision: usize,
    on_edit: EventHandler<TierEdit>,
    on_add: EventHandler<ProductLine>,
    on_remove: EventHandler<(ProductLine, usize)>,
) -> Element {
    let edit = move |index: usize, field: TierField| {
        move |evt: FormEvent| {
            on_edit.call(TierEdit {
                product,
                index,
                field,
                value: evt.value(),
            })
        }
    };

    rsx! {
        fieldset { class: "panel tier-editor",
            legend { class: "section-title", "{product.matrix_name()}" }
            if tiers.is_empty() {
                p { class: "muted small", "No tiers. Quotes price at $0 until one is added." }
            }
            for (index, tier) in tiers.into_iter().enumerate() {
                div { key: "{product:?}-{revision}-{index}", class: "tier-row",
                    label {
                        span { class: theme::LABEL, "Min sq ft" }
                        input { class: theme::INPUT, initial_value: "{tier.min_sqft}", oninput: edit(index, TierField::Min) }
                    }
                    label {
                        span { class: theme::LABEL, "Max sq ft" }
                        input { class: theme::INPUT, initial_value: max_display(&tier), oninput: edit(index, TierField::Max) }
                    }
                    label {
                        span { class: theme::LABEL, "Rate $/sq ft" }
                        input { class: theme::INPUT, initial_value: "{tier.rate}", oninput: edit(index, TierField::Rate) }
                    }
                    label {
                        span { class: theme::LABEL, "Tier label" }
                        input { class: theme::INPUT, value: "{tier.label}", oninput: edit(index, TierField::Label) }
                    }
                    div { class: "tier-row-actions",
                        button {
                            class: theme::BTN_DANGER_LINK,
                            onclick: move |_| on_remove.call((product, index)),
                            "Remove"
                        }
                    }
                }
            }
            div {
                button {
                    class: theme::BTN_SECONDARY,
                    onclick: move |_| on_add.call(product),
                    "+ Add Tier"
                }
            }
        }
    }
}
