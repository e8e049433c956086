use dioxus::prelude::*;

use crate::domain::{PricingResult, ProductLine};
use crate::ui::theme;
use crate::util::format::money;

#[component]
pub fn PriceCard(product: ProductLine, result: PricingResult) -> Element {
    let (badge_label, badge_class) = theme::mode_badge(result.mode);

    rsx! {
        div { class: theme::price_card(product),
            div { class: "price-card-head",
                div {
                    h3 { class: "price-card-title", "{product.title()}" }
                    p { class: "muted small italic", "{product.tagline()}" }
                }
                span { class: badge_class, "{badge_label}" }
            }
            dl { class: "price-rows",
                PriceRow { label: "Original price", value: money(result.original_price) }
                PriceRow { label: "Tier", value: result.tier_label.clone() }
                PriceRow { label: "Estimated discount", value: format!("{}%", result.savings_percent) }
                PriceRow { label: "Your price", value: money(result.final_price), strong: true }
                PriceRow { label: "You save", value: money(result.savings) }
            }
        }
    }
}

#[component]
fn PriceRow(label: &'static str, value: String, #[props(default)] strong: bool) -> Element {
    let class = if strong { "price-row strong" } else { "price-row" };
    rsx! {
        div { class,
            dt { class: "muted", "{label}" }
            dd { "{value}" }
        }
    }
}
