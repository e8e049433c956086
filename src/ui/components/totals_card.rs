use dioxus::prelude::*;

use crate::util::format::sqft;

#[component]
pub fn TotalsCard(total_sqft: f64, travel_miles: f64, threshold_sqft: f64) -> Element {
    rsx! {
        div { class: "panel",
            h3 { class: "section-title", "Totals" }
            div { class: "price-row",
                span { "Total Sq Ft" }
                span { class: "strong", {sqft(total_sqft)} }
            }
            div { class: "price-row",
                span { "Miles from 75409" }
                span { class: "strong", "{travel_miles}" }
            }
            p { class: "muted small",
                "Shop minimum applies only when total ≤ {threshold_sqft} sq ft. No stacking with matrix pricing."
            }
        }
    }
}
