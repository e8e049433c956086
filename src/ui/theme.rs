//! Class-name helpers so pages stay consistent with `assets/main.css`.

use crate::domain::{PricingMode, ProductLine};

pub const BTN_PRIMARY: &str = "btn btn-primary";
pub const BTN_SECONDARY: &str = "btn btn-secondary";
pub const BTN_DANGER_LINK: &str = "link link-danger";
pub const BTN_LINK: &str = "link";
pub const INPUT: &str = "input";
pub const INPUT_NUMERIC: &str = "input input-numeric";
pub const LABEL: &str = "field-label";
pub const PANEL: &str = "panel";
pub const MUTED: &str = "muted";

pub fn price_card(product: ProductLine) -> &'static str {
    match product {
        ProductLine::PremiumCeramic => "panel price-card price-card-featured",
        ProductLine::SolarControl => "panel price-card",
    }
}

pub fn mode_badge(mode: PricingMode) -> (&'static str, &'static str) {
    match mode {
        PricingMode::ShopMinimum => ("Shop minimum", "badge badge-amber"),
        PricingMode::Matrix => ("Tier pricing", "badge badge-sky"),
    }
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-btn nav-btn-active"
    } else {
        "nav-btn"
    }
}
