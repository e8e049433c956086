//! Tiered square-footage pricing with a shop-minimum floor.
//!
//! Everything in here is a pure function of its arguments. Callers recompute
//! a [`QuoteSummary`] whenever line items, tier tables or the travel distance
//! change.

use serde::{Deserialize, Serialize};

use super::entities::{LineItem, PriceTier};

pub const SHOP_MIN_SQFT: f64 = 18.0;
pub const SHOP_MIN_LOCAL: f64 = 250.0;
pub const SHOP_MIN_REMOTE: f64 = 350.0;
pub const SHOP_MIN_LOCAL_RADIUS_MILES: f64 = 50.0;

const EMPTY_TABLE_LABEL: &str = "No tiers configured";

/// Flat floor price for very small jobs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShopMinimum {
    /// Jobs with `0 < sqft <= threshold_sqft` are billed the flat price.
    pub threshold_sqft: f64,
    pub local_price: f64,
    pub remote_price: f64,
    /// Distances strictly above this use `remote_price`.
    pub local_radius_miles: f64,
}

impl Default for ShopMinimum {
    fn default() -> Self {
        Self {
            threshold_sqft: SHOP_MIN_SQFT,
            local_price: SHOP_MIN_LOCAL,
            remote_price: SHOP_MIN_REMOTE,
            local_radius_miles: SHOP_MIN_LOCAL_RADIUS_MILES,
        }
    }
}

impl ShopMinimum {
    pub fn applies(&self, sqft: f64) -> bool {
        sqft > 0.0 && sqft <= self.threshold_sqft
    }

    pub fn price_for(&self, travel_miles: f64) -> f64 {
        if travel_miles > self.local_radius_miles {
            self.remote_price
        } else {
            self.local_price
        }
    }

    pub fn label(&self) -> String {
        format!("Shop Minimum (≤{} sq ft)", self.threshold_sqft)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingMode {
    ShopMinimum,
    Matrix,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub mode: PricingMode,
    pub tier_label: String,
    /// Baseline at the table's highest (first) rate, or the shop minimum.
    pub original_price: f64,
    pub final_price: f64,
    pub savings: f64,
    pub savings_percent: u32,
}

/// Prices one product line with the default shop-minimum rules.
pub fn price_film(tiers: &[PriceTier], total_sqft: f64, travel_miles: f64) -> PricingResult {
    price_film_with(tiers, total_sqft, travel_miles, &ShopMinimum::default())
}

/// Prices one product line for a job of `total_sqft`.
///
/// The shop minimum overrides the table entirely when it applies. Otherwise
/// the first tier containing `total_sqft` sets the rate, falling back to the
/// first tier when none does. That fallback keeps a gapped table from ever
/// blocking a quote.
pub fn price_film_with(
    tiers: &[PriceTier],
    total_sqft: f64,
    travel_miles: f64,
    rules: &ShopMinimum,
) -> PricingResult {
    let sqft = non_negative(total_sqft);
    let miles = non_negative(travel_miles);

    if rules.applies(sqft) {
        let price = rules.price_for(miles);
        return PricingResult {
            mode: PricingMode::ShopMinimum,
            tier_label: rules.label(),
            original_price: price,
            final_price: price,
            savings: 0.0,
            savings_percent: 0,
        };
    }

    let Some(tier) = find_tier(tiers, sqft) else {
        return PricingResult {
            mode: PricingMode::Matrix,
            tier_label: EMPTY_TABLE_LABEL.to_string(),
            original_price: 0.0,
            final_price: 0.0,
            savings: 0.0,
            savings_percent: 0,
        };
    };

    let original_price = highest_rate(tiers) * sqft;
    let final_price = tier.rate * sqft;
    let savings = (original_price - final_price).max(0.0);
    let savings_percent = if original_price > 0.0 {
        (savings / original_price * 100.0).round().clamp(0.0, 100.0) as u32
    } else {
        0
    };

    PricingResult {
        mode: PricingMode::Matrix,
        tier_label: tier.label.clone(),
        original_price,
        final_price,
        savings,
        savings_percent,
    }
}

/// First tier whose closed range holds `sqft`, else the first tier.
/// `None` only for an empty table.
pub fn find_tier(tiers: &[PriceTier], sqft: f64) -> Option<&PriceTier> {
    tiers
        .iter()
        .find(|tier| tier.contains(sqft))
        .or_else(|| tiers.first())
}

/// No-discount baseline rate. Tables list their most expensive tier first.
pub fn highest_rate(tiers: &[PriceTier]) -> f64 {
    tiers.first().map(|tier| tier.rate).unwrap_or(0.0)
}

pub fn total_sqft(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::sqft).sum()
}

/// Both product lines priced for the same job.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteSummary {
    pub total_sqft: f64,
    pub ceramic: PricingResult,
    pub solar: PricingResult,
}

pub fn summarize_quote(
    items: &[LineItem],
    ceramic: &[PriceTier],
    solar: &[PriceTier],
    travel_miles: f64,
    rules: &ShopMinimum,
) -> QuoteSummary {
    let total_sqft = total_sqft(items);
    QuoteSummary {
        total_sqft,
        ceramic: price_film_with(ceramic, total_sqft, travel_miles, rules),
        solar: price_film_with(solar, total_sqft, travel_miles, rules),
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tiers::TierTable;

    fn ceramic() -> TierTable {
        TierTable::premium_ceramic()
    }

    fn solar() -> TierTable {
        TierTable::solar_control()
    }

    #[test]
    fn small_local_job_pays_local_shop_minimum() {
        let result = price_film(ceramic().tiers(), 12.0, 12.0);
        assert_eq!(result.mode, PricingMode::ShopMinimum);
        assert_eq!(result.final_price, 250.0);
        assert_eq!(result.original_price, 250.0);
        assert_eq!(result.savings, 0.0);
        assert_eq!(result.savings_percent, 0);
        assert_eq!(result.tier_label, "Shop Minimum (≤18 sq ft)");
    }

    #[test]
    fn small_remote_job_pays_remote_shop_minimum() {
        let result = price_film(ceramic().tiers(), 12.0, 75.0);
        assert_eq!(result.mode, PricingMode::ShopMinimum);
        assert_eq!(result.final_price, 350.0);
    }

    #[test]
    fn fifty_miles_is_still_local() {
        assert_eq!(price_film(solar().tiers(), 18.0, 50.0).final_price, 250.0);
        assert_eq!(price_film(solar().tiers(), 18.0, 50.1).final_price, 350.0);
    }

    #[test]
    fn shop_minimum_band_ignores_the_table() {
        for sqft in [0.01, 1.0, 9.5, 17.99, 18.0] {
            for table in [ceramic(), solar(), TierTable::new(Vec::new())] {
                let result = price_film(table.tiers(), sqft, 0.0);
                assert_eq!(result.mode, PricingMode::ShopMinimum);
                assert_eq!(result.final_price, result.original_price);
                assert_eq!(result.savings, 0.0);
            }
        }
    }

    #[test]
    fn zero_sqft_falls_through_to_first_tier() {
        let result = price_film(ceramic().tiers(), 0.0, 80.0);
        assert_eq!(result.mode, PricingMode::Matrix);
        assert_eq!(result.tier_label, "$12 (0–49)");
        assert_eq!(result.final_price, 0.0);
        assert_eq!(result.savings_percent, 0);
    }

    #[test]
    fn ceramic_mid_tier_discount() {
        let result = price_film(ceramic().tiers(), 120.0, 12.0);
        assert_eq!(result.mode, PricingMode::Matrix);
        assert_eq!(result.tier_label, "$10 (100–199)");
        assert_eq!(result.original_price, 1440.0);
        assert_eq!(result.final_price, 1200.0);
        assert_eq!(result.savings, 240.0);
        assert_eq!(result.savings_percent, 17);
    }

    #[test]
    fn solar_mid_tier_discount() {
        let result = price_film(solar().tiers(), 250.0, 0.0);
        assert_eq!(result.tier_label, "$6.00 (200–299)");
        assert_eq!(result.original_price, 1875.0);
        assert_eq!(result.final_price, 1500.0);
        assert_eq!(result.savings, 375.0);
        assert_eq!(result.savings_percent, 20);
    }

    #[test]
    fn just_above_threshold_uses_matrix() {
        let result = price_film(ceramic().tiers(), 18.5, 0.0);
        assert_eq!(result.mode, PricingMode::Matrix);
        assert_eq!(result.final_price, 12.0 * 18.5);
        assert_eq!(result.savings, 0.0);
    }

    #[test]
    fn gap_between_tiers_falls_back_to_first_tier() {
        let result = price_film(ceramic().tiers(), 49.5, 0.0);
        assert_eq!(result.tier_label, "$12 (0–49)");
        assert_eq!(result.final_price, 12.0 * 49.5);
        assert_eq!(result.savings_percent, 0);
    }

    #[test]
    fn matrix_results_stay_within_bounds() {
        for table in [ceramic(), solar()] {
            let mut sqft = 18.5;
            while sqft < 1_000.0 {
                let result = price_film(table.tiers(), sqft, 0.0);
                assert_eq!(result.mode, PricingMode::Matrix);
                assert!(result.final_price <= result.original_price);
                assert!(result.savings_percent <= 100);
                sqft += 7.25;
            }
        }
    }

    #[test]
    fn effective_rate_never_increases_with_size() {
        for table in [ceramic(), solar()] {
            let mut previous = f64::INFINITY;
            for sqft in (19..2_000).map(f64::from) {
                let rate = price_film(table.tiers(), sqft, 0.0).final_price / sqft;
                assert!(rate <= previous, "rate rose at {sqft}");
                previous = rate;
            }
        }
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let a = price_film(ceramic().tiers(), 333.3, 61.0);
        let b = price_film(ceramic().tiers(), 333.3, 61.0);
        assert_eq!(a, b);
        assert_eq!(a.final_price.to_bits(), b.final_price.to_bits());
    }

    #[test]
    fn empty_table_yields_zeroed_matrix_result() {
        let result = price_film(&[], 250.0, 0.0);
        assert_eq!(result.mode, PricingMode::Matrix);
        assert_eq!(result.final_price, 0.0);
        assert_eq!(result.tier_label, "No tiers configured");
    }

    #[test]
    fn invalid_numbers_are_treated_as_zero() {
        let result = price_film(ceramic().tiers(), f64::NAN, f64::NAN);
        assert_eq!(result.mode, PricingMode::Matrix);
        assert_eq!(result.final_price, 0.0);

        let result = price_film(ceramic().tiers(), 10.0, -80.0);
        assert_eq!(result.final_price, 250.0);
    }

    #[test]
    fn custom_rules_move_the_threshold_and_prices() {
        let rules = ShopMinimum {
            threshold_sqft: 25.0,
            local_price: 199.0,
            remote_price: 299.0,
            local_radius_miles: 30.0,
        };
        let result = price_film_with(ceramic().tiers(), 20.0, 31.0, &rules);
        assert_eq!(result.mode, PricingMode::ShopMinimum);
        assert_eq!(result.final_price, 299.0);
        assert_eq!(result.tier_label, "Shop Minimum (≤25 sq ft)");
    }

    #[test]
    fn quote_prices_both_lines_for_the_same_area() {
        let items = vec![
            LineItem {
                area: "Lobby North".into(),
                width_in: 48.0,
                height_in: 72.0,
                quantity: 2,
                ..LineItem::blank("1".into())
            },
            LineItem {
                area: "Conference A".into(),
                width_in: 60.0,
                height_in: 60.0,
                quantity: 3,
                ..LineItem::blank("2".into())
            },
        ];
        let summary = summarize_quote(
            &items,
            ceramic().tiers(),
            solar().tiers(),
            12.0,
            &ShopMinimum::default(),
        );
        assert_eq!(summary.total_sqft, 123.0);
        assert_eq!(summary.ceramic.final_price, 1230.0);
        assert_eq!(summary.solar.final_price, 6.5 * 123.0);
    }
}
