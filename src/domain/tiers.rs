use serde::{Deserialize, Serialize};

use super::{
    entities::{PriceTier, ProductLine, TierField},
    input::{coerce_amount, parse_tier_max},
};
use crate::util::format::money;

/// Ordered price brackets for one product line.
///
/// Tables are expected to be contiguous and ascending, with the first tier
/// carrying the highest rate and the last tier unbounded. Nothing here
/// enforces that; lookups tolerate gaps instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierTable(Vec<PriceTier>);

impl TierTable {
    pub fn new(tiers: Vec<PriceTier>) -> Self {
        Self(tiers)
    }

    pub fn for_product(product: ProductLine) -> Self {
        match product {
            ProductLine::PremiumCeramic => Self::premium_ceramic(),
            ProductLine::SolarControl => Self::solar_control(),
        }
    }

    pub fn premium_ceramic() -> Self {
        Self::new(vec![
            PriceTier::new(0.0, Some(49.0), 12.0, "$12 (0–49)"),
            PriceTier::new(50.0, Some(99.0), 11.0, "$11 (50–99)"),
            PriceTier::new(100.0, Some(199.0), 10.0, "$10 (100–199)"),
            PriceTier::new(200.0, Some(299.0), 9.0, "$9 (200–299)"),
            PriceTier::new(300.0, Some(399.0), 8.0, "$8 (300–399)"),
            PriceTier::new(400.0, Some(499.0), 7.0, "$7 (400–499)"),
            PriceTier::new(500.0, None, 6.5, "$6.50 (500+)"),
        ])
    }

    pub fn solar_control() -> Self {
        Self::new(vec![
            PriceTier::new(0.0, Some(99.0), 7.5, "$7.50 (0–99)"),
            PriceTier::new(100.0, Some(199.0), 6.5, "$6.50 (100–199)"),
            PriceTier::new(200.0, Some(299.0), 6.0, "$6.00 (200–299)"),
            PriceTier::new(300.0, Some(399.0), 5.5, "$5.50 (300–399)"),
            PriceTier::new(400.0, None, 5.0, "$5.00 (400+)"),
        ])
    }

    pub fn tiers(&self) -> &[PriceTier] {
        &self.0
    }

    /// Appends a zeroed placeholder tier for the user to fill in.
    pub fn add_tier(&mut self) {
        self.0.push(PriceTier::new(0.0, Some(0.0), 0.0, "Custom"));
    }

    pub fn remove_tier(&mut self, index: usize) -> bool {
        if index < self.0.len() {
            self.0.remove(index);
            true
        } else {
            false
        }
    }

    /// Applies one edited field, coercing numeric input. A tier left without a
    /// label gets one generated from its rate and range.
    pub fn edit_tier(&mut self, index: usize, field: TierField, raw: &str) -> bool {
        let Some(tier) = self.0.get_mut(index) else {
            return false;
        };

        match field {
            TierField::Min => tier.min_sqft = coerce_amount(raw),
            TierField::Max => tier.max_sqft = parse_tier_max(raw),
            TierField::Rate => tier.rate = coerce_amount(raw),
            TierField::Label => tier.label = raw.to_string(),
        }

        if tier.label.trim().is_empty() {
            tier.label = generated_label(tier);
        }
        true
    }
}

fn generated_label(tier: &PriceTier) -> String {
    match tier.max_sqft {
        Some(max) => format!("{} ({}–{})", money(tier.rate), tier.min_sqft, max),
        None => format!("{} ({}+)", money(tier.rate), tier.min_sqft),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_start_at_zero_and_end_unbounded() {
        for product in ProductLine::ALL {
            let table = TierTable::for_product(product);
            let tiers = table.tiers();
            assert_eq!(tiers.first().map(|t| t.min_sqft), Some(0.0));
            assert_eq!(tiers.last().and_then(|t| t.max_sqft), None);
        }
    }

    #[test]
    fn default_tables_have_non_increasing_rates() {
        for product in ProductLine::ALL {
            let table = TierTable::for_product(product);
            for pair in table.tiers().windows(2) {
                assert!(pair[0].rate >= pair[1].rate, "{:?}", product);
            }
        }
    }

    #[test]
    fn editing_max_to_infinity_makes_tier_unbounded() {
        let mut table = TierTable::solar_control();
        assert!(table.edit_tier(3, TierField::Max, "Infinity"));
        assert_eq!(table.tiers()[3].max_sqft, None);
    }

    #[test]
    fn numeric_edits_are_coerced() {
        let mut table = TierTable::premium_ceramic();
        table.edit_tier(0, TierField::Rate, "$13.25");
        table.edit_tier(0, TierField::Min, "abc");
        assert_eq!(table.tiers()[0].rate, 13.25);
        assert_eq!(table.tiers()[0].min_sqft, 0.0);
    }

    #[test]
    fn clearing_label_regenerates_it() {
        let mut table = TierTable::premium_ceramic();
        table.edit_tier(1, TierField::Label, "");
        assert_eq!(table.tiers()[1].label, "$11.00 (50–99)");

        table.edit_tier(6, TierField::Label, "   ");
        assert_eq!(table.tiers()[6].label, "$6.50 (500+)");
    }

    #[test]
    fn generated_labels_use_plus_for_open_ended_tiers() {
        let mut table = TierTable::new(Vec::new());
        table.add_tier();
        table.edit_tier(0, TierField::Min, "750");
        table.edit_tier(0, TierField::Max, "+");
        table.edit_tier(0, TierField::Rate, "4.5");
        table.edit_tier(0, TierField::Label, "");
        assert_eq!(table.tiers()[0].label, "$4.50 (750+)");

        table.edit_tier(0, TierField::Max, "1200");
        table.edit_tier(0, TierField::Label, "");
        assert_eq!(table.tiers()[0].label, "$4.50 (750–1200)");
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let mut table = TierTable::solar_control();
        let before = table.clone();
        assert!(!table.edit_tier(42, TierField::Rate, "1"));
        assert!(!table.remove_tier(42));
        assert_eq!(table, before);
    }

    #[test]
    fn add_and_remove_tiers() {
        let mut table = TierTable::solar_control();
        table.add_tier();
        assert_eq!(table.tiers().len(), 6);
        assert_eq!(table.tiers()[5].label, "Custom");
        assert!(table.remove_tier(0));
        assert_eq!(table.tiers()[0].label, "$6.50 (100–199)");
    }

    #[test]
    fn serializes_unbounded_max_as_null() {
        let table = TierTable::new(vec![PriceTier::new(0.0, None, 5.0, "flat")]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"[{"min_sqft":0.0,"max_sqft":null,"rate":5.0,"label":"flat"}]"#
        );
    }
}
