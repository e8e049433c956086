use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    entities::{LineItem, LineItemField, MetaField, ProductLine, QuoteMeta, TierField},
    input::{coerce_amount, coerce_quantity},
    pricing::{summarize_quote, QuoteSummary, ShopMinimum},
    tiers::TierTable,
};

/// Everything the quote form edits. Derived prices are never stored here;
/// call [`AppState::quote`] after any change.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub meta: QuoteMeta,
    pub travel_miles: f64,
    pub line_items: Vec<LineItem>,
    pub ceramic_tiers: TierTable,
    pub solar_tiers: TierTable,
    pub shop_minimum: ShopMinimum,
    /// RFC 3339 timestamp of the last successful save, if any.
    pub last_saved: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            meta: QuoteMeta::default(),
            travel_miles: 0.0,
            line_items: vec![LineItem::blank(new_line_item_id())],
            ceramic_tiers: TierTable::premium_ceramic(),
            solar_tiers: TierTable::solar_control(),
            shop_minimum: ShopMinimum::default(),
            last_saved: None,
        }
    }
}

fn new_line_item_id() -> String {
    Uuid::new_v4().to_string()
}

impl AppState {
    pub fn quote(&self) -> QuoteSummary {
        summarize_quote(
            &self.line_items,
            self.ceramic_tiers.tiers(),
            self.solar_tiers.tiers(),
            self.travel_miles,
            &self.shop_minimum,
        )
    }

    pub fn tiers(&self, product: ProductLine) -> &TierTable {
        match product {
            ProductLine::PremiumCeramic => &self.ceramic_tiers,
            ProductLine::SolarControl => &self.solar_tiers,
        }
    }

    pub fn tiers_mut(&mut self, product: ProductLine) -> &mut TierTable {
        match product {
            ProductLine::PremiumCeramic => &mut self.ceramic_tiers,
            ProductLine::SolarControl => &mut self.solar_tiers,
        }
    }

    pub fn edit_tier(&mut self, product: ProductLine, index: usize, field: TierField, raw: &str) {
        self.tiers_mut(product).edit_tier(index, field, raw);
    }

    pub fn reset_tiers(&mut self, product: ProductLine) {
        *self.tiers_mut(product) = TierTable::for_product(product);
    }

    pub fn set_meta(&mut self, field: MetaField, value: String) {
        self.meta.set(field, value);
    }

    pub fn set_travel_miles(&mut self, raw: &str) {
        self.travel_miles = coerce_amount(raw);
    }

    pub fn add_line_item(&mut self) -> String {
        let id = new_line_item_id();
        self.line_items.push(LineItem::blank(id.clone()));
        id
    }

    /// Appends a copy of the row under a new id.
    pub fn duplicate_line_item(&mut self, id: &str) -> Option<String> {
        let source = self.line_items.iter().find(|item| item.id == id)?;
        let copy = LineItem {
            id: new_line_item_id(),
            ..source.clone()
        };
        let new_id = copy.id.clone();
        self.line_items.push(copy);
        Some(new_id)
    }

    pub fn remove_line_item(&mut self, id: &str) -> bool {
        let before = self.line_items.len();
        self.line_items.retain(|item| item.id != id);
        self.line_items.len() != before
    }

    pub fn edit_line_item(&mut self, id: &str, field: LineItemField, raw: &str) -> bool {
        let Some(item) = self.line_items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        match field {
            LineItemField::Area => item.area = raw.to_string(),
            LineItemField::Notes => item.notes = raw.to_string(),
            LineItemField::Width => item.width_in = coerce_amount(raw),
            LineItemField::Height => item.height_in = coerce_amount(raw),
            LineItemField::Quantity => item.quantity = coerce_quantity(raw),
        }
        true
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.meta = persisted.meta;
        self.travel_miles = persisted.travel_miles;
        self.line_items = persisted.line_items;
        self.ceramic_tiers = persisted.ceramic_tiers;
        self.solar_tiers = persisted.solar_tiers;
        self.shop_minimum = persisted.shop_minimum;
        self.last_saved = persisted.saved_at;
    }

    pub fn to_persisted(&self, app_version: &str, saved_at: Option<String>) -> PersistedState {
        PersistedState {
            app_version: app_version.to_string(),
            saved_at,
            meta: self.meta.clone(),
            travel_miles: self.travel_miles,
            line_items: self.line_items.clone(),
            ceramic_tiers: self.ceramic_tiers.clone(),
            solar_tiers: self.solar_tiers.clone(),
            shop_minimum: self.shop_minimum.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub app_version: String,
    #[serde(default)]
    pub saved_at: Option<String>,
    #[serde(default)]
    pub meta: QuoteMeta,
    #[serde(default)]
    pub travel_miles: f64,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default = "TierTable::premium_ceramic")]
    pub ceramic_tiers: TierTable,
    #[serde(default = "TierTable::solar_control")]
    pub solar_tiers: TierTable,
    #[serde(default)]
    pub shop_minimum: ShopMinimum,
}
