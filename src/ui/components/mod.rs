pub mod line_items;
pub mod price_card;
pub mod tier_editor;
pub mod toast;
pub mod totals_card;
