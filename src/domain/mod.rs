//! Quote domain: line items, tier tables, pricing and proposal text.

pub mod app_state;
pub mod entities;
pub mod input;
pub mod pricing;
pub mod proposal;
pub mod tiers;

pub use app_state::{AppState, PersistedState};
pub use entities::{LineItem, LineItemField, MetaField, PriceTier, ProductLine, TierField};
pub use pricing::{PricingMode, PricingResult, ShopMinimum};
pub use proposal::Proposal;
