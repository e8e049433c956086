use serde::{Deserialize, Serialize};

/// Square inches per square foot.
pub const SQ_IN_PER_SQ_FT: f64 = 144.0;

/// One measured surface on the job sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub area: String,
    pub width_in: f64,
    pub height_in: f64,
    pub quantity: u32,
    #[serde(default)]
    pub notes: String,
}

impl LineItem {
    pub fn blank(id: String) -> Self {
        Self {
            id,
            area: String::new(),
            width_in: 0.0,
            height_in: 0.0,
            quantity: 1,
            notes: String::new(),
        }
    }

    /// Film area for this row. Always derived, never cached.
    pub fn sqft(&self) -> f64 {
        let sqft = self.width_in * self.height_in * self.quantity as f64 / SQ_IN_PER_SQ_FT;
        if sqft.is_finite() {
            sqft
        } else {
            0.0
        }
    }
}

/// Editable column of a [`LineItem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineItemField {
    Area,
    Width,
    Height,
    Quantity,
    Notes,
}

/// A square-footage bracket billed at a flat rate. `max_sqft == None` is unbounded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub min_sqft: f64,
    pub max_sqft: Option<f64>,
    pub rate: f64,
    pub label: String,
}

impl PriceTier {
    pub fn new(min_sqft: f64, max_sqft: Option<f64>, rate: f64, label: impl Into<String>) -> Self {
        Self {
            min_sqft,
            max_sqft,
            rate,
            label: label.into(),
        }
    }

    /// Closed interval test: `min <= sqft <= max`.
    pub fn contains(&self, sqft: f64) -> bool {
        sqft >= self.min_sqft && self.max_sqft.map_or(true, |max| sqft <= max)
    }
}

/// Editable column of a [`PriceTier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TierField {
    Min,
    Max,
    Rate,
    Label,
}

/// The two film products quoted side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductLine {
    PremiumCeramic,
    SolarControl,
}

impl ProductLine {
    pub const ALL: [ProductLine; 2] = [ProductLine::PremiumCeramic, ProductLine::SolarControl];

    pub fn title(&self) -> &'static str {
        match self {
            ProductLine::PremiumCeramic => "🌟 Premium Ceramic (TSER 69%+)",
            ProductLine::SolarControl => "Solar Control (Budget-Friendly)",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            ProductLine::PremiumCeramic => "Our most advanced and most popular choice",
            ProductLine::SolarControl => "Value-driven comfort and glare reduction",
        }
    }

    pub fn matrix_name(&self) -> &'static str {
        match self {
            ProductLine::PremiumCeramic => "Premium Ceramic Matrix",
            ProductLine::SolarControl => "Solar Control Matrix",
        }
    }
}

/// Client and project details printed on the proposal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteMeta {
    pub client_first_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_address: String,
    pub project_name: String,
}

/// Editable field of [`QuoteMeta`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaField {
    ClientFirstName,
    ClientEmail,
    ClientPhone,
    ServiceAddress,
    ProjectName,
}

impl QuoteMeta {
    pub fn set(&mut self, field: MetaField, value: String) {
        let slot = match field {
            MetaField::ClientFirstName => &mut self.client_first_name,
            MetaField::ClientEmail => &mut self.client_email,
            MetaField::ClientPhone => &mut self.client_phone,
            MetaField::ServiceAddress => &mut self.service_address,
            MetaField::ProjectName => &mut self.project_name,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqft_is_width_times_height_times_quantity_over_144() {
        let item = LineItem {
            quantity: 2,
            width_in: 48.0,
            height_in: 72.0,
            ..LineItem::blank("a".into())
        };
        assert_eq!(item.sqft(), 48.0);
    }

    #[test]
    fn zero_quantity_contributes_nothing() {
        let item = LineItem {
            quantity: 0,
            width_in: 60.0,
            height_in: 60.0,
            ..LineItem::blank("a".into())
        };
        assert_eq!(item.sqft(), 0.0);
    }

    #[test]
    fn tier_interval_is_closed_on_both_ends() {
        let tier = PriceTier::new(50.0, Some(99.0), 11.0, "$11 (50–99)");
        assert!(tier.contains(50.0));
        assert!(tier.contains(99.0));
        assert!(!tier.contains(49.9));
        assert!(!tier.contains(99.5));
    }

    #[test]
    fn unbounded_tier_contains_everything_above_min() {
        let tier = PriceTier::new(500.0, None, 6.5, "$6.50 (500+)");
        assert!(tier.contains(500.0));
        assert!(tier.contains(1.0e9));
        assert!(!tier.contains(499.0));
    }
}
