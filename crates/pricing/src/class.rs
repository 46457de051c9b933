//! Region classes (price multiplier) and weight classes (base price).

use crate::region::EUROPE;

/// Heaviest weight covered by a tier.
pub const MAX_WEIGHT: f64 = 1000.0;

/// Shipment classification by origin/destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionClass {
    Domestic,
    Europe,
    International,
}

impl RegionClass {
    /// Classify a route from both codes and their resolved regions.
    ///
    /// Precedence: identical code, then both in Europe, then differing
    /// regions. Two different countries sharing a region other than Europe
    /// (e.g. `US` -> `CA`) are priced as `Domestic`.
    pub fn classify(
        sender_code: &str,
        sender_region: &str,
        receiver_code: &str,
        receiver_region: &str,
    ) -> Self {
        if sender_code == receiver_code {
            return Self::Domestic;
        }

        match (sender_region == receiver_region, sender_region == EUROPE) {
            (true, true) => Self::Europe,
            (false, _) => Self::International,
            (true, false) => Self::Domestic,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Domestic => 1.0,
            Self::Europe => 1.5,
            Self::International => 2.5,
        }
    }
}

/// Weight band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightClass {
    Small,
    Medium,
    Large,
    Huge,
}

impl WeightClass {
    /// Bands: `(0, 10)`, `[10, 25)`, `[25, 50)`, `[50, 1000]`.
    ///
    /// Weights outside every band (zero, negative, above [`MAX_WEIGHT`], NaN)
    /// are classed as `Small` rather than rejected.
    pub fn classify(weight: f64) -> Self {
        match weight {
            w if w > 0.0 && w < 10.0 => Self::Small,
            w if (10.0..25.0).contains(&w) => Self::Medium,
            w if (25.0..50.0).contains(&w) => Self::Large,
            w if (50.0..=MAX_WEIGHT).contains(&w) => Self::Huge,
            _ => Self::Small,
        }
    }

    pub fn base_price(self) -> f64 {
        match self {
            Self::Small => 100.0,
            Self::Medium => 300.0,
            Self::Large => 500.0,
            Self::Huge => 2000.0,
        }
    }
}
