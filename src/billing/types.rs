use serde::Serialize;
use thiserror::Error;

/// Tier label reported for non-positive usage
pub const NOT_APPLICABLE: &str = "N/A";

/// One pricing tier of the band table
#[derive(Debug, Clone, PartialEq)]
pub struct PricingBand {
    pub letter: char,
    pub label: &'static str,
    pub lower_bound: f64,
    pub upper_bound: f64, // f64::INFINITY for the last band
    pub fixed_base_cost: f64,
    pub marginal_rate: Option<f64>, // None for the flat-fee band
}

impl PricingBand {
    /// Whether the band has no upper limit
    pub fn is_unbounded(&self) -> bool {
        self.upper_bound.is_infinite()
    }

    /// Cost of `quantity` evaluated inside this band
    pub fn cost_at(&self, quantity: f64) -> f64 {
        match self.marginal_rate {
            Some(rate) => self.fixed_base_cost + (quantity - self.lower_bound) * rate,
            None => self.fixed_base_cost,
        }
    }

    /// Total cost accrued at the band's upper boundary
    pub fn cumulative_cost(&self) -> Option<f64> {
        if self.is_unbounded() {
            None
        } else {
            Some(self.cost_at(self.upper_bound))
        }
    }
}

/// Monthly cost and the tier it was priced in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostResult {
    pub monthly_cost: f64,
    pub tier_label: String,
}

impl CostResult {
    pub fn not_applicable() -> Self {
        Self {
            monthly_cost: 0.0,
            tier_label: NOT_APPLICABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PricingError {
    #[error("Quantity must be a finite number, got {0}")]
    NonFiniteQuantity(f64),

    #[error("Cost of {0} million events exceeds the representable range")]
    CostOverflow(f64),
}
