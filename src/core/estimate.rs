use crate::billing::{annual_cost, compute, PricingError, NOT_APPLICABLE};
use serde::Serialize;

/// Everything the presentation shows for one input value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub quantity: f64,
    pub tier_label: String,
    pub monthly_cost: f64,
    pub annual_cost: f64,
}

impl Estimate {
    /// Price `quantity` and annualize it. A monthly cost that is finite but
    /// overflows once multiplied by twelve is rejected like any other overflow.
    pub fn from_quantity(quantity: f64) -> Result<Self, PricingError> {
        let result = compute(quantity)?;
        let annual = annual_cost(result.monthly_cost);
        if !annual.is_finite() {
            return Err(PricingError::CostOverflow(quantity));
        }

        Ok(Self {
            quantity,
            annual_cost: annual,
            monthly_cost: result.monthly_cost,
            tier_label: result.tier_label,
        })
    }

    /// Zero-cost estimate outside every tier
    pub fn not_applicable(quantity: f64) -> Self {
        Self {
            quantity,
            tier_label: NOT_APPLICABLE.to_string(),
            monthly_cost: 0.0,
            annual_cost: 0.0,
        }
    }

    /// False when the quantity was non-positive and no tier applies
    pub fn is_applicable(&self) -> bool {
        self.quantity > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_annualizes_monthly_cost() {
        let estimate = Estimate::from_quantity(55.0).unwrap();
        assert_eq!(estimate.tier_label, "Tier B");
        assert_eq!(estimate.annual_cost, estimate.monthly_cost * 12.0);
        assert!(estimate.is_applicable());
    }

    #[test]
    fn test_estimate_for_zero() {
        let estimate = Estimate::from_quantity(0.0).unwrap();
        assert_eq!(estimate.tier_label, "N/A");
        assert_eq!(estimate.monthly_cost, 0.0);
        assert_eq!(estimate.annual_cost, 0.0);
        assert!(!estimate.is_applicable());
        assert_eq!(estimate, Estimate::not_applicable(0.0));
    }

    #[test]
    fn test_estimate_rejects_annual_overflow() {
        // 3.06e307 per month is finite, twelve months of it are not
        assert!(compute(1.0e307).unwrap().monthly_cost.is_finite());
        assert!(matches!(
            Estimate::from_quantity(1.0e307),
            Err(PricingError::CostOverflow(_))
        ));
    }

    #[test]
    fn test_estimate_serializes_to_json() {
        let estimate = Estimate::from_quantity(25.0).unwrap();
        let json = serde_json::to_value(&estimate).unwrap();
        assert_eq!(json["tier_label"], "Tier A");
        assert_eq!(json["monthly_cost"], 15274.5);
        assert_eq!(json["annual_cost"], 183294.0);
        assert_eq!(json["quantity"], 25.0);
    }
}
