use crate::billing::{pricing_table, CostResult, PricingError};

/// Months billed per year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Estimate the monthly cost of `quantity` million events.
///
/// Non-positive quantities are not an error: they yield a zero cost with
/// the `N/A` tier. NaN and infinities are rejected, as are quantities whose
/// cost does not fit in an `f64`.
pub fn compute(quantity: f64) -> Result<CostResult, PricingError> {
    if !quantity.is_finite() {
        return Err(PricingError::NonFiniteQuantity(quantity));
    }

    let Some(band) = pricing_table().band_for(quantity) else {
        return Ok(CostResult::not_applicable());
    };

    let monthly_cost = band.cost_at(quantity);
    if !monthly_cost.is_finite() {
        return Err(PricingError::CostOverflow(quantity));
    }

    Ok(CostResult {
        monthly_cost,
        tier_label: band.label.to_string(),
    })
}

/// Annualize a monthly cost
pub fn annual_cost(monthly_cost: f64) -> f64 {
    monthly_cost * MONTHS_PER_YEAR
}
