pub mod calculator;
pub mod pricing;
pub mod types;

pub use calculator::{annual_cost, compute};
pub use pricing::{pricing_table, PricingTable};
pub use types::{CostResult, PricingBand, PricingError, NOT_APPLICABLE};
