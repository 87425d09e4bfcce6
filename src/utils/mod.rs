pub mod currency;
pub mod debug;

pub use currency::{CurrencyFormatter, LocaleCurrencyFormatter, FALLBACK_SYMBOL};
