use once_cell::sync::Lazy;

use super::PricingBand;
use crate::debug_println;

/// Flat monthly fee covering the first band
pub const BASE_FEE: f64 = 15274.50;

/// Band boundaries (millions of events per month) and the marginal rate
/// charged per million above the previous boundary. Base costs are folded
/// from these, never written down.
const BAND_SPECS: [(char, f64, Option<f64>); 6] = [
    ('A', 25.0, None),
    ('B', 500.0, Some(64.31)),
    ('C', 2_500.0, Some(15.27)),
    ('D', 10_000.0, Some(4.07)),
    ('E', 25_000.0, Some(3.06)),
    ('F', f64::INFINITY, Some(3.06)),
];

const BAND_LABELS: [&str; 6] = ["Tier A", "Tier B", "Tier C", "Tier D", "Tier E", "Tier F"];

/// Process-wide band table, built on first use
static PRICING_TABLE: Lazy<PricingTable> = Lazy::new(PricingTable::build);

/// Ordered, gap-free set of pricing bands covering `[0, ∞)`
#[derive(Debug, Clone)]
pub struct PricingTable {
    bands: Vec<PricingBand>,
}

impl PricingTable {
    fn build() -> Self {
        let mut bands: Vec<PricingBand> = Vec::with_capacity(BAND_SPECS.len());

        for (index, (letter, upper_bound, marginal_rate)) in BAND_SPECS.iter().enumerate() {
            let (lower_bound, fixed_base_cost) = match bands.last() {
                // cumulative_cost is only None for the unbounded band, which is last
                Some(prev) => (prev.upper_bound, prev.cumulative_cost().unwrap_or(BASE_FEE)),
                None => (0.0, BASE_FEE),
            };

            bands.push(PricingBand {
                letter: *letter,
                label: BAND_LABELS[index],
                lower_bound,
                upper_bound: *upper_bound,
                fixed_base_cost,
                marginal_rate: *marginal_rate,
            });
        }

        Self { bands }
    }

    pub fn bands(&self) -> &[PricingBand] {
        &self.bands
    }

    /// First band whose upper bound covers `quantity`.
    ///
    /// A quantity sitting exactly on a boundary belongs to the lower band.
    /// Returns `None` for non-positive or non-finite quantities.
    pub fn band_for(&self, quantity: f64) -> Option<&PricingBand> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return None;
        }

        let band = self.bands.iter().find(|b| quantity <= b.upper_bound);
        if let Some(band) = band {
            debug_println!(
                "pricing: {} M events -> {} (base {:.2}, rate {:?})",
                quantity,
                band.label,
                band.fixed_base_cost,
                band.marginal_rate
            );
        }
        band
    }
}

/// Shared immutable band table
pub fn pricing_table() -> &'static PricingTable {
    &PRICING_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_cumulative_costs_match_published_table() {
        let expected = [15274.50, 45821.75, 76361.75, 106886.75, 152786.75];
        let bands = pricing_table().bands();

        for (band, want) in bands.iter().zip(expected.iter()) {
            let got = band.cumulative_cost().unwrap();
            assert!(
                (got - want).abs() < 0.001,
                "{}: {} != {}",
                band.label,
                got,
                want
            );
        }
        assert_eq!(bands[5].cumulative_cost(), None);
    }

    #[test]
    fn test_bands_partition_without_gaps() {
        let bands = pricing_table().bands();
        assert_eq!(bands.len(), 6);
        assert_eq!(bands[0].lower_bound, 0.0);

        for pair in bands.windows(2) {
            assert_eq!(pair[0].upper_bound, pair[1].lower_bound);
            assert!(pair[0].upper_bound < pair[1].upper_bound);
            assert_eq!(pair[0].cumulative_cost(), Some(pair[1].fixed_base_cost));
        }
        assert!(bands.last().unwrap().is_unbounded());
    }

    #[test]
    fn test_only_first_band_is_flat() {
        let bands = pricing_table().bands();
        assert_eq!(bands[0].marginal_rate, None);
        assert!(bands[1..].iter().all(|b| b.marginal_rate.is_some()));
    }

    #[test]
    fn test_band_for_boundaries() {
        let table = pricing_table();
        assert_eq!(table.band_for(25.0).unwrap().letter, 'A');
        assert_eq!(table.band_for(25.000001).unwrap().letter, 'B');
        assert_eq!(table.band_for(500.0).unwrap().letter, 'B');
        assert_eq!(table.band_for(25_000.0).unwrap().letter, 'E');
        assert_eq!(table.band_for(1e12).unwrap().letter, 'F');
    }

    #[test]
    fn test_band_for_rejects_non_positive_and_non_finite() {
        let table = pricing_table();
        assert!(table.band_for(0.0).is_none());
        assert!(table.band_for(-3.0).is_none());
        assert!(table.band_for(f64::NAN).is_none());
        assert!(table.band_for(f64::INFINITY).is_none());
    }
}
