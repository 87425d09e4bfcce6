use crate::billing::{PricingBand, PricingTable};
use crate::utils::{CurrencyFormatter, LocaleCurrencyFormatter};

pub const BREAKDOWN_HEADERS: [&str; 4] = [
    "Tier",
    "Range (millions)",
    "Cost per extra million",
    "Monthly cost formula",
];

/// One row of the pricing details table
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub tier: String,
    pub range: String,
    pub marginal_rate: String,
    pub formula: String,
}

impl BreakdownRow {
    pub fn cells(&self) -> [&str; 4] {
        [
            self.tier.as_str(),
            self.range.as_str(),
            self.marginal_rate.as_str(),
            self.formula.as_str(),
        ]
    }
}

/// Describe every band of `table` for display
pub fn build_breakdown(
    table: &PricingTable,
    formatter: &LocaleCurrencyFormatter,
) -> Vec<BreakdownRow> {
    table
        .bands()
        .iter()
        .map(|band| BreakdownRow {
            tier: band.letter.to_string(),
            range: format_range(band, formatter),
            marginal_rate: band
                .marginal_rate
                .map(|rate| formatter.format(rate))
                .unwrap_or_else(|| "-".to_string()),
            formula: format_formula(band, formatter),
        })
        .collect()
}

fn format_range(band: &PricingBand, formatter: &LocaleCurrencyFormatter) -> String {
    if band.is_unbounded() {
        format!("> {}", formatter.format_whole(band.lower_bound))
    } else {
        format!(
            "{}-{}",
            formatter.format_whole(band.lower_bound),
            formatter.format_whole(band.upper_bound)
        )
    }
}

fn format_formula(band: &PricingBand, formatter: &LocaleCurrencyFormatter) -> String {
    match band.marginal_rate {
        None => format!("Flat fee of {}", formatter.format(band.fixed_base_cost)),
        Some(rate) => format!(
            "{} + (Events - {}M) * {}",
            formatter.format(band.fixed_base_cost),
            formatter.format_whole(band.lower_bound),
            formatter.format(rate)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::pricing_table;

    #[test]
    fn test_breakdown_rows_pt_br() {
        let formatter = LocaleCurrencyFormatter::new("pt_BR.UTF-8");
        let rows = build_breakdown(pricing_table(), &formatter);
        assert_eq!(rows.len(), 6);

        assert_eq!(rows[0].tier, "A");
        assert_eq!(rows[0].range, "0-25");
        assert_eq!(rows[0].marginal_rate, "-");
        assert_eq!(rows[0].formula, "Flat fee of R$ 15.274,50");

        assert_eq!(rows[2].range, "500-2.500");
        assert_eq!(rows[2].marginal_rate, "R$ 15,27");
        assert_eq!(
            rows[2].formula,
            "R$ 45.821,75 + (Events - 500M) * R$ 15,27"
        );

        assert_eq!(rows[5].tier, "F");
        assert_eq!(rows[5].range, "> 25.000");
        assert_eq!(
            rows[5].formula,
            "R$ 152.786,75 + (Events - 25.000M) * R$ 3,06"
        );
    }

    #[test]
    fn test_breakdown_rows_fallback() {
        let formatter = LocaleCurrencyFormatter::fallback();
        let rows = build_breakdown(pricing_table(), &formatter);
        assert_eq!(rows[3].range, "2,500-10,000");
        assert_eq!(rows[1].marginal_rate, "R$ 64.31");
        assert_eq!(rows[1].cells()[0], "B");
    }
}
