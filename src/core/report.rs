use super::breakdown::{build_breakdown, BreakdownRow, BREAKDOWN_HEADERS};
use super::{collect_all_segments, Estimate};
use crate::billing::pricing_table;
use crate::utils::LocaleCurrencyFormatter;

pub const ZERO_QUANTITY_WARNING: &str = "Please enter an event volume greater than zero.";

pub const DISCLAIMER: &str = "This is a simulation tool. Values are estimates and must be \
confirmed with your sales representative.";

/// Sentence describing where the quantity landed
pub fn info_message(estimate: &Estimate, formatter: &LocaleCurrencyFormatter) -> String {
    format!(
        "With {} million events per month, your usage falls in {}.",
        formatter.format_whole(estimate.quantity),
        estimate.tier_label
    )
}

/// Plain-text renderer for the command line
pub struct ReportGenerator {
    formatter: LocaleCurrencyFormatter,
}

impl ReportGenerator {
    pub fn new(formatter: LocaleCurrencyFormatter) -> Self {
        Self { formatter }
    }

    pub fn generate(&self, estimate: &Estimate, show_breakdown: bool) -> String {
        let mut lines = Vec::new();

        if estimate.is_applicable() {
            lines.push("Your Cost Estimate".to_string());
            for (id, data) in collect_all_segments(estimate, &self.formatter) {
                lines.push(format!("  {}: {}", id.label(), data.primary));
            }
            lines.push(String::new());
            lines.push(info_message(estimate, &self.formatter));
        } else {
            lines.push(ZERO_QUANTITY_WARNING.to_string());
        }

        if show_breakdown {
            lines.push(String::new());
            lines.push(
                "Monthly cost is the total of the previous tier plus a variable amount \
                 for the events above its limit."
                    .to_string(),
            );
            let rows = build_breakdown(pricing_table(), &self.formatter);
            lines.extend(render_table(&rows));
        }

        lines.push(String::new());
        lines.push(DISCLAIMER.to_string());
        lines.join("\n")
    }
}

fn render_table(rows: &[BreakdownRow]) -> Vec<String> {
    let mut widths = BREAKDOWN_HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_line = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = vec![render_line(BREAKDOWN_HEADERS), separator];
    lines.extend(rows.iter().map(|row| render_line(row.cells())));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> ReportGenerator {
        ReportGenerator::new(LocaleCurrencyFormatter::new("pt_BR"))
    }

    #[test]
    fn test_report_for_positive_quantity() {
        let estimate = Estimate::from_quantity(55.0).unwrap();
        let report = generator().generate(&estimate, false);

        assert!(report.contains("Your price tier: Tier B"));
        assert!(report.contains("Estimated monthly cost: R$ 17.203,80"));
        assert!(report.contains("Estimated annual cost: R$ 206.445,60"));
        assert!(report.contains("With 55 million events per month, your usage falls in Tier B."));
        assert!(report.ends_with(DISCLAIMER));
        assert!(!report.contains("Range (millions)"));
    }

    #[test]
    fn test_report_warns_on_zero() {
        let estimate = Estimate::from_quantity(0.0).unwrap();
        let report = generator().generate(&estimate, false);

        assert!(report.starts_with(ZERO_QUANTITY_WARNING));
        assert!(!report.contains("Estimated monthly cost"));
    }

    #[test]
    fn test_report_with_breakdown_table() {
        let estimate = Estimate::from_quantity(30_000.0).unwrap();
        let report = generator().generate(&estimate, true);

        assert!(report.contains("Tier | Range (millions)"));
        assert!(report.contains("R$ 152.786,75 + (Events - 25.000M) * R$ 3,06"));
        assert!(report.contains("Estimated monthly cost: R$ 168.086,75"));
    }

    #[test]
    fn test_table_columns_align() {
        let formatter = LocaleCurrencyFormatter::fallback();
        let rows = build_breakdown(pricing_table(), &formatter);
        let lines = render_table(&rows);

        assert_eq!(lines.len(), rows.len() + 2);
        let first_bar = lines[0].find('|').unwrap();
        for line in lines.iter().skip(2) {
            assert_eq!(line.find('|').unwrap(), first_bar);
        }
    }
}
