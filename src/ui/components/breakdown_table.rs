use crate::billing::pricing_table;
use crate::core::breakdown::{build_breakdown, BREAKDOWN_HEADERS};
use crate::utils::LocaleCurrencyFormatter;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, formatter: &LocaleCurrencyFormatter) {
    let rows: Vec<Row> = build_breakdown(pricing_table(), formatter)
        .into_iter()
        .map(|row| Row::new(vec![row.tier, row.range, row.marginal_rate, row.formula]))
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(16),
        Constraint::Length(22),
        Constraint::Min(30),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(BREAKDOWN_HEADERS.to_vec())
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Pricing details: previous tier total + extra events"),
        );
    f.render_widget(table, area);
}
