use crate::core::report::{info_message, ZERO_QUANTITY_WARNING};
use crate::core::{collect_all_segments, Estimate};
use crate::utils::LocaleCurrencyFormatter;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Tier, monthly and annual panels side by side
pub fn render(f: &mut Frame, area: Rect, estimate: &Estimate, formatter: &LocaleCurrencyFormatter) {
    let segments = collect_all_segments(estimate, formatter);
    if segments.is_empty() {
        let empty = Paragraph::new("-")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Your Cost Estimate"));
        f.render_widget(empty, area);
        return;
    }

    let constraints = vec![Constraint::Ratio(1, segments.len() as u32); segments.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for ((id, data), column) in segments.iter().zip(columns.iter()) {
        let panel = Paragraph::new(data.primary.as_str())
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title(id.label()));
        f.render_widget(panel, *column);
    }
}

/// Info line for a priced quantity, warning otherwise
pub fn render_message(
    f: &mut Frame,
    area: Rect,
    estimate: &Estimate,
    formatter: &LocaleCurrencyFormatter,
    error: Option<&str>,
) {
    let (text, color) = match error {
        Some(error) => (error.to_string(), Color::Red),
        None if estimate.is_applicable() => (info_message(estimate, formatter), Color::Blue),
        None => (ZERO_QUANTITY_WARNING.to_string(), Color::Yellow),
    };

    let message = Paragraph::new(text)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}
