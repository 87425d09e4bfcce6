use super::components::{breakdown_table, metrics};
use super::QuantityInput;
use crate::config::Config;
use crate::core::Estimate;
use crate::debug_println;
use crate::utils::LocaleCurrencyFormatter;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct App {
    pub input: QuantityInput,
    pub estimate: Estimate,
    pub formatter: LocaleCurrencyFormatter,
    pub show_breakdown: bool,
    pub error: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, initial_quantity: f64) -> Self {
        let input = QuantityInput::new(initial_quantity, config.step);
        let mut app = Self {
            estimate: Estimate::not_applicable(0.0),
            input,
            formatter: LocaleCurrencyFormatter::new(&config.locale),
            show_breakdown: config.show_breakdown,
            error: None,
            should_quit: false,
        };
        app.recompute();
        app
    }

    /// Re-run the calculator for the current field value
    pub fn recompute(&mut self) {
        let quantity = self.input.value();
        match Estimate::from_quantity(quantity) {
            Ok(estimate) => {
                self.estimate = estimate;
                self.error = None;
            }
            Err(e) => {
                debug_println!("form: rejected input '{}': {}", self.input.text(), e);
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        let changed = match code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                false
            }
            KeyCode::Char('b') | KeyCode::Tab => {
                self.show_breakdown = !self.show_breakdown;
                false
            }
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => {
                self.input.clear();
                true
            }
            KeyCode::Up => {
                self.input.increment();
                true
            }
            KeyCode::Down => {
                self.input.decrement();
                true
            }
            _ => false,
        };

        if changed {
            self.recompute();
        }
    }

    pub fn render(&self, f: &mut Frame) {
        let mut constraints = vec![
            Constraint::Length(3), // Title
            Constraint::Length(3), // Input
            Constraint::Length(3), // Metrics
            Constraint::Length(3), // Info / warning
        ];
        if self.show_breakdown {
            constraints.push(Constraint::Min(10));
        } else {
            constraints.push(Constraint::Min(0));
        }
        constraints.push(Constraint::Length(3)); // Help

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(f.area());

        let title = Paragraph::new("GA4 360 Cost Simulator · 2025 price table, marginal cost")
            .style(Style::default().fg(Color::Cyan))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let input = Paragraph::new(format!("{}▏", self.input.text())).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Monthly event volume (millions)")
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(input, chunks[1]);

        metrics::render(f, chunks[2], &self.estimate, &self.formatter);
        metrics::render_message(f, chunks[3], &self.estimate, &self.formatter, self.error.as_deref());

        if self.show_breakdown {
            breakdown_table::render(f, chunks[4], &self.formatter);
        }

        let help_text = "0-9 . : Edit  ↑/↓: Step  Del: Clear  b/Tab: Pricing details  Esc/q: Quit";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::TOP));
        f.render_widget(help, chunks[5]);
    }
}
