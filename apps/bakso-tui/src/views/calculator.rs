//! View 2: Portion calculator
//!
//! Shows the requirements of the last `:calc` and whether it has been saved.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use bakso_core::format::{format_percent, format_rupiah};
use bakso_core::PortionCalculation;

/// Calculator view state
pub struct CalculatorView {
    /// Set once the current calculation has been written to the history
    pub saved: bool,
}

impl CalculatorView {
    pub fn new() -> Self {
        Self { saved: false }
    }

    /// Render the calculator view
    pub fn render(&self, frame: &mut Frame, area: Rect, calculation: Option<&PortionCalculation>) {
        let Some(calc) = calculation else {
            let help = Paragraph::new(vec![
                Line::from(""),
                Line::from("  Enter the number of portions to produce:"),
                Line::from(""),
                Line::from(Span::styled(
                    "    :calc <portions>",
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(""),
                Line::from("  then :save [YYYY-MM-DD] to add it to the usage history."),
            ])
            .block(Block::default().title("Calculator").borders(Borders::ALL));
            frame.render_widget(help, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(area);

        self.render_lines(frame, chunks[0], calc);
        self.render_totals(frame, chunks[1], calc);
    }

    fn render_lines(&self, frame: &mut Frame, area: Rect, calc: &PortionCalculation) {
        let total = calc.total_cost();
        let items: Vec<ListItem> = calc
            .lines()
            .iter()
            .map(|line| {
                let share = if total > 0.0 { line.cost / total } else { 0.0 };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<24}", line.name)),
                    Span::raw(format!(" {:>10.3} {:<5}", line.amount, line.unit.as_str())),
                    Span::styled(
                        format!(" {:>16}", format_rupiah(line.cost)),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(
                        format!(" {} {:>6}", render_share_bar(share, 10), format_percent(share)),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect();

        let title = format!("Requirements for {} portions", calc.portions);
        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(list, area);
    }

    fn render_totals(&self, frame: &mut Frame, area: Rect, calc: &PortionCalculation) {
        let (saved_text, saved_color) = if self.saved {
            ("saved to history", Color::Green)
        } else {
            ("not saved, use :save", Color::Gray)
        };

        let lines = vec![
            Line::from(vec![
                Span::raw("Total cost:       "),
                Span::styled(
                    format_rupiah(calc.total_cost()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("Cost per portion: "),
                Span::styled(
                    format_rupiah(calc.cost_per_portion()),
                    Style::default().fg(Color::Green),
                ),
            ]),
            Line::from(Span::styled(saved_text, Style::default().fg(saved_color))),
        ];

        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Totals").borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }
}

impl Default for CalculatorView {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a simple ASCII bar for a fraction of the total
pub(crate) fn render_share_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0)) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_bar() {
        assert_eq!(render_share_bar(0.0, 10), "[          ]");
        assert_eq!(render_share_bar(0.5, 10), "[=====     ]");
        assert_eq!(render_share_bar(1.0, 10), "[==========]");
        assert_eq!(render_share_bar(1.7, 4), "[====]");
    }
}
