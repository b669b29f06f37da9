//! View 3: Analytics
//!
//! Overview numbers on top, then four breakdowns:
//! - Cost per portion by ingredient
//! - Usage frequency
//! - Total usage
//! - Monthly trend

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use bakso_core::format::format_rupiah;
use bakso_core::{AnalyticsReport, DisplayConfig};

use super::calculator::render_share_bar;

/// Analytics view state
pub struct AnalyticsView;

impl AnalyticsView {
    pub fn new() -> Self {
        Self
    }

    /// Render the analytics view
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        report: &AnalyticsReport,
        display: &DisplayConfig,
    ) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Percentage(50),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_overview(frame, rows[0], report);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        self.render_costs(frame, top[0], report, display.top_cost_items);
        self.render_frequency(frame, top[1], report, display.top_frequency_items);
        self.render_usage(frame, bottom[0], report);
        self.render_trend(frame, bottom[1], report);
    }

    fn render_overview(&self, frame: &mut Frame, area: Rect, report: &AnalyticsReport) {
        let o = &report.overview;
        let line = Line::from(vec![
            Span::raw(" Records: "),
            Span::styled(o.total_records.to_string(), bold()),
            Span::raw("   Portions: "),
            Span::styled(o.total_portions.to_string(), bold()),
            Span::raw("   Total cost: "),
            Span::styled(format_rupiah(o.total_cost), bold().fg(Color::Yellow)),
            Span::raw("   Avg/portion: "),
            Span::styled(format_rupiah(o.avg_cost_per_portion), bold().fg(Color::Green)),
        ]);

        let paragraph =
            Paragraph::new(line).block(Block::default().title("Overview").borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn render_costs(&self, frame: &mut Frame, area: Rect, report: &AnalyticsReport, limit: usize) {
        let items: Vec<ListItem> = report
            .cost_analysis
            .iter()
            .take(limit)
            .map(|c| {
                ListItem::new(format!(
                    "{:<20} {:>14}",
                    c.name,
                    format_rupiah(c.cost_per_portion)
                ))
            })
            .collect();

        render_list(frame, area, "Cost per portion", items);
    }

    fn render_frequency(
        &self,
        frame: &mut Frame,
        area: Rect,
        report: &AnalyticsReport,
        limit: usize,
    ) {
        let records = report.overview.total_records;
        let items: Vec<ListItem> = report
            .usage_frequency
            .iter()
            .take(limit)
            .map(|f| {
                let share = if records > 0 {
                    f.frequency as f64 / records as f64
                } else {
                    0.0
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<20} {:>4}x ", f.name, f.frequency)),
                    Span::styled(render_share_bar(share, 10), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        render_list(frame, area, "Usage frequency", items);
    }

    fn render_usage(&self, frame: &mut Frame, area: Rect, report: &AnalyticsReport) {
        let items: Vec<ListItem> = report
            .total_usage
            .iter()
            .map(|u| ListItem::new(format!("{:<20} {:>10.2} {}", u.name, u.total_used, u.unit)))
            .collect();

        render_list(frame, area, "Total usage", items);
    }

    fn render_trend(&self, frame: &mut Frame, area: Rect, report: &AnalyticsReport) {
        let max_cost = report
            .monthly_trend
            .iter()
            .map(|m| m.cost)
            .fold(0.0_f64, f64::max);

        let items: Vec<ListItem> = report
            .monthly_trend
            .iter()
            .map(|m| {
                let share = if max_cost > 0.0 { m.cost / max_cost } else { 0.0 };
                ListItem::new(Line::from(vec![
                    Span::raw(format!(
                        "{} {:>6} porsi {:>14} ",
                        m.month,
                        m.portions,
                        format_rupiah(m.cost)
                    )),
                    Span::styled(render_share_bar(share, 10), Style::default().fg(Color::Magenta)),
                ]))
            })
            .collect();

        render_list(frame, area, "Monthly trend", items);
    }
}

impl Default for AnalyticsView {
    fn default() -> Self {
        Self::new()
    }
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn render_list(frame: &mut Frame, area: Rect, title: &str, items: Vec<ListItem>) {
    let items = if items.is_empty() {
        vec![ListItem::new("  (no data)").style(Style::default().fg(Color::Gray))]
    } else {
        items
    };
    let list = List::new(items).block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(list, area);
}
