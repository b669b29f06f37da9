//! View 4: Usage history, newest first

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use bakso_core::format::{format_long_date, format_rupiah};
use bakso_core::{IngredientCatalog, UsageHistory, UsageRecord};

use super::{list_state, select_next, select_prev};

/// History view state
pub struct HistoryView {
    /// Index into the newest-first ordering
    pub selected: usize,
}

impl HistoryView {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Render the history view
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        history: &UsageHistory,
        catalog: &IngredientCatalog,
    ) {
        let records = history.newest_first();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        self.render_records(frame, chunks[0], &records);
        self.render_record(frame, chunks[1], records.get(self.selected).copied(), catalog);
    }

    fn render_records(&self, frame: &mut Frame, area: Rect, records: &[&UsageRecord]) {
        let items: Vec<ListItem> = if records.is_empty() {
            vec![ListItem::new("  (no usage recorded yet)").style(Style::default().fg(Color::Gray))]
        } else {
            records
                .iter()
                .enumerate()
                .map(|(i, record)| {
                    let style = if i == self.selected {
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{:<28}", format_long_date(record.date)), style),
                        Span::raw(format!(" {:>5} porsi ", record.portions)),
                        Span::styled(
                            format_rupiah(record.total_cost),
                            Style::default().fg(Color::Yellow),
                        ),
                    ]))
                })
                .collect()
        };

        let title = format!("History ({} records)", records.len());
        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
        frame.render_stateful_widget(list, area, &mut list_state(self.selected, records.len()));
    }

    fn render_record(
        &self,
        frame: &mut Frame,
        area: Rect,
        record: Option<&UsageRecord>,
        catalog: &IngredientCatalog,
    ) {
        let mut lines: Vec<Line> = Vec::new();
        match record {
            Some(r) => {
                lines.push(Line::from(Span::styled(
                    format_long_date(r.date),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(format!(
                    "{} porsi | total {} | {}/porsi",
                    r.portions,
                    format_rupiah(r.total_cost),
                    format_rupiah(r.cost_per_portion())
                )));
                lines.push(Line::from(""));
                for (id, amount) in &r.ingredients {
                    lines.push(Line::from(format!(
                        "  {:<22} {:>10.3} {}",
                        catalog.name_of(id),
                        amount,
                        catalog.unit_of(id)
                    )));
                }
            }
            None => lines.push(Line::from("No record selected")),
        }

        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Ingredients used").borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    /// Navigate to next record
    pub fn next(&mut self, count: usize) {
        select_next(&mut self.selected, count);
    }

    /// Navigate to previous record
    pub fn prev(&mut self, count: usize) {
        select_prev(&mut self.selected, count);
    }
}

impl Default for HistoryView {
    fn default() -> Self {
        Self::new()
    }
}
