//! View 1: Ingredients
//!
//! Catalog list on the left, details of the selected ingredient on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use bakso_core::format::format_rupiah;
use bakso_core::{Ingredient, IngredientCatalog};

use super::{list_state, select_next, select_prev};

/// Ingredients view state
pub struct IngredientsView {
    /// Currently selected catalog row
    pub selected: usize,
}

impl IngredientsView {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Render the ingredients view
    pub fn render(&self, frame: &mut Frame, area: Rect, catalog: &IngredientCatalog) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        self.render_list(frame, chunks[0], catalog);
        self.render_details(frame, chunks[1], catalog.as_slice().get(self.selected));
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, catalog: &IngredientCatalog) {
        let title = format!("Ingredients ({})", catalog.len());

        let items: Vec<ListItem> = if catalog.is_empty() {
            vec![ListItem::new("  (no ingredients, use :add <name> <unit> <cost> <amount>)")
                .style(Style::default().fg(Color::Gray))]
        } else {
            catalog
                .iter()
                .enumerate()
                .map(|(i, ingredient)| {
                    let style = if i == self.selected {
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };

                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{:<24}", ingredient.name), style),
                        Span::raw(format!(
                            " {:>8} {:<5}",
                            ingredient.amount_per_portion,
                            ingredient.unit.as_str()
                        )),
                        Span::styled(
                            format!(" {:>14}", format_rupiah(ingredient.cost_per_portion())),
                            Style::default().fg(Color::Yellow),
                        ),
                    ]))
                })
                .collect()
        };

        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
        frame.render_stateful_widget(list, area, &mut list_state(self.selected, catalog.len()));
    }

    fn render_details(&self, frame: &mut Frame, area: Rect, ingredient: Option<&Ingredient>) {
        let lines: Vec<Line> = match ingredient {
            Some(i) => vec![
                Line::from(Span::styled(
                    i.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(format!("Unit:              {}", i.unit)),
                Line::from(format!(
                    "Cost per unit:     {}/{}",
                    format_rupiah(i.cost_per_unit),
                    i.unit
                )),
                Line::from(format!(
                    "Amount per portion: {} {}",
                    i.amount_per_portion, i.unit
                )),
                Line::from(format!(
                    "Cost per portion:  {}",
                    format_rupiah(i.cost_per_portion())
                )),
                Line::from(""),
                Line::from(Span::styled(
                    ":edit <name> <unit> <cost> <amount>  |  :del",
                    Style::default().fg(Color::Gray),
                )),
            ],
            None => vec![Line::from("No ingredient selected")],
        };

        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Details").borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    /// Navigate to next ingredient
    pub fn next(&mut self, count: usize) {
        select_next(&mut self.selected, count);
    }

    /// Navigate to previous ingredient
    pub fn prev(&mut self, count: usize) {
        select_prev(&mut self.selected, count);
    }

    /// Keep the selection inside the list after a removal
    pub fn clamp(&mut self, count: usize) {
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}

impl Default for IngredientsView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_after_removal() {
        let mut view = IngredientsView::new();
        view.selected = 3;
        view.clamp(3);
        assert_eq!(view.selected, 2);
        view.clamp(0);
        assert_eq!(view.selected, 0);
    }
}
