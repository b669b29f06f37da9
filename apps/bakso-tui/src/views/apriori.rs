//! View 5: Apriori analysis
//!
//! Summary of the last mining run, with either the frequent itemsets or the
//! association rules listed below it. `Tab` switches between the two.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use bakso_core::format::format_percent;
use bakso_core::mining::is_strong_confidence;
use bakso_core::{AprioriReport, Association, DisplayConfig, IngredientCatalog, SupportStrength};

use super::{list_state, select_next, select_prev};

/// Which list is shown below the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AprioriPanel {
    #[default]
    Itemsets,
    Rules,
}

/// Apriori view state
pub struct AprioriView {
    pub panel: AprioriPanel,
    pub selected_itemset: usize,
    pub selected_rule: usize,
}

impl AprioriView {
    pub fn new() -> Self {
        Self {
            panel: AprioriPanel::Itemsets,
            selected_itemset: 0,
            selected_rule: 0,
        }
    }

    /// Render the Apriori view
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        report: Option<&AprioriReport>,
        catalog: &IngredientCatalog,
        display: &DisplayConfig,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        let Some(report) = report else {
            let paragraph = Paragraph::new("Analysis not available")
                .block(Block::default().title("Apriori").borders(Borders::ALL));
            frame.render_widget(paragraph, area);
            return;
        };

        self.render_summary(frame, chunks[0], report);

        if report.is_empty() {
            let paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from("  No usage history yet. Record batches with :calc and :save,"),
                Line::from("  then come back to see which ingredients are used together."),
            ])
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(paragraph, chunks[1]);
            return;
        }

        match self.panel {
            AprioriPanel::Itemsets => self.render_itemsets(frame, chunks[1], report, catalog, display),
            AprioriPanel::Rules => self.render_rules(frame, chunks[1], report, catalog, display),
        }
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, report: &AprioriReport) {
        let [l1, l2, l3] = report.level_counts;
        let lines = vec![
            Line::from(vec![
                Span::raw("min support "),
                Span::styled(format_percent(report.min_support), bold()),
                Span::raw("   min confidence "),
                Span::styled(format_percent(report.min_confidence), bold()),
            ]),
            Line::from(format!(
                "{} transactions | {} itemsets (1: {}, 2: {}, 3: {}) | {} rules",
                report.transaction_count,
                report.itemset_count(),
                l1,
                l2,
                l3,
                report.rule_count()
            )),
            Line::from(Span::styled(
                ":support <0..1>  :confidence <0..1>  Tab: itemsets/rules",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Apriori").borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn render_itemsets(
        &self,
        frame: &mut Frame,
        area: Rect,
        report: &AprioriReport,
        catalog: &IngredientCatalog,
        display: &DisplayConfig,
    ) {
        let items: Vec<ListItem> = report
            .itemsets
            .iter()
            .enumerate()
            .map(|(i, itemset)| {
                let (band, color) = match SupportStrength::classify(itemset.support, display) {
                    SupportStrength::High => ("high", Color::Green),
                    SupportStrength::Medium => ("medium", Color::Yellow),
                    SupportStrength::Low => ("low", Color::Gray),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<48}", catalog_label(&itemset.items, catalog)),
                        selected_style(i == self.selected_itemset),
                    ),
                    Span::raw(format!(" {:>7} ", format_percent(itemset.support))),
                    Span::styled(band, Style::default().fg(color)),
                ]))
            })
            .collect();

        let title = format!("Frequent itemsets ({})", report.itemset_count());
        let selected = self.selected_itemset;
        render_list(frame, area, title, items, selected, "no itemset reaches the minimum support");
    }

    fn render_rules(
        &self,
        frame: &mut Frame,
        area: Rect,
        report: &AprioriReport,
        catalog: &IngredientCatalog,
        display: &DisplayConfig,
    ) {
        let items: Vec<ListItem> = report
            .rules
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                let confidence_color = if is_strong_confidence(rule.confidence, display) {
                    Color::Green
                } else {
                    Color::Yellow
                };
                let association_color = match rule.association() {
                    Association::Positive => Color::Green,
                    Association::Independent => Color::Gray,
                    Association::Negative => Color::Red,
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(
                            "{} -> {}",
                            catalog_label(&rule.antecedent, catalog),
                            catalog_label(&rule.consequent, catalog)
                        ),
                        selected_style(i == self.selected_rule),
                    ),
                    Span::raw(format!("  sup {:>6} ", format_percent(rule.support))),
                    Span::styled(
                        format!("conf {:>6} ", format_percent(rule.confidence)),
                        Style::default().fg(confidence_color),
                    ),
                    Span::styled(
                        format!("lift {:.2} ({})", rule.lift, rule.association()),
                        Style::default().fg(association_color),
                    ),
                ]))
            })
            .collect();

        let title = format!("Association rules ({})", report.rule_count());
        let selected = self.selected_rule;
        render_list(frame, area, title, items, selected, "no rule reaches the minimum confidence");
    }

    /// Switch between itemsets and rules
    pub fn toggle_panel(&mut self) {
        self.panel = match self.panel {
            AprioriPanel::Itemsets => AprioriPanel::Rules,
            AprioriPanel::Rules => AprioriPanel::Itemsets,
        };
    }

    /// Navigate down in the active panel
    pub fn next(&mut self, report: &AprioriReport) {
        match self.panel {
            AprioriPanel::Itemsets => select_next(&mut self.selected_itemset, report.itemset_count()),
            AprioriPanel::Rules => select_next(&mut self.selected_rule, report.rule_count()),
        }
    }

    /// Navigate up in the active panel
    pub fn prev(&mut self, report: &AprioriReport) {
        match self.panel {
            AprioriPanel::Itemsets => select_prev(&mut self.selected_itemset, report.itemset_count()),
            AprioriPanel::Rules => select_prev(&mut self.selected_rule, report.rule_count()),
        }
    }

    /// Forget selections that may no longer exist after a new run
    pub fn reset_selection(&mut self) {
        self.selected_itemset = 0;
        self.selected_rule = 0;
    }
}

impl Default for AprioriView {
    fn default() -> Self {
        Self::new()
    }
}

fn catalog_label(items: &[String], catalog: &IngredientCatalog) -> String {
    items
        .iter()
        .map(|id| catalog.name_of(id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn selected_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    title: String,
    items: Vec<ListItem>,
    selected: usize,
    empty: &str,
) {
    let mut state = list_state(selected, items.len());
    let items = if items.is_empty() {
        vec![ListItem::new(format!("  ({})", empty)).style(Style::default().fg(Color::Gray))]
    } else {
        items
    };
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_stateful_widget(list, area, &mut state);
}
