//! Application state and main render loop

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use bakso_core::{AprioriReport, BaksoConfig, IngredientDraft, PortionCalculation, Session};

use crate::commands::{parse_command, Command, CommandResult};
use crate::keybindings::{normal_mode_action, Action};
use crate::mode::Mode;
use crate::views::{
    AnalyticsView, AprioriPanel, AprioriView, CalculatorView, HistoryView, IngredientsView,
    ViewKind,
};
use crate::widgets::StatusBar;

/// Main application state
pub struct App {
    /// Current mode (NORMAL, COMMAND)
    pub mode: Mode,
    /// Catalog, history and configuration
    pub session: Session,
    /// Active view
    pub view: ViewKind,
    /// Command input buffer
    pub command_buffer: String,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status message reports a failure
    pub status_is_error: bool,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Last portion calculation
    pub calculation: Option<PortionCalculation>,
    /// Mining result for the current history and thresholds, rebuilt on demand
    apriori: Option<AprioriReport>,
    /// View state for each screen
    pub ingredients_view: IngredientsView,
    pub calculator_view: CalculatorView,
    pub analytics_view: AnalyticsView,
    pub history_view: HistoryView,
    pub apriori_view: AprioriView,
}

impl App {
    /// Create a new application instance
    pub fn new(config: BaksoConfig) -> Self {
        Self {
            mode: Mode::Normal,
            session: Session::new(config),
            view: ViewKind::default(),
            command_buffer: String::new(),
            status_message: None,
            status_is_error: false,
            show_help: false,
            calculation: None,
            apriori: None,
            ingredients_view: IngredientsView::new(),
            calculator_view: CalculatorView::new(),
            analytics_view: AnalyticsView::new(),
            history_view: HistoryView::new(),
            apriori_view: AprioriView::new(),
        }
    }

    /// Recompute the Apriori report if the history or thresholds changed
    pub fn refresh_report(&mut self) {
        if self.apriori.is_none() {
            let report = self.session.analyze();
            tracing::debug!(
                itemsets = report.itemset_count(),
                rules = report.rule_count(),
                "apriori report rebuilt"
            );
            self.apriori_view.reset_selection();
            self.apriori = Some(report);
        }
    }

    fn invalidate_report(&mut self) {
        self.apriori = None;
    }

    pub fn apriori_report(&self) -> Option<&AprioriReport> {
        self.apriori.as_ref()
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Status bar at top, content in middle, command line at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        frame.render_widget(
            StatusBar {
                mode: self.mode,
                view: self.view,
                ingredients: self.session.catalog().len(),
                records: self.session.history().len(),
            },
            chunks[0],
        );

        self.render_main_view(frame, chunks[1]);
        self.render_command_line(frame, chunks[2]);

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_main_view(&self, frame: &mut Frame, area: Rect) {
        let display = &self.session.config().display;
        match self.view {
            ViewKind::Ingredients => {
                self.ingredients_view
                    .render(frame, area, self.session.catalog())
            }
            ViewKind::Calculator => {
                self.calculator_view
                    .render(frame, area, self.calculation.as_ref())
            }
            ViewKind::Analytics => {
                let report = self.session.analytics();
                self.analytics_view.render(frame, area, &report, display)
            }
            ViewKind::History => self.history_view.render(
                frame,
                area,
                self.session.history(),
                self.session.catalog(),
            ),
            ViewKind::Apriori => self.apriori_view.render(
                frame,
                area,
                self.apriori_report(),
                self.session.catalog(),
                display,
            ),
        }
    }

    fn render_command_line(&self, frame: &mut Frame, area: Rect) {
        let (content, style) = match self.mode {
            Mode::Command => (format!(":{}", self.command_buffer), Style::default()),
            Mode::Normal => match &self.status_message {
                Some(message) if self.status_is_error => {
                    (message.clone(), Style::default().fg(Color::Red))
                }
                Some(message) => (message.clone(), Style::default().fg(Color::Green)),
                None => (
                    "Press : for commands | 1-5 to change view | ? for help".to_string(),
                    Style::default().fg(Color::Gray),
                ),
            },
        };

        frame.render_widget(Paragraph::new(content).style(style), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
Bakso - Help

Views (1-5):
  1 - Ingredients   (catalog and cost per portion)
  2 - Calculator    (requirements for a batch)
  3 - Analytics     (costs, frequency, monthly trend)
  4 - History       (saved batches, newest first)
  5 - Apriori       (ingredients used together)

Navigation:
  j/k     - Move up/down in lists
  h/l     - Previous/next view
  Tab     - Itemsets/rules (Apriori view)
  Esc     - Close help / clear message

Commands (: to enter command mode):
  :add <name> <unit> <cost> <amount>   - Add ingredient
  :edit <name> <unit> <cost> <amount>  - Edit selected ingredient
  :del                 - Delete selected ingredient
  :calc <portions>     - Calculate requirements
  :save [YYYY-MM-DD]   - Save calculation to history
  :support <0..1>      - Minimum support
  :confidence <0..1>   - Minimum confidence
  :rules               - Show association rules
  :view <1-5>          - Switch view
  :q                   - Quit

Units: kg gram liter ml buah porsi sdm sdt
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(70, 85, area);
        frame.render_widget(Clear, help_area);
        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, help_area);
    }

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            return true;
        }
        match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Command => self.handle_command_key(code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        let Some(action) = normal_mode_action(code) else {
            return false;
        };

        match action {
            Action::Quit => return true,
            Action::EnterCommandMode => {
                self.mode = Mode::Command;
                self.command_buffer.clear();
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            Action::Cancel => {
                self.show_help = false;
                self.status_message = None;
            }
            Action::MoveDown => self.navigate_down(),
            Action::MoveUp => self.navigate_up(),
            Action::NextView => self.switch_view(self.view.next()),
            Action::PrevView => self.switch_view(self.view.prev()),
            Action::JumpToView(n) => {
                if let Some(view) = ViewKind::from_number(n) {
                    self.switch_view(view);
                }
            }
            Action::TogglePanel => {
                if self.view == ViewKind::Apriori {
                    self.apriori_view.toggle_panel();
                }
            }
        }
        false
    }

    fn switch_view(&mut self, view: ViewKind) {
        self.view = view;
        self.set_status(format!("{}: {}", view.number(), view.name()), false);
    }

    fn navigate_down(&mut self) {
        match self.view {
            ViewKind::Ingredients => self.ingredients_view.next(self.session.catalog().len()),
            ViewKind::History => self.history_view.next(self.session.history().len()),
            ViewKind::Apriori => {
                if let Some(report) = &self.apriori {
                    self.apriori_view.next(report);
                }
            }
            ViewKind::Calculator | ViewKind::Analytics => {}
        }
    }

    fn navigate_up(&mut self) {
        match self.view {
            ViewKind::Ingredients => self.ingredients_view.prev(self.session.catalog().len()),
            ViewKind::History => self.history_view.prev(self.session.history().len()),
            ViewKind::Apriori => {
                if let Some(report) = &self.apriori {
                    self.apriori_view.prev(report);
                }
            }
            ViewKind::Calculator | ViewKind::Analytics => {}
        }
    }

    fn handle_command_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let should_quit = self.execute_command();
                self.mode = Mode::Normal;
                self.command_buffer.clear();
                if should_quit {
                    return true;
                }
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.command_buffer.push(c);
            }
            _ => {}
        }
        false
    }

    /// Run the command buffer, returns true if app should quit
    fn execute_command(&mut self) -> bool {
        let result = match parse_command(&self.command_buffer) {
            Ok(command) => self.apply(command),
            Err(err) => CommandResult::Error(err.to_string()),
        };

        match result {
            CommandResult::Quit => return true,
            CommandResult::Success(message) => self.set_status(message, false),
            CommandResult::Error(message) => {
                tracing::warn!(command = %self.command_buffer, %message, "command failed");
                self.set_status(message, true);
            }
        }
        false
    }

    /// Apply a parsed command to the session
    pub fn apply(&mut self, command: Command) -> CommandResult {
        match command {
            Command::Quit => CommandResult::Quit,
            Command::Add {
                name,
                unit,
                cost_per_unit,
                amount_per_portion,
            } => {
                let draft = IngredientDraft::new(name, unit, cost_per_unit, amount_per_portion);
                match self.session.add_ingredient(draft) {
                    Ok(ingredient) => {
                        let message = format!("Added {}", ingredient.name);
                        self.ingredients_view.selected = self.session.catalog().len() - 1;
                        self.recalculate();
                        CommandResult::Success(message)
                    }
                    Err(e) => CommandResult::Error(e.to_string()),
                }
            }
            Command::Edit {
                name,
                unit,
                cost_per_unit,
                amount_per_portion,
            } => {
                let Some(id) = self.selected_ingredient_id() else {
                    return CommandResult::Error("No ingredient selected".to_string());
                };
                let draft = IngredientDraft::new(name, unit, cost_per_unit, amount_per_portion);
                match self.session.update_ingredient(&id, draft) {
                    Ok(ingredient) => {
                        let message = format!("Updated {}", ingredient.name);
                        self.recalculate();
                        CommandResult::Success(message)
                    }
                    Err(e) => CommandResult::Error(e.to_string()),
                }
            }
            Command::Delete => {
                let Some(id) = self.selected_ingredient_id() else {
                    return CommandResult::Error("No ingredient selected".to_string());
                };
                match self.session.remove_ingredient(&id) {
                    Ok(ingredient) => {
                        self.ingredients_view.clamp(self.session.catalog().len());
                        self.recalculate();
                        CommandResult::Success(format!("Deleted {}", ingredient.name))
                    }
                    Err(e) => CommandResult::Error(e.to_string()),
                }
            }
            Command::Calculate(portions) => match self.session.calculate(portions) {
                Ok(calc) => {
                    let message = format!(
                        "{} portions: {}",
                        calc.portions,
                        bakso_core::format::format_rupiah(calc.total_cost())
                    );
                    self.calculation = Some(calc);
                    self.calculator_view.saved = false;
                    self.view = ViewKind::Calculator;
                    CommandResult::Success(message)
                }
                Err(e) => CommandResult::Error(e.to_string()),
            },
            Command::Save(date) => {
                let Some(calc) = &self.calculation else {
                    return CommandResult::Error("Nothing to save, run :calc first".to_string());
                };
                let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
                match self.session.record(calc, date) {
                    Ok(record) => {
                        let message = format!("Saved {} portions on {}", record.portions, record.date);
                        self.calculator_view.saved = true;
                        self.invalidate_report();
                        CommandResult::Success(message)
                    }
                    Err(e) => CommandResult::Error(e.to_string()),
                }
            }
            Command::MinSupport(value) => {
                let confidence = self.session.config().mining.min_confidence;
                self.session.set_thresholds(value, confidence);
                self.invalidate_report();
                CommandResult::Success(format!("Minimum support set to {:.2}", value))
            }
            Command::MinConfidence(value) => {
                let support = self.session.config().mining.min_support;
                self.session.set_thresholds(support, value);
                self.invalidate_report();
                CommandResult::Success(format!("Minimum confidence set to {:.2}", value))
            }
            Command::ShowRules => {
                self.view = ViewKind::Apriori;
                self.apriori_view.panel = AprioriPanel::Rules;
                CommandResult::Success("Association rules".to_string())
            }
            Command::View(view) => {
                self.view = view;
                CommandResult::Success(format!("{}: {}", view.number(), view.name()))
            }
        }
    }

    fn selected_ingredient_id(&self) -> Option<String> {
        self.session
            .catalog()
            .as_slice()
            .get(self.ingredients_view.selected)
            .map(|i| i.id.clone())
    }

    /// Keep the shown calculation in step with the catalog
    fn recalculate(&mut self) {
        if let Some(portions) = self.calculation.as_ref().map(|c| c.portions) {
            self.calculation = self.session.calculate(portions as i64).ok();
            self.calculator_view.saved = false;
        }
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = Some(message);
        self.status_is_error = is_error;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(BaksoConfig::default())
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
