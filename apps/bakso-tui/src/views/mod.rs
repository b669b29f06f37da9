//! TUI views

use ratatui::widgets::ListState;

mod analytics;
mod apriori;
mod calculator;
mod history;
mod ingredients;

pub use analytics::AnalyticsView;
pub use apriori::{AprioriPanel, AprioriView};
pub use calculator::CalculatorView;
pub use history::HistoryView;
pub use ingredients::IngredientsView;

/// The five screens, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    #[default]
    Ingredients = 1,
    Calculator = 2,
    Analytics = 3,
    History = 4,
    Apriori = 5,
}

impl ViewKind {
    pub const ALL: [ViewKind; 5] = [
        ViewKind::Ingredients,
        ViewKind::Calculator,
        ViewKind::Analytics,
        ViewKind::History,
        ViewKind::Apriori,
    ];

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get((n as usize).checked_sub(1)?).copied()
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewKind::Ingredients => "Ingredients",
            ViewKind::Calculator => "Calculator",
            ViewKind::Analytics => "Analytics",
            ViewKind::History => "History",
            ViewKind::Apriori => "Apriori",
        }
    }

    /// Next view, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[self.number() as usize % Self::ALL.len()]
    }

    /// Previous view, wrapping around
    pub fn prev(self) -> Self {
        let index = self.number() as usize - 1;
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// List state that scrolls the selected row into view
pub(crate) fn list_state(selected: usize, count: usize) -> ListState {
    ListState::default().with_selected((count > 0).then_some(selected))
}

/// Move a list selection down, wrapping at the end
pub(crate) fn select_next(selected: &mut usize, count: usize) {
    if count > 0 {
        *selected = (*selected + 1) % count;
    }
}

/// Move a list selection up, wrapping at the start
pub(crate) fn select_prev(selected: &mut usize, count: usize) {
    if count > 0 {
        *selected = if *selected > 0 { *selected - 1 } else { count - 1 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_numbers() {
        assert_eq!(ViewKind::from_number(1), Some(ViewKind::Ingredients));
        assert_eq!(ViewKind::from_number(5), Some(ViewKind::Apriori));
        assert_eq!(ViewKind::from_number(0), None);
        assert_eq!(ViewKind::from_number(6), None);
        assert_eq!(ViewKind::History.number(), 4);
    }

    #[test]
    fn test_view_cycling() {
        assert_eq!(ViewKind::Ingredients.next(), ViewKind::Calculator);
        assert_eq!(ViewKind::Apriori.next(), ViewKind::Ingredients);
        assert_eq!(ViewKind::Ingredients.prev(), ViewKind::Apriori);
        assert_eq!(ViewKind::History.prev(), ViewKind::Analytics);
    }

    #[test]
    fn test_selection_wraps() {
        let mut selected = 2;
        select_next(&mut selected, 3);
        assert_eq!(selected, 0);
        select_prev(&mut selected, 3);
        assert_eq!(selected, 2);

        let mut empty = 0;
        select_next(&mut empty, 0);
        assert_eq!(empty, 0);
    }
}
