//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Enter command mode
    EnterCommandMode,
    /// Close the help overlay or clear the status line
    Cancel,
    /// Move up in list
    MoveUp,
    /// Move down in list
    MoveDown,
    /// Switch to previous view
    PrevView,
    /// Switch to next view
    NextView,
    /// Jump to a view by its number (1-5)
    JumpToView(u8),
    /// Switch between itemsets and rules
    TogglePanel,
    /// Toggle help
    ToggleHelp,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(':') => Some(Action::EnterCommandMode),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevView),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::NextView),
        KeyCode::Char(c @ '1'..='5') => Some(Action::JumpToView(c as u8 - b'0')),
        KeyCode::Tab => Some(Action::TogglePanel),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_number_keys() {
        assert_eq!(normal_mode_action(KeyCode::Char('1')), Some(Action::JumpToView(1)));
        assert_eq!(normal_mode_action(KeyCode::Char('5')), Some(Action::JumpToView(5)));
        assert_eq!(normal_mode_action(KeyCode::Char('6')), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(normal_mode_action(KeyCode::Char('j')), Some(Action::MoveDown));
        assert_eq!(normal_mode_action(KeyCode::Up), Some(Action::MoveUp));
        assert_eq!(normal_mode_action(KeyCode::Tab), Some(Action::TogglePanel));
        assert_eq!(normal_mode_action(KeyCode::Char('q')), Some(Action::Quit));
    }
}
