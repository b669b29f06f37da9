//! Mode indicator widget for the TUI.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::mode::Mode;

/// Displays the current interaction mode, color coded:
/// - Normal: Blue
/// - Command: Magenta
pub struct ModeIndicator {
    mode: Mode,
}

impl ModeIndicator {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Get the display color for the current mode.
    pub fn mode_color(mode: Mode) -> Color {
        match mode {
            Mode::Normal => Color::Blue,
            Mode::Command => Color::Magenta,
        }
    }

    /// Render as a styled span (for embedding in other widgets).
    pub fn as_span(&self) -> Span<'static> {
        Span::styled(
            format!("[{}]", self.mode.short_code()),
            Style::default()
                .fg(Color::White)
                .bg(Self::mode_color(self.mode))
                .add_modifier(Modifier::BOLD),
        )
    }
}
