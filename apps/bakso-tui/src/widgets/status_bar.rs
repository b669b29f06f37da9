//! Status bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::ModeIndicator;
use crate::mode::Mode;
use crate::views::ViewKind;

/// Top line: mode, view tabs and catalog/history counts
pub struct StatusBar {
    pub mode: Mode,
    pub view: ViewKind,
    pub ingredients: usize,
    pub records: usize,
}

impl StatusBar {
    fn tabs(&self) -> Vec<Span<'static>> {
        ViewKind::ALL
            .iter()
            .map(|&view| {
                let label = format!(" {}:{} ", view.number(), view.name());
                if view == self.view {
                    Span::styled(label, Style::default().fg(Color::Black).bg(Color::Cyan))
                } else {
                    Span::raw(label)
                }
            })
            .collect()
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(" Bakso ", Style::default().fg(Color::Yellow)),
            ModeIndicator::new(self.mode).as_span(),
            Span::raw(" "),
        ];
        spans.extend(self.tabs());
        spans.push(Span::raw(format!(
            "| {} ingredients, {} records | ? help",
            self.ingredients, self.records
        )));

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_tab_highlighted() {
        let bar = StatusBar {
            mode: Mode::Normal,
            view: ViewKind::Analytics,
            ingredients: 0,
            records: 0,
        };
        let tabs = bar.tabs();
        assert_eq!(tabs.len(), 5);
        assert_eq!(tabs[2].content, " 3:Analytics ");
        assert_eq!(tabs[2].style.bg, Some(Color::Cyan));
        assert_eq!(tabs[0].style.bg, None);
    }

    #[test]
    fn test_renders_counts() {
        let bar = StatusBar {
            mode: Mode::Command,
            view: ViewKind::Ingredients,
            ingredients: 4,
            records: 2,
        };
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        let text: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(text.contains("[CMD]"));
        assert!(text.contains("4 ingredients, 2 records"));
    }
}
