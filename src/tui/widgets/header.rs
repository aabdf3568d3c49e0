//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::AppState;
use crate::core::has_unread;
use crate::tui::theme;

/// Top bar: brand, employee badge, notification bell, user block,
/// and key hints.
pub struct HeaderBar<'a> {
    state: &'a AppState,
}

impl<'a> HeaderBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let brand = Style::default().fg(theme::BRAND).add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(theme::DIM);
        let key = Style::default().fg(theme::ACCENT);

        let mut spans = vec![
            Span::styled(" FactoAtlas", brand),
            Span::styled("  EMPLOYEE ", dim),
        ];

        // Bell with unread dot; presence only, no read tracking
        if has_unread(&self.state.data.activities) {
            spans.push(Span::raw("  🔔"));
            spans.push(Span::styled("●", Style::default().fg(theme::ALERT)));
        } else {
            spans.push(Span::styled("  🔔", dim));
        }

        if let Some(employee) = &self.state.data.employee {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                employee.name.as_str(),
                Style::default().fg(theme::HIGHLIGHT),
            ));
            spans.push(Span::styled(
                format!(" ({})", employee.employee_id),
                dim,
            ));
        }

        spans.extend([
            Span::raw("   "),
            Span::styled("[", dim),
            Span::styled("b", key),
            Span::styled("] Sidebar  ", dim),
            Span::styled("[", dim),
            Span::styled("n", key),
            Span::styled("] Notifications  ", dim),
            Span::styled("[", dim),
            Span::styled("q", key),
            Span::styled("] Quit", dim),
        ]);

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}
