//! Notification overlay panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::core::{recent_activities, Activity};
use crate::tui::theme;
use crate::tui::widgets::format_time;

/// Dropdown panel listing recent activities, anchored below the bell.
pub struct NotificationPanel<'a> {
    activities: &'a [Activity],
    limit: usize,
}

impl<'a> NotificationPanel<'a> {
    pub fn new(activities: &'a [Activity], limit: usize) -> Self {
        Self { activities, limit }
    }

    /// Panel placement in the top-right corner of `area`
    pub fn panel_area(area: Rect) -> Rect {
        let width = 44.min(area.width);
        let height = 12.min(area.height);
        Rect {
            x: area.right().saturating_sub(width),
            y: area.y.saturating_add(1).min(area.bottom()),
            width,
            height,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let recent = recent_activities(self.activities, self.limit);
        if recent.is_empty() {
            return vec![Line::from(Span::styled(
                " No recent activities",
                Style::default().fg(theme::DIM),
            ))];
        }

        let mut lines = Vec::new();
        for activity in recent {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", theme::activity_glyph(activity.kind)),
                    Style::default().fg(theme::ACCENT),
                ),
                Span::styled(
                    activity.title.clone(),
                    Style::default().fg(theme::HIGHLIGHT),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}  {}", activity.desc, format_time(&activity.timestamp)),
                Style::default().fg(theme::DIM),
            )));
        }
        lines
    }
}

impl Widget for NotificationPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = Self::panel_area(area);
        Clear.render(panel, buf);
        Paragraph::new(self.lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Notifications")
                    .title_bottom(" Esc to close "),
            )
            .render(panel, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActivityKind;
    use chrono::Local;

    fn activity(title: &str) -> Activity {
        Activity {
            kind: ActivityKind::Payslip,
            title: title.to_string(),
            desc: "October payslip".to_string(),
            timestamp: Local::now(),
        }
    }

    #[test]
    fn test_lines_empty_feed() {
        let panel = NotificationPanel::new(&[], 4);
        let lines = panel.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans[0].content.contains("No recent activities"));
    }

    #[test]
    fn test_lines_two_per_activity_and_bounded() {
        let feed: Vec<Activity> = (0..6).map(|i| activity(&format!("a{i}"))).collect();

        let panel = NotificationPanel::new(&feed, 4);
        assert_eq!(panel.lines().len(), 8);
    }

    #[test]
    fn test_panel_area_fits_inside() {
        let area = Rect::new(0, 0, 120, 40);
        let panel = NotificationPanel::panel_area(area);
        assert!(panel.right() <= area.right());
        assert!(panel.bottom() <= area.bottom());
    }
}
