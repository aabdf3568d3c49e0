//! Dashboard page widget
//!
//! Landing page: stat cards over the domain collections, quick-action
//! key hints, and the recent-activity feed.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::AppState;
use crate::core::{pending_count, recent_activities};
use crate::tui::theme;
use crate::tui::widgets::format_time;

pub struct Dashboard<'a> {
    state: &'a AppState,
}

impl<'a> Dashboard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn stat_cards(&self) -> Vec<(String, String)> {
        let data = &self.state.data;
        let stats = data.stats.as_ref();
        vec![
            (
                "Remaining Leaves".to_string(),
                stats
                    .map(|s| s.remaining_leaves.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Month Attendance".to_string(),
                stats
                    .map(|s| format!("{}%", s.attendance_percent))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Next Salary Date".to_string(),
                stats
                    .map(|s| s.next_salary_date.clone())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Pending Requests".to_string(),
                pending_count(data).to_string(),
            ),
        ]
    }

    fn activity_lines(&self) -> Vec<Line<'static>> {
        let recent = recent_activities(&self.state.data.activities, self.state.recent_limit);
        if recent.is_empty() {
            return vec![Line::from(Span::styled(
                " No recent activities",
                Style::default().fg(theme::DIM),
            ))];
        }

        recent
            .iter()
            .map(|activity| {
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", theme::activity_glyph(activity.kind)),
                        Style::default().fg(theme::ACCENT),
                    ),
                    Span::styled(
                        activity.title.clone(),
                        Style::default().fg(theme::HIGHLIGHT),
                    ),
                    Span::styled(
                        format!("  {}", activity.desc),
                        Style::default().fg(theme::DIM),
                    ),
                    Span::styled(
                        format!("  {}", format_time(&activity.timestamp)),
                        Style::default().fg(theme::DIM),
                    ),
                ])
            })
            .collect()
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(4), // Stat cards
            Constraint::Length(3), // Quick actions
            Constraint::Min(3),    // Recent activities
        ])
        .split(area);

        // Stat cards side by side
        let cards = self.stat_cards();
        let columns =
            Layout::horizontal(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
                .split(rows[0]);
        for ((label, value), column) in cards.into_iter().zip(columns.iter()) {
            let content = vec![
                Line::from(Span::styled(
                    value,
                    Style::default()
                        .fg(theme::BRAND)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(label, Style::default().fg(theme::DIM))),
            ];
            Paragraph::new(content)
                .block(Block::default().borders(Borders::ALL))
                .render(*column, buf);
        }

        // Quick actions
        let key = Style::default().fg(theme::ACCENT);
        let dim = Style::default().fg(theme::DIM);
        Paragraph::new(Line::from(vec![
            Span::styled("[1]", key),
            Span::styled(" Check In  ", dim),
            Span::styled("[2]", key),
            Span::styled(" Apply Leave  ", dim),
            Span::styled("[3]", key),
            Span::styled(" Timesheet  ", dim),
            Span::styled("[4]", key),
            Span::styled(" View Payslip", dim),
        ]))
        .block(Block::default().borders(Borders::ALL).title("Quick Actions"))
        .render(rows[1], buf);

        // Recent activities
        Paragraph::new(self.activity_lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Recent Activities"),
            )
            .render(rows[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Activity, ActivityKind, EmployeeStats, LeaveRequest, RequestStatus};
    use chrono::Local;

    #[test]
    fn test_stat_cards_reflect_snapshot() {
        let mut state = AppState::new();
        state.data.stats = Some(EmployeeStats {
            remaining_leaves: 18,
            attendance_percent: 95,
            next_salary_date: "Nov 30".to_string(),
        });
        state.data.leave_requests = vec![
            LeaveRequest {
                title: "Annual leave".to_string(),
                status: Some(RequestStatus::Pending),
                submitted: None,
            },
            LeaveRequest {
                title: "Sick day".to_string(),
                status: Some(RequestStatus::Approved),
                submitted: None,
            },
        ];

        let cards = Dashboard::new(&state).stat_cards();

        assert_eq!(cards[0], ("Remaining Leaves".to_string(), "18".to_string()));
        assert_eq!(cards[1], ("Month Attendance".to_string(), "95%".to_string()));
        assert_eq!(cards[2], ("Next Salary Date".to_string(), "Nov 30".to_string()));
        assert_eq!(cards[3], ("Pending Requests".to_string(), "1".to_string()));
    }

    #[test]
    fn test_stat_cards_without_backend_stats_show_placeholder() {
        let state = AppState::new();

        let cards = Dashboard::new(&state).stat_cards();

        assert_eq!(cards[0].1, "-");
        assert_eq!(cards[1].1, "-");
        assert_eq!(cards[2].1, "-");
        assert_eq!(cards[3].1, "0");
    }

    #[test]
    fn test_activity_lines_empty_state() {
        let state = AppState::new();
        let lines = Dashboard::new(&state).activity_lines();

        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans[0].content.contains("No recent activities"));
    }

    #[test]
    fn test_activity_lines_capped_at_recent_limit() {
        let mut state = AppState::new();
        state.data.activities = (0..6)
            .map(|i| Activity {
                kind: ActivityKind::Timecard,
                title: format!("a{i}"),
                desc: String::new(),
                timestamp: Local::now(),
            })
            .collect();

        let lines = Dashboard::new(&state).activity_lines();

        assert_eq!(lines.len(), state.recent_limit);
    }
}
