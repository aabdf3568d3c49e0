//! Render-dispatch boundary
//!
//! Total over page ids: known leaf pages render their view (or a
//! placeholder body), anything else gets the defined not-found view.
//! Nothing here rejects an id - the controller already accepted it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::AppState;
use crate::core::{registry, PageId};
use crate::tui::theme;

use super::dashboard::Dashboard;

/// Look up the display label of a registry page, searching groups and
/// their submenus. Group ids resolve too; they share the id namespace.
pub fn page_label(page: &PageId) -> Option<&'static str> {
    for item in registry() {
        if item.id == *page {
            return Some(item.label);
        }
        for sub in &item.submenu {
            if sub.id == *page {
                return Some(sub.label);
            }
        }
    }
    None
}

/// The page body for the current page
pub struct PageView<'a> {
    state: &'a AppState,
}

impl<'a> PageView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let page = &self.state.layout.current_page;

        if *page == *"dashboard" {
            Dashboard::new(self.state).render(area, buf);
            return;
        }

        match page_label(page) {
            Some(label) => render_placeholder(label, area, buf),
            None => render_not_found(page, area, buf),
        }
    }
}

fn render_placeholder(label: &str, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" {label}"),
            Style::default()
                .fg(theme::HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " This page is served by an external module.",
            Style::default().fg(theme::DIM),
        )),
    ];
    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

fn render_not_found(page: &PageId, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            " Page not found",
            Style::default()
                .fg(theme::ALERT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" No page is registered under \"{page}\"."),
            Style::default().fg(theme::DIM),
        )),
        Line::from(Span::styled(
            " Press [d] to return to the dashboard.",
            Style::default().fg(theme::DIM),
        )),
    ];
    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label_resolves_top_level_and_nested_ids() {
        assert_eq!(page_label(&PageId::from("helpdesk")), Some("Helpdesk"));
        assert_eq!(page_label(&PageId::from("applyLeave")), Some("Apply Leave"));
        assert_eq!(page_label(&PageId::from("payroll")), Some("Payroll"));
    }

    #[test]
    fn test_page_label_unknown_id_is_none() {
        assert_eq!(page_label(&PageId::from("doesNotExist")), None);
    }
}
