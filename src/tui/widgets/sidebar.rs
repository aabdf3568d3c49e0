//! Sidebar menu widget
//!
//! Renders the visible menu rows for the current expansion state.
//! Active highlighting is derived at render time:
//! `current_page == item.id || expanded_menu == item.id`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::AppState;
use crate::tui::theme;

pub struct SidebarMenu<'a> {
    state: &'a AppState,
}

impl<'a> SidebarMenu<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn menu_lines(&self) -> Vec<Line<'static>> {
        let layout = &self.state.layout;
        self.state
            .menu_rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let item = row.item;
                let active = layout.current_page == item.id
                    || layout.expanded_menu.as_ref() == Some(&item.id);
                let under_cursor = i == self.state.menu_cursor;

                let mut style = if active {
                    Style::default()
                        .fg(theme::HIGHLIGHT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme::DIM)
                };
                if under_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                let indent = if row.nested { "    " } else { " " };
                let mut spans = vec![Span::raw(indent.to_string())];
                if !row.nested {
                    spans.push(Span::styled(
                        format!("{} ", theme::nav_glyph(item.icon)),
                        style,
                    ));
                }
                spans.push(Span::styled(item.label, style));
                if item.is_group() {
                    let arrow = if layout.expanded_menu.as_ref() == Some(&item.id) {
                        " ▾"
                    } else {
                        " ▸"
                    };
                    spans.push(Span::styled(arrow.to_string(), style));
                }
                Line::from(spans)
            })
            .collect()
    }
}

impl Widget for SidebarMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.menu_lines())
            .block(Block::default().borders(Borders::RIGHT))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handler::update;
    use crate::app::message::Message;
    use crate::core::PageId;

    fn state() -> AppState {
        let mut state = AppState::new();
        state.viewport_width = 120;
        state
    }

    #[test]
    fn test_menu_lines_follow_expansion() {
        let mut state = state();
        let sidebar = SidebarMenu::new(&state);
        let collapsed = sidebar.menu_lines().len();

        update(&mut state, Message::ToggleSubmenu(PageId::from("leave")));
        let sidebar = SidebarMenu::new(&state);
        assert_eq!(sidebar.menu_lines().len(), collapsed + 3);
    }

    #[test]
    fn test_group_row_shows_expansion_arrow() {
        let mut state = state();
        update(&mut state, Message::ToggleSubmenu(PageId::from("payroll")));

        let sidebar = SidebarMenu::new(&state);
        let lines = sidebar.menu_lines();
        let rendered: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert!(rendered.iter().any(|l: &String| l.contains("Payroll ▾")));
        assert!(rendered.iter().any(|l: &String| l.contains("Attendance ▸")));
    }
}
