//! Main render/view function (View in TEA pattern)
//!
//! The composition root: derives what is visible purely from state and
//! dispatches to the widgets. It never mutates state.

use super::{layout, widgets};
use crate::app::state::AppState;
use ratatui::{widgets::Clear, Frame};

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let areas = layout::create(area, state.layout.sidebar_open, state.is_narrow());

    frame.render_widget(widgets::HeaderBar::new(state), areas.header);

    // Page body for the current page (not-found fallback inside)
    frame.render_widget(widgets::PageView::new(state), areas.content);

    // Sidebar last when it overlays the content
    if let Some(sidebar_area) = areas.sidebar {
        if areas.sidebar_overlays {
            frame.render_widget(Clear, sidebar_area);
        }
        frame.render_widget(widgets::SidebarMenu::new(state), sidebar_area);
    }

    if state.layout.notification_open {
        let panel =
            widgets::NotificationPanel::new(&state.data.activities, state.recent_limit);
        frame.render_widget(panel, area);
    }
}
