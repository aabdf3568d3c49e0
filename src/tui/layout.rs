//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 26;

/// Screen areas for the main layout
pub struct ScreenAreas {
    pub header: Rect,
    /// Absent when the sidebar is closed
    pub sidebar: Option<Rect>,
    pub content: Rect,
    /// On a narrow viewport the sidebar overlays the content instead
    /// of sharing the row with it
    pub sidebar_overlays: bool,
}

/// Create the main screen layout
pub fn create(area: Rect, sidebar_open: bool, narrow: bool) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(5),    // Sidebar + content
    ])
    .split(area);
    let body = chunks[1];

    if !sidebar_open {
        return ScreenAreas {
            header: chunks[0],
            sidebar: None,
            content: body,
            sidebar_overlays: false,
        };
    }

    if narrow {
        // Sidebar floats over the full-width content
        let sidebar = Rect {
            width: SIDEBAR_WIDTH.min(body.width),
            ..body
        };
        return ScreenAreas {
            header: chunks[0],
            sidebar: Some(sidebar),
            content: body,
            sidebar_overlays: true,
        };
    }

    let cols = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(body);
    ScreenAreas {
        header: chunks[0],
        sidebar: Some(cols[0]),
        content: cols[1],
        sidebar_overlays: false,
    }
}
