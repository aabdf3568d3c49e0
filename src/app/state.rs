//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::core::{registry, visible_rows, NavRow, PageId, PortalData};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    Running,
    Quitting,
}

/// The view state owned by the layout controller.
///
/// Every change goes through `handler::update`; render paths only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    /// Page currently dispatched to the render boundary
    pub current_page: PageId,

    /// Sidebar visibility
    pub sidebar_open: bool,

    /// The single expanded submenu group, if any
    pub expanded_menu: Option<PageId>,

    /// Notification overlay visibility
    pub notification_open: bool,
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            current_page: PageId::from("dashboard"),
            sidebar_open: true,
            expanded_menu: None,
            notification_open: false,
        }
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Layout/navigation view state
    pub layout: LayoutState,

    /// Terminal width in columns, updated from resize events
    pub viewport_width: u16,

    /// Width below which the layout is considered narrow
    pub narrow_breakpoint: u16,

    /// How many activities the dashboard and overlay show
    pub recent_limit: usize,

    /// Selected row of the visible menu
    pub menu_cursor: usize,

    /// Read-only snapshot from the data provider
    pub data: PortalData,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), PortalData::default())
    }

    pub fn with_settings(settings: Settings, data: PortalData) -> Self {
        Self {
            phase: AppPhase::Running,
            layout: LayoutState::new(),
            viewport_width: 0,
            narrow_breakpoint: settings.ui.narrow_breakpoint,
            recent_limit: settings.ui.recent_activities,
            menu_cursor: 0,
            data,
        }
    }

    /// The injected viewport predicate: below the breakpoint the
    /// sidebar auto-closes after navigation and overlays the content.
    pub fn is_narrow(&self) -> bool {
        self.viewport_width < self.narrow_breakpoint
    }

    /// Menu rows visible under the current expansion state
    pub fn menu_rows(&self) -> Vec<NavRow<'static>> {
        visible_rows(registry(), self.layout.expanded_menu.as_ref())
    }

    /// The menu row under the cursor
    pub fn selected_row(&self) -> Option<NavRow<'static>> {
        self.menu_rows().get(self.menu_cursor).copied()
    }

    /// Keep the cursor inside the visible rows after expansion changes
    pub fn clamp_menu_cursor(&mut self) {
        let len = self.menu_rows().len();
        if len == 0 {
            self.menu_cursor = 0;
        } else if self.menu_cursor >= len {
            self.menu_cursor = len - 1;
        }
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
