//! Reusable UI components

pub mod dashboard;
pub mod header;
pub mod notifications;
pub mod pages;
pub mod sidebar;

pub use dashboard::Dashboard;
pub use header::HeaderBar;
pub use notifications::NotificationPanel;
pub use pages::PageView;
pub use sidebar::SidebarMenu;

use chrono::{DateTime, Local};

/// Short human timestamp for activity rows
pub fn format_time(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%b %d, %H:%M").to_string()
}
