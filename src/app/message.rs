//! Message types for the application (TEA pattern)

use crate::core::PageId;
use crossterm::event::KeyEvent;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(KeyEvent),

    /// Terminal resized to (width, height)
    Resize(u16, u16),

    /// Tick event for periodic redraw
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Layout Transitions
    // ─────────────────────────────────────────────────────────
    /// Switch the current page; collapses any open submenu and closes
    /// the sidebar on a narrow viewport
    Navigate(PageId),
    /// Expand a submenu group, collapsing whichever one was open;
    /// collapse it if it was already expanded
    ToggleSubmenu(PageId),
    /// Flip sidebar visibility
    ToggleSidebar,
    /// Close the sidebar (idempotent; backdrop dismissal)
    CloseSidebar,
    /// Flip the notification overlay
    ToggleNotifications,
    /// Close the notification overlay (idempotent)
    CloseNotifications,

    // ─────────────────────────────────────────────────────────
    // Menu Cursor
    // ─────────────────────────────────────────────────────────
    /// Move the menu selection up one visible row
    MenuUp,
    /// Move the menu selection down one visible row
    MenuDown,
}
