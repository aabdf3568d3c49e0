//! Main update function - handles state transitions (TEA pattern)

use crate::app::message::Message;
use crate::app::state::{AppPhase, AppState};
use crate::common::prelude::*;

use super::keys::handle_key;

/// Process a message and update state.
///
/// Every transition is total and applied atomically before the next
/// message is accepted; no intermediate state is observable.
pub fn update(state: &mut AppState, message: Message) {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                update(state, msg);
            }
        }

        Message::Resize(width, _height) => {
            state.viewport_width = width;
        }

        Message::Tick => {}

        // ─────────────────────────────────────────────────────────
        // Layout Transitions
        // ─────────────────────────────────────────────────────────
        Message::Navigate(page) => {
            debug!("navigate to {}", page);
            state.layout.current_page = page;
            // Any open group collapses; highlighting derives from
            // current_page alone.
            state.layout.expanded_menu = None;
            if state.is_narrow() {
                state.layout.sidebar_open = false;
            }
            state.clamp_menu_cursor();
        }

        Message::ToggleSubmenu(group) => {
            // Single-open-group: expanding one implicitly collapses
            // whichever other group was open. The id is stored
            // verbatim; the controller does not distinguish id kinds.
            if state.layout.expanded_menu.as_ref() == Some(&group) {
                state.layout.expanded_menu = None;
            } else {
                state.layout.expanded_menu = Some(group);
            }
            state.clamp_menu_cursor();
        }

        Message::ToggleSidebar => {
            state.layout.sidebar_open = !state.layout.sidebar_open;
        }

        Message::CloseSidebar => {
            state.layout.sidebar_open = false;
        }

        Message::ToggleNotifications => {
            state.layout.notification_open = !state.layout.notification_open;
        }

        Message::CloseNotifications => {
            state.layout.notification_open = false;
        }

        // ─────────────────────────────────────────────────────────
        // Menu Cursor
        // ─────────────────────────────────────────────────────────
        Message::MenuUp => {
            state.menu_cursor = state.menu_cursor.saturating_sub(1);
        }

        Message::MenuDown => {
            let len = state.menu_rows().len();
            if state.menu_cursor + 1 < len {
                state.menu_cursor += 1;
            }
        }
    }
}
