//! Key event translation into messages
//!
//! Keys never mutate state directly; they produce messages that flow
//! through `update`. Leaf rows emit `Navigate`, group rows emit
//! `ToggleSubmenu` - the structural guard against toggling a submenu
//! on a leaf.

use crate::app::message::Message;
use crate::app::state::AppState;
use crate::core::PageId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Convert key events to messages based on what is currently open
pub fn handle_key(state: &AppState, key: KeyEvent) -> Option<Message> {
    if state.layout.notification_open {
        handle_key_notifications(key)
    } else {
        handle_key_normal(state, key)
    }
}

/// Keys while the notification overlay is open
fn handle_key_notifications(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('n') => Some(Message::CloseNotifications),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Message::Quit),
        KeyCode::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Keys in the main layout
fn handle_key_normal(state: &AppState, key: KeyEvent) -> Option<Message> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Message::Quit),
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Message::Quit),

        // Esc dismisses the sidebar when it overlays the content,
        // otherwise quits
        (KeyCode::Esc, _) => {
            if state.is_narrow() && state.layout.sidebar_open {
                Some(Message::CloseSidebar)
            } else {
                Some(Message::Quit)
            }
        }

        // ─────────────────────────────────────────────────────────
        // Menu Navigation
        // ─────────────────────────────────────────────────────────
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Some(Message::MenuUp),
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Some(Message::MenuDown),

        (KeyCode::Enter, _) => {
            let row = state.selected_row()?;
            if row.item.is_group() {
                Some(Message::ToggleSubmenu(row.item.id.clone()))
            } else {
                Some(Message::Navigate(row.item.id.clone()))
            }
        }

        // ─────────────────────────────────────────────────────────
        // Toggles
        // ─────────────────────────────────────────────────────────
        (KeyCode::Char('b'), KeyModifiers::NONE) | (KeyCode::Tab, KeyModifiers::NONE) => {
            Some(Message::ToggleSidebar)
        }
        (KeyCode::Char('n'), KeyModifiers::NONE) => Some(Message::ToggleNotifications),

        // ─────────────────────────────────────────────────────────
        // Quick Actions (dashboard shortcuts)
        // ─────────────────────────────────────────────────────────
        (KeyCode::Char('d'), KeyModifiers::NONE) => {
            Some(Message::Navigate(PageId::from("dashboard")))
        }
        (KeyCode::Char('1'), KeyModifiers::NONE) => {
            Some(Message::Navigate(PageId::from("checkInOut")))
        }
        (KeyCode::Char('2'), KeyModifiers::NONE) => {
            Some(Message::Navigate(PageId::from("applyLeave")))
        }
        (KeyCode::Char('3'), KeyModifiers::NONE) => {
            Some(Message::Navigate(PageId::from("timesheet")))
        }
        (KeyCode::Char('4'), KeyModifiers::NONE) => {
            Some(Message::Navigate(PageId::from("payslips")))
        }

        _ => None,
    }
}
