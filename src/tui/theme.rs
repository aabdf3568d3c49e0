//! Palette and icon lookup for the portal UI

use crate::core::{ActivityKind, Icon};
use ratatui::style::Color;

pub const BRAND: Color = Color::Cyan;
pub const ACCENT: Color = Color::Yellow;
pub const DIM: Color = Color::DarkGray;
pub const HIGHLIGHT: Color = Color::White;
pub const ALERT: Color = Color::Red;

/// Fallback glyph for icon slots nothing else claims
pub const DEFAULT_GLYPH: &str = "•";

/// Glyph for a navigation icon token
pub fn nav_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Gauge => "◉",
        Icon::Clock => "⏱",
        Icon::Calendar => "▦",
        Icon::Banknote => "$",
        Icon::LifeBuoy => "?",
        Icon::User => "@",
    }
}

/// Glyph for an activity kind, with a defined fallback for kinds this
/// table does not name.
pub fn activity_glyph(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Leave => "▦",
        ActivityKind::Payslip => "$",
        ActivityKind::Attendance => "⏱",
        ActivityKind::Timecard => "▤",
        #[allow(unreachable_patterns)]
        _ => DEFAULT_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_activity_kind_has_a_glyph() {
        let kinds = [
            ActivityKind::Leave,
            ActivityKind::Payslip,
            ActivityKind::Attendance,
            ActivityKind::Timecard,
        ];
        for kind in kinds {
            assert!(!activity_glyph(kind).is_empty());
        }
    }
}
