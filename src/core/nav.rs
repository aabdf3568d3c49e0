//! Navigation registry: the static menu tree

use std::fmt;
use std::sync::OnceLock;

/// Opaque page identifier.
///
/// The layout controller stores these verbatim and never checks
/// registry membership; unknown ids surface as the not-found view at
/// the render boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for PageId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Opaque icon tokens carried on navigation items.
///
/// Glyph resolution happens in the theme layer; the core never
/// interprets these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Gauge,
    Clock,
    Calendar,
    Banknote,
    LifeBuoy,
    User,
}

/// A single navigation entry: a leaf page or a one-level group.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: PageId,
    pub label: &'static str,
    pub icon: Icon,
    pub submenu: Vec<NavItem>,
}

impl NavItem {
    fn leaf(id: &str, label: &'static str, icon: Icon) -> Self {
        Self {
            id: PageId::from(id),
            label,
            icon,
            submenu: Vec::new(),
        }
    }

    fn group(id: &str, label: &'static str, icon: Icon, submenu: Vec<NavItem>) -> Self {
        Self {
            id: PageId::from(id),
            label,
            icon,
            submenu,
        }
    }

    pub fn is_group(&self) -> bool {
        !self.submenu.is_empty()
    }
}

/// The portal menu, constructed once at process start.
pub fn registry() -> &'static [NavItem] {
    static REGISTRY: OnceLock<Vec<NavItem>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        vec![
            NavItem::leaf("dashboard", "Dashboard", Icon::Gauge),
            NavItem::group(
                "attendance",
                "Attendance",
                Icon::Clock,
                vec![
                    NavItem::leaf("checkInOut", "Check In/Out", Icon::Clock),
                    NavItem::leaf("timesheet", "Timesheet", Icon::Clock),
                    NavItem::leaf("correctionRequests", "Correction Requests", Icon::Clock),
                ],
            ),
            NavItem::group(
                "leave",
                "Leave",
                Icon::Calendar,
                vec![
                    NavItem::leaf("applyLeave", "Apply Leave", Icon::Calendar),
                    NavItem::leaf("leaveBalance", "Leave Balance", Icon::Calendar),
                    NavItem::leaf("holidayCalendar", "Holiday Calendar", Icon::Calendar),
                ],
            ),
            NavItem::group(
                "payroll",
                "Payroll",
                Icon::Banknote,
                vec![
                    NavItem::leaf("payslips", "Payslips", Icon::Banknote),
                    NavItem::leaf("payslipRequests", "Payslip Requests", Icon::Banknote),
                ],
            ),
            NavItem::leaf("helpdesk", "Helpdesk", Icon::LifeBuoy),
            NavItem::leaf("profile", "My Profile", Icon::User),
        ]
    })
}

/// A row of the menu as currently visible: top-level items always,
/// submenu items only under the expanded group.
#[derive(Debug, Clone, Copy)]
pub struct NavRow<'a> {
    pub item: &'a NavItem,
    pub nested: bool,
}

/// Flatten the tree into the rows visible for a given expansion state.
pub fn visible_rows<'a>(items: &'a [NavItem], expanded: Option<&PageId>) -> Vec<NavRow<'a>> {
    let mut rows = Vec::new();
    for item in items {
        rows.push(NavRow {
            item,
            nested: false,
        });
        if item.is_group() && expanded == Some(&item.id) {
            for sub in &item.submenu {
                rows.push(NavRow {
                    item: sub,
                    nested: true,
                });
            }
        }
    }
    rows
}
