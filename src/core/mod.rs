//! Core domain: navigation registry, domain records, aggregation

pub mod activity;
pub mod nav;
pub mod records;

pub use activity::{has_unread, pending_count, recent_activities};
pub use nav::{registry, visible_rows, Icon, NavItem, NavRow, PageId};
pub use records::{
    Activity, ActivityKind, AttendanceCorrection, Employee, EmployeeStats, HelpdeskTicket,
    LeaveRequest, PayslipRequest, PortalData, RequestStatus, TicketStatus, Timecard,
};
