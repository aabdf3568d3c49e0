//! Domain record types supplied by the external data provider
//!
//! The portal only reads these collections; they are owned and mutated
//! elsewhere. A record with a missing status is valid and never counts
//! as pending.

use chrono::{DateTime, Local};
use serde::Deserialize;

/// Status of a leave request, attendance correction, timecard, or
/// payslip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// Status of a helpdesk ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaveRequest {
    pub title: String,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub submitted: Option<DateTime<Local>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceCorrection {
    pub title: String,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub submitted: Option<DateTime<Local>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Timecard {
    pub title: String,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub submitted: Option<DateTime<Local>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayslipRequest {
    pub title: String,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub submitted: Option<DateTime<Local>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HelpdeskTicket {
    pub title: String,
    #[serde(default)]
    pub status: Option<TicketStatus>,
    #[serde(default)]
    pub submitted: Option<DateTime<Local>>,
}

/// Kind tag on an activity entry, used only to pick a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ActivityKind {
    Leave,
    Payslip,
    Attendance,
    Timecard,
}

/// One entry of the recent-activity feed, supplied newest-first.
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub title: String,
    pub desc: String,
    pub timestamp: DateTime<Local>,
}

/// The signed-in employee, as reported by the (external) auth layer.
#[derive(Debug, Clone, Deserialize)]
pub struct Employee {
    pub name: String,
    pub employee_id: String,
}

/// Per-employee headline figures computed by the (external) backend.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeStats {
    /// Annual leave days left
    pub remaining_leaves: u32,

    /// Attendance for the current month, in percent
    pub attendance_percent: u8,

    /// Next salary date, preformatted for display
    pub next_salary_date: String,
}

/// Immutable snapshot of everything the data provider exposes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PortalData {
    pub employee: Option<Employee>,
    pub stats: Option<EmployeeStats>,
    pub leave_requests: Vec<LeaveRequest>,
    pub attendance_corrections: Vec<AttendanceCorrection>,
    pub timecards: Vec<Timecard>,
    pub payslip_requests: Vec<PayslipRequest>,
    pub helpdesk: Vec<HelpdeskTicket>,
    pub activities: Vec<Activity>,
}
