//! External data provider boundary
//!
//! The portal core only observes domain collections; this module loads
//! a JSON snapshot of them once at startup. The snapshot is immutable
//! for the lifetime of the session, so aggregation never observes a
//! partially updated collection.

use std::path::Path;

use crate::common::prelude::*;
use crate::core::PortalData;

/// Load the portal data snapshot from a JSON file.
///
/// A missing file yields an empty snapshot (a defined state rendered as
/// "no activity" and zero pending requests); malformed JSON is an
/// error.
pub fn load_snapshot(path: &Path) -> Result<PortalData> {
    if !path.exists() {
        warn!("Data snapshot {:?} not found, using empty collections", path);
        return Ok(PortalData::default());
    }

    let content = std::fs::read_to_string(path)?;
    let data: PortalData = serde_json::from_str(&content)
        .map_err(|e| Error::data_invalid(format!("{}: {}", path.display(), e)))?;

    info!(
        "Loaded snapshot: {} activities, {} leave, {} attendance, {} timecards, {} payslip, {} helpdesk",
        data.activities.len(),
        data.leave_requests.len(),
        data.attendance_corrections.len(),
        data.timecards.len(),
        data.payslip_requests.len(),
        data.helpdesk.len(),
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{pending_count, RequestStatus, TicketStatus};
    use std::io::Write;

    #[test]
    fn test_load_snapshot_missing_file_is_empty() {
        let data = load_snapshot(Path::new("/nonexistent/portal.json")).unwrap();
        assert!(data.activities.is_empty());
        assert_eq!(pending_count(&data), 0);
    }

    #[test]
    fn test_load_snapshot_parses_collections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
  "leave_requests": [
    {{"title": "Annual leave", "status": "Pending", "submitted": null}},
    {{"title": "Sick day", "status": "Approved", "submitted": null}}
  ],
  "helpdesk": [
    {{"title": "VPN access", "status": "In Progress", "submitted": null}}
  ],
  "activities": [
    {{"kind": "Leave", "title": "Leave approved", "desc": "Nov 21-22",
      "timestamp": "2026-08-20T09:30:00+02:00"}}
  ]
}}"#
        )
        .unwrap();

        let data = load_snapshot(file.path()).unwrap();

        assert_eq!(data.leave_requests.len(), 2);
        assert_eq!(data.leave_requests[0].status, Some(RequestStatus::Pending));
        assert_eq!(data.helpdesk[0].status, Some(TicketStatus::InProgress));
        assert_eq!(data.activities.len(), 1);
        assert_eq!(pending_count(&data), 2);
    }

    #[test]
    fn test_load_snapshot_parses_employee_stats() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
  "employee": {{"name": "Jordan Rivera", "employee_id": "EMP-0412"}},
  "stats": {{"remaining_leaves": 18, "attendance_percent": 95,
             "next_salary_date": "Aug 31"}}
}}"#
        )
        .unwrap();

        let data = load_snapshot(file.path()).unwrap();

        let stats = data.stats.unwrap();
        assert_eq!(stats.remaining_leaves, 18);
        assert_eq!(stats.attendance_percent, 95);
        assert_eq!(stats.next_salary_date, "Aug 31");
    }

    #[test]
    fn test_load_snapshot_record_without_status() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"timecards": [{{"title": "Week 46", "submitted": null}}]}}"#
        )
        .unwrap();

        let data = load_snapshot(file.path()).unwrap();

        assert_eq!(data.timecards[0].status, None);
        assert_eq!(pending_count(&data), 0);
    }

    #[test]
    fn test_load_snapshot_malformed_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = load_snapshot(file.path());

        assert!(matches!(result, Err(Error::DataInvalid { .. })));
    }
}
