//! Cross-domain activity aggregation
//!
//! Pure functions over the provider snapshot: a single pending-request
//! count for the dashboard stat, a bounded prefix of the activity feed,
//! and the unread presence indicator for the header bell.

use super::records::{Activity, PortalData, RequestStatus, TicketStatus};

/// Sum of records awaiting attention across all five domains.
///
/// A missing status never counts. Inputs are read-only and assumed to
/// be an immutable snapshot.
pub fn pending_count(data: &PortalData) -> usize {
    let pending = |s: &Option<RequestStatus>| matches!(s, Some(RequestStatus::Pending));

    data.leave_requests
        .iter()
        .filter(|r| pending(&r.status))
        .count()
        + data
            .attendance_corrections
            .iter()
            .filter(|c| pending(&c.status))
            .count()
        + data.timecards.iter().filter(|t| pending(&t.status)).count()
        + data
            .payslip_requests
            .iter()
            .filter(|p| pending(&p.status))
            .count()
        + data
            .helpdesk
            .iter()
            .filter(|h| {
                matches!(
                    h.status,
                    Some(TicketStatus::Open) | Some(TicketStatus::InProgress)
                )
            })
            .count()
}

/// The first `n` activities of a newest-first feed.
///
/// The provider owns the ordering; this only truncates.
pub fn recent_activities(activities: &[Activity], n: usize) -> &[Activity] {
    &activities[..activities.len().min(n)]
}

/// Whether the header bell should show the unread dot.
///
/// There is no read/unread tracking; presence of any activity counts
/// as unread.
pub fn has_unread(activities: &[Activity]) -> bool {
    !activities.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::ActivityKind;
    use chrono::Local;

    fn leave(status: Option<RequestStatus>) -> crate::core::records::LeaveRequest {
        crate::core::records::LeaveRequest {
            title: "Annual leave".to_string(),
            status,
            submitted: None,
        }
    }

    fn timecard(status: Option<RequestStatus>) -> crate::core::records::Timecard {
        crate::core::records::Timecard {
            title: "Week 46".to_string(),
            status,
            submitted: None,
        }
    }

    fn ticket(status: Option<TicketStatus>) -> crate::core::records::HelpdeskTicket {
        crate::core::records::HelpdeskTicket {
            title: "Laptop battery".to_string(),
            status,
            submitted: None,
        }
    }

    fn activity(title: &str) -> Activity {
        Activity {
            kind: ActivityKind::Leave,
            title: title.to_string(),
            desc: String::new(),
            timestamp: Local::now(),
        }
    }

    #[test]
    fn test_pending_count_sums_per_domain_filters() {
        let data = PortalData {
            leave_requests: vec![
                leave(Some(RequestStatus::Pending)),
                leave(Some(RequestStatus::Approved)),
            ],
            attendance_corrections: vec![],
            timecards: vec![timecard(Some(RequestStatus::Pending))],
            payslip_requests: vec![],
            helpdesk: vec![
                ticket(Some(TicketStatus::Open)),
                ticket(Some(TicketStatus::Closed)),
            ],
            activities: vec![],
            ..Default::default()
        };

        assert_eq!(pending_count(&data), 3);
    }

    #[test]
    fn test_pending_count_counts_in_progress_tickets() {
        let data = PortalData {
            helpdesk: vec![
                ticket(Some(TicketStatus::InProgress)),
                ticket(Some(TicketStatus::Resolved)),
            ],
            ..Default::default()
        };

        assert_eq!(pending_count(&data), 1);
    }

    #[test]
    fn test_pending_count_empty_snapshot_is_zero() {
        assert_eq!(pending_count(&PortalData::default()), 0);
    }

    #[test]
    fn test_pending_count_missing_status_is_not_pending() {
        let data = PortalData {
            leave_requests: vec![leave(None), leave(Some(RequestStatus::Pending))],
            timecards: vec![timecard(None)],
            helpdesk: vec![ticket(None)],
            ..Default::default()
        };

        assert_eq!(pending_count(&data), 1);
    }

    #[test]
    fn test_recent_activities_truncates_in_order() {
        let feed: Vec<Activity> = (0..6).map(|i| activity(&format!("a{i}"))).collect();

        let recent = recent_activities(&feed, 4);
        assert_eq!(recent.len(), 4);
        assert_eq!(recent[0].title, "a0");
        assert_eq!(recent[3].title, "a3");
    }

    #[test]
    fn test_recent_activities_short_feed_returned_whole() {
        let feed = vec![activity("a0"), activity("a1")];

        let recent = recent_activities(&feed, 4);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[1].title, "a1");
    }

    #[test]
    fn test_recent_activities_empty_feed() {
        assert!(recent_activities(&[], 4).is_empty());
    }

    #[test]
    fn test_has_unread_tracks_presence_only() {
        assert!(!has_unread(&[]));
        assert!(has_unread(&[activity("a0")]));
    }
}
