use super::types::{Appointment, AppointmentStatus};
use chrono::NaiveDate;

/// Number of appointments shown in the dashboard's "recent" list.
pub const RECENT_LIMIT: usize = 3;

/// Counters shown at the top of the patient dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatientStats {
    pub pending: usize,
    pub today: usize,
    pub approved: usize,
    pub reports: usize,
}

impl PatientStats {
    /// Today's count only includes approved appointments scheduled on `today`.
    #[must_use]
    pub fn compute(appointments: &[Appointment], reports: usize, today: NaiveDate) -> Self {
        let pending = count_status(appointments, AppointmentStatus::Pending);
        let approved = appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Approved);

        Self {
            pending,
            today: approved
                .clone()
                .filter(|a| a.scheduled_date() == Some(today))
                .count(),
            approved: approved.count(),
            reports,
        }
    }
}

#[must_use]
pub fn count_status(appointments: &[Appointment], status: AppointmentStatus) -> usize {
    appointments.iter().filter(|a| a.status == status).count()
}

/// The first few appointments, in backend order.
#[must_use]
pub fn recent(appointments: &[Appointment]) -> &[Appointment] {
    &appointments[..appointments.len().min(RECENT_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn appointment(status: AppointmentStatus, when: Option<&str>) -> Appointment {
        Appointment {
            id: "a".to_string(),
            reason: None,
            specialization: None,
            scheduled_time: when.map(str::to_string),
            status,
            extra: Map::new(),
        }
    }

    #[test]
    fn stats_count_by_status_and_day() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let appointments = vec![
            appointment(AppointmentStatus::Pending, Some("2026-10-19T10:00")),
            appointment(AppointmentStatus::Approved, Some("2026-10-19T11:00")),
            appointment(AppointmentStatus::Approved, Some("2026-10-20T11:00")),
            appointment(AppointmentStatus::Approved, None),
            appointment(AppointmentStatus::Declined, Some("2026-10-19T09:00")),
        ];

        assert_eq!(
            PatientStats::compute(&appointments, 2, today),
            PatientStats {
                pending: 1,
                today: 1,
                approved: 3,
                reports: 2,
            }
        );
    }

    #[test]
    fn recent_is_capped() {
        let many = vec![appointment(AppointmentStatus::Pending, None); 5];
        assert_eq!(recent(&many).len(), RECENT_LIMIT);
        assert!(recent(&[]).is_empty());
    }
}
