//! Data behind the role dashboards. The reads are issued together and joined;
//! each failure becomes a message for its own panel and leaves the others and
//! the session untouched.

use crate::{
    api::{ApiClient, ApiError},
    features::{
        appointments::{client as appointments, Appointment, PatientStats},
        auth::Session,
        doctors::{client as doctors, Doctor, Specialization},
        notifications::{client as notifications, unread_count, Notification},
        reports::{client as reports, Report},
    },
};
use chrono::NaiveDate;
use tracing::{instrument, warn};

#[derive(Clone, Debug, Default)]
pub struct DashboardData {
    pub doctors: Vec<Doctor>,
    pub appointments: Vec<Appointment>,
    pub reports: Vec<Report>,
    pub notifications: Vec<Notification>,
    /// One inline message per failed read, prefixed with the panel name.
    pub errors: Vec<String>,
}

impl DashboardData {
    #[must_use]
    pub fn stats(&self, today: NaiveDate) -> PatientStats {
        PatientStats::compute(&self.appointments, self.reports.len(), today)
    }

    #[must_use]
    pub fn unread(&self) -> usize {
        unread_count(&self.notifications)
    }
}

/// Loads doctors (filtered by `specialization` when set), appointments,
/// reports and notifications for the signed-in user.
#[instrument(skip_all, fields(user_id = %session.user.id))]
pub async fn load(
    api: &ApiClient,
    session: &Session,
    specialization: Option<Specialization>,
) -> DashboardData {
    let token = &session.token;
    let (doctor_list, appointment_list, report_list, notification_list) = tokio::join!(
        doctors::list_for_filter(api, token, specialization),
        appointments::my_appointments(api, token),
        reports::my_reports(api, token),
        notifications::list_notifications(api, token),
    );

    let mut errors = Vec::new();
    DashboardData {
        doctors: collect("doctors", doctor_list, &mut errors),
        appointments: collect("appointments", appointment_list, &mut errors),
        reports: collect("reports", report_list, &mut errors),
        notifications: collect("notifications", notification_list, &mut errors),
        errors,
    }
}

fn collect<T>(panel: &str, result: Result<Vec<T>, ApiError>, errors: &mut Vec<String>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            warn!(panel, "dashboard read failed: {err}");
            errors.push(format!("{panel}: {}", err.inline_message("Request failed")));
            Vec::new()
        }
    }
}
