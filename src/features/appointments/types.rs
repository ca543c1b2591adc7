use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Approved,
    Declined,
    #[serde(other)]
    Other,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Declined => "Declined",
            Self::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Appointment as returned by `appointments/mine`. Party fields (doctor,
/// patient) come back in whatever shape the backend chooses and are kept in
/// `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub scheduled_time: Option<String>,
    pub status: AppointmentStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Appointment {
    /// Calendar date of the scheduled time in local time. Accepts RFC 3339
    /// timestamps and the `datetime-local` form value the booking form sends.
    #[must_use]
    pub fn scheduled_date(&self) -> Option<NaiveDate> {
        parse_schedule(self.scheduled_time.as_deref()?)
    }
}

/// Body for `appointments/request`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub doctor_id: String,
    pub reason: String,
    pub specialization: String,
    pub scheduled_time: String,
}

pub(crate) fn parse_schedule(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Local).date_naive());
    }

    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .into_iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.date())
}
