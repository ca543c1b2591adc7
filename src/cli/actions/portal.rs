//! Data views. Each one mounts its route through the guard first, so a
//! signed-out or wrong-role session never issues the request.

use super::Portal;
use crate::{
    features::{
        appointments::{
            client::{self as appointment_api, REQUEST_FAILED_MESSAGE, REQUEST_OK_MESSAGE},
            Appointment, BookingForm,
        },
        doctors::{client as doctor_api, Doctor, Problem, Specialization},
        notifications::{client as notification_api, unread_count},
        reports::client as report_api,
    },
    routes::Route,
};
use anyhow::{anyhow, Result};
use std::fmt::Write as _;
use tracing::info;

#[derive(Debug)]
pub struct BookArgs {
    pub doctor_id: String,
    pub problem: Problem,
    /// Overrides the problem's recommended specialization.
    pub specialization: Option<Specialization>,
    pub scheduled_time: String,
}

#[must_use]
pub fn appointment_line(appointment: &Appointment) -> String {
    format!(
        "{:<9} {:<20} {:<32} {}\n",
        appointment.status.to_string(),
        appointment.scheduled_time.as_deref().unwrap_or("-"),
        appointment.specialization.as_deref().unwrap_or("-"),
        appointment.reason.as_deref().unwrap_or("-"),
    )
}

fn doctor_line(doctor: &Doctor) -> String {
    let experience = doctor
        .experience_years()
        .map(|years| format!("{years}y"))
        .unwrap_or_default();
    format!(
        "{:<26} {:<20} {:<32} {}\n",
        doctor.id,
        doctor.username,
        doctor.specialization.as_deref().unwrap_or("-"),
        experience
    )
}

/// # Errors
/// Returns an error when not signed in or the request fails.
pub async fn notifications(portal: &Portal) -> Result<String> {
    let session = portal.mount(Route::Dashboard)?;
    let list = notification_api::list_notifications(portal.api(), &session.token)
        .await
        .map_err(|err| anyhow!(err.inline_message("Failed to load notifications")))?;

    let mut out = format!("{} unread\n", unread_count(&list));
    for notification in &list {
        let marker = if notification.read { " " } else { "*" };
        let _ = writeln!(out, "{marker} {}", notification.message);
    }
    Ok(out)
}

/// # Errors
/// Returns an error when not signed in or the request fails.
pub async fn doctors(portal: &Portal, specialization: Option<Specialization>) -> Result<String> {
    let session = portal.mount(Route::Doctors)?;
    let list = doctor_api::list_for_filter(portal.api(), &session.token, specialization)
        .await
        .map_err(|err| anyhow!(err.inline_message("Failed to load doctors")))?;

    if list.is_empty() {
        return Ok("No doctors found\n".to_string());
    }
    Ok(list.iter().map(doctor_line).collect())
}

/// # Errors
/// Returns an error when the session may not book or the request fails.
pub async fn availability(portal: &Portal, doctor_id: &str) -> Result<String> {
    let session = portal.mount(Route::PatientDashboard)?;
    let slots = doctor_api::availability(portal.api(), &session.token, doctor_id)
        .await
        .map_err(|err| anyhow!(err.inline_message("Failed to load availability")))?;

    if slots.is_empty() {
        return Ok("No availability published\n".to_string());
    }

    let mut out = String::new();
    for slot in &slots {
        let _ = writeln!(
            out,
            "{:<10} {} - {}",
            slot.day.as_deref().unwrap_or("-"),
            slot.start_time.as_deref().unwrap_or("?"),
            slot.end_time.as_deref().unwrap_or("?"),
        );
    }
    Ok(out)
}

/// # Errors
/// Returns an error when the session may not see appointments or the request
/// fails.
pub async fn appointments(portal: &Portal) -> Result<String> {
    let session = portal.mount(Route::PatientDashboard)?;
    let list = appointment_api::my_appointments(portal.api(), &session.token)
        .await
        .map_err(|err| anyhow!(err.inline_message("Failed to load appointments")))?;

    if list.is_empty() {
        return Ok("No appointments yet\n".to_string());
    }
    Ok(list.iter().map(appointment_line).collect())
}

/// Fills the booking form the way the dashboard does and submits it.
///
/// # Errors
/// Returns the first missing field, or the backend's message when the request
/// is refused.
pub async fn book(portal: &Portal, args: BookArgs) -> Result<String> {
    let session = portal.mount(Route::PatientDashboard)?;

    let mut form = BookingForm::default();
    form.select_problem(Some(args.problem));
    if args.specialization.is_some() {
        form.select_specialization(args.specialization);
    }
    form.select_doctor(args.doctor_id);
    form.set_scheduled_time(args.scheduled_time);

    let request = form.to_request()?;
    appointment_api::request_appointment(portal.api(), &session.token, &request)
        .await
        .map_err(|err| anyhow!(err.inline_message(REQUEST_FAILED_MESSAGE)))?;

    info!(specialization = %request.specialization, "appointment requested");
    form.reset();
    Ok(format!("{REQUEST_OK_MESSAGE}\n"))
}

/// # Errors
/// Returns an error when the session may not see records or the request
/// fails.
pub async fn reports(portal: &Portal) -> Result<String> {
    let session = portal.mount(Route::Records)?;
    let list = report_api::my_reports(portal.api(), &session.token)
        .await
        .map_err(|err| anyhow!(err.inline_message("Failed to load reports")))?;

    if list.is_empty() {
        return Ok("No reports yet\n".to_string());
    }

    let mut out = String::new();
    for report in &list {
        let _ = writeln!(
            out,
            "{:<12} {}",
            report.created_at.as_deref().unwrap_or("-"),
            report.display_title()
        );
    }
    Ok(out)
}
