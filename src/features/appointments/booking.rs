//! Booking form state. Picking a problem pre-selects its first recommended
//! specialization as the doctor filter; the filter narrows the list but the
//! user may still book any doctor.

use super::types::AppointmentRequest;
use crate::features::doctors::{filter_by_specialization, Doctor, Problem, Specialization};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("{0} is required")]
    Missing(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub doctor_id: String,
    pub reason: Option<Problem>,
    pub specialization: Option<Specialization>,
    pub scheduled_time: String,
}

impl BookingForm {
    /// Sets the reported problem and resets the specialization to its default.
    /// Clearing the problem clears the specialization.
    pub fn select_problem(&mut self, problem: Option<Problem>) {
        self.reason = problem;
        self.specialization = problem.map(Problem::default_specialization);
    }

    /// Overrides the pre-selected specialization.
    pub fn select_specialization(&mut self, specialization: Option<Specialization>) {
        self.specialization = specialization;
    }

    pub fn select_doctor(&mut self, doctor_id: impl Into<String>) {
        self.doctor_id = doctor_id.into();
    }

    pub fn set_scheduled_time(&mut self, scheduled_time: impl Into<String>) {
        self.scheduled_time = scheduled_time.into();
    }

    /// Doctors shown for the current filter.
    #[must_use]
    pub fn visible_doctors<'a>(&self, doctors: &'a [Doctor]) -> Vec<&'a Doctor> {
        filter_by_specialization(doctors, self.specialization)
    }

    /// Builds the request body.
    ///
    /// # Errors
    /// Returns the first missing field: reason, doctor or scheduled time.
    pub fn to_request(&self) -> Result<AppointmentRequest, BookingError> {
        let reason = self.reason.ok_or(BookingError::Missing("reason"))?;

        let doctor_id = self.doctor_id.trim();
        if doctor_id.is_empty() {
            return Err(BookingError::Missing("doctor"));
        }

        let scheduled_time = self.scheduled_time.trim();
        if scheduled_time.is_empty() {
            return Err(BookingError::Missing("scheduled time"));
        }

        Ok(AppointmentRequest {
            doctor_id: doctor_id.to_string(),
            reason: reason.label().to_string(),
            specialization: self
                .specialization
                .map(|spec| spec.label().to_string())
                .unwrap_or_default(),
            scheduled_time: scheduled_time.to_string(),
        })
    }

    /// Clears the form after a successful request.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
