//! Client helpers for appointment endpoints. Both calls need a bearer token;
//! the backend decides which appointments belong to the caller.

use super::types::{Appointment, AppointmentRequest};
use crate::{
    api::{ApiClient, ApiError},
    features::auth::BearerToken,
};
use tracing::instrument;

/// Shown when the backend rejects a booking without a message of its own.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";
/// Shown after the backend accepts a booking.
pub const REQUEST_OK_MESSAGE: &str = "Appointment requested successfully!";

/// Lists the caller's appointments.
///
/// # Errors
/// Returns `ApiError` on transport or HTTP failure.
pub async fn my_appointments(
    api: &ApiClient,
    token: &BearerToken,
) -> Result<Vec<Appointment>, ApiError> {
    api.get_json(&["appointments", "mine"], Some(token.as_str()))
        .await
}

/// Requests an appointment with a doctor.
///
/// # Errors
/// Returns `ApiError` on transport or HTTP failure.
#[instrument(skip_all, fields(doctor_id = %request.doctor_id))]
pub async fn request_appointment(
    api: &ApiClient,
    token: &BearerToken,
    request: &AppointmentRequest,
) -> Result<(), ApiError> {
    api.post_json_empty(&["appointments", "request"], request, Some(token.as_str()))
        .await
}
