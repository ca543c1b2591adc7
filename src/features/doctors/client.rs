//! Client helpers for doctor directory endpoints. Every call carries the
//! session's bearer token.

use super::{
    symptoms::Specialization,
    types::{AvailabilityResponse, AvailabilitySlot, Doctor},
};
use crate::{
    api::{ApiClient, ApiError},
    features::auth::BearerToken,
};

/// Lists every doctor.
///
/// # Errors
/// Returns `ApiError` on transport or HTTP failure.
pub async fn list_doctors(
    api: &ApiClient,
    token: &BearerToken,
) -> Result<Vec<Doctor>, ApiError> {
    api.get_json(&["auth", "doctors"], Some(token.as_str())).await
}

/// Lists doctors for one specialization.
///
/// # Errors
/// Returns `ApiError` on transport or HTTP failure.
pub async fn list_by_specialization(
    api: &ApiClient,
    token: &BearerToken,
    specialization: Specialization,
) -> Result<Vec<Doctor>, ApiError> {
    api.get_json(
        &["auth", "doctors", "specialization", specialization.label()],
        Some(token.as_str()),
    )
    .await
}

/// Lists the specialization's doctors when one is selected, otherwise all.
///
/// # Errors
/// Returns `ApiError` on transport or HTTP failure.
pub async fn list_for_filter(
    api: &ApiClient,
    token: &BearerToken,
    specialization: Option<Specialization>,
) -> Result<Vec<Doctor>, ApiError> {
    match specialization {
        Some(specialization) => list_by_specialization(api, token, specialization).await,
        None => list_doctors(api, token).await,
    }
}

/// Fetches a doctor's availability after basic input validation.
///
/// # Errors
/// Returns `ApiError::Config` for an empty id, otherwise transport or HTTP
/// failures.
pub async fn availability(
    api: &ApiClient,
    token: &BearerToken,
    doctor_id: &str,
) -> Result<Vec<AvailabilitySlot>, ApiError> {
    let trimmed = doctor_id.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Config("Doctor id is required.".to_string()));
    }

    let response: AvailabilityResponse = api
        .get_json(
            &["auth", "doctors", "availability", trimmed],
            Some(token.as_str()),
        )
        .await?;
    Ok(response.availability)
}
